//! Error types for the book catalog server

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::repository::StoreError;

/// Stable error codes carried in every error body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    StoreFailure = 1,
    NoSuchBook = 2,
    MissingField = 3,
    BadValue = 4,
    Unavailable = 5,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Send all required fields: title, author, publishYear")]
    MissingFields(Vec<&'static str>),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

/// Error response body
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    /// Human readable description of the failure
    pub message: String,
    /// Required fields absent from the request body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<Vec<String>>,
}

impl AppError {
    /// Status code and error code this error translates to
    pub fn status(&self) -> (StatusCode, ErrorCode) {
        match self {
            AppError::MissingFields(_) => (StatusCode::BAD_REQUEST, ErrorCode::MissingField),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchBook),
            AppError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::StoreFailure),
            AppError::Unavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, ErrorCode::Unavailable),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status();

        let (message, missing) = match self {
            AppError::MissingFields(fields) => (
                "Send all required fields: title, author, publishYear".to_string(),
                Some(fields.into_iter().map(str::to_string).collect()),
            ),
            AppError::BadRequest(msg) => (msg, None),
            AppError::NotFound(msg) => (msg, None),
            AppError::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                (e.to_string(), None)
            }
            AppError::Unavailable(msg) => {
                tracing::warn!("Service unavailable: {}", msg);
                (msg, None)
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
            missing,
        });

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
