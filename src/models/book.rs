//! Book model and request types.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Store-assigned book identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(Uuid);

impl BookId {
    /// Fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for BookId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for BookId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Stored book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(rename = "_id", alias = "id")]
    #[schema(value_type = String, format = Uuid)]
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub publish_year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The three mutable fields of a book, all present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub publish_year: i32,
}

/// Create / update request body.
///
/// Every field is optional at the wire level so that an absent field is
/// reported as a missing field rather than a JSON rejection. Any `_id` sent
/// by the client is ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    #[validate(required, length(min = 1))]
    pub author: Option<String>,
    #[validate(required)]
    pub publish_year: Option<i32>,
}

/// Wire names of the required fields, in reporting order
pub const REQUIRED_FIELDS: [&str; 3] = ["title", "author", "publishYear"];

impl BookInput {
    /// Check field presence and produce the validated field set.
    pub fn into_fields(self) -> AppResult<BookFields> {
        if let Err(errors) = self.validate() {
            let failed = errors.field_errors();
            let missing = REQUIRED_FIELDS
                .into_iter()
                .filter(|wire| {
                    failed
                        .keys()
                        .any(|key| wire_name(key).is_some_and(|name| name == *wire))
                })
                .collect();
            return Err(AppError::MissingFields(missing));
        }

        match (self.title, self.author, self.publish_year) {
            (Some(title), Some(author), Some(publish_year)) => Ok(BookFields {
                title,
                author,
                publish_year,
            }),
            _ => Err(AppError::MissingFields(REQUIRED_FIELDS.to_vec())),
        }
    }
}

fn wire_name(key: &str) -> Option<&'static str> {
    match key {
        "title" => Some("title"),
        "author" => Some("author"),
        "publish_year" | "publishYear" => Some("publishYear"),
        _ => None,
    }
}
