//! Server-rendered catalog page

use axum::{extract::State, response::Html};

use crate::{error::AppResult, view::BookTable};

/// Render the catalog table of all books
pub async fn catalog_page(State(state): State<crate::AppState>) -> AppResult<Html<String>> {
    let books = state.services.books.list().await?;
    Ok(Html(BookTable::from_books(&books).render_page()))
}
