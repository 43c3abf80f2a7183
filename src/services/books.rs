//! Book resource service.
//!
//! Validates request bodies, resolves identifiers and delegates to the
//! configured [`BookStore`](crate::repository::BookStore). Every outcome is
//! an [`AppResult`]; translation to HTTP happens in [`crate::error`].

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookId, BookInput},
    repository::Repository,
};

const NOT_FOUND: &str = "Book not found";

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

/// An identifier that does not parse cannot name a stored book.
fn resolve_id(raw: &str) -> AppResult<BookId> {
    raw.parse::<BookId>().map_err(|e| {
        tracing::debug!("Unresolvable book id {:?}: {}", raw, e);
        AppError::NotFound(NOT_FOUND.to_string())
    })
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a new book. Each call stores a new record.
    pub async fn create(&self, input: BookInput) -> AppResult<Book> {
        let fields = input.into_fields()?;
        let book = self.repository.books.insert(&fields).await?;
        tracing::info!("Created book id={} title={:?}", book.id, book.title);
        Ok(book)
    }

    /// All books in store order
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.repository.books.find_all().await?)
    }

    pub async fn get(&self, id: &str) -> AppResult<Book> {
        let id = resolve_id(id)?;
        self.repository
            .books
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    /// Replace title, author and publish year. The body is validated before
    /// the identifier is looked up.
    pub async fn update(&self, id: &str, input: BookInput) -> AppResult<Book> {
        let fields = input.into_fields()?;
        let id = resolve_id(id)?;
        let book = self
            .repository
            .books
            .replace(id, &fields)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
        tracing::info!("Updated book id={}", book.id);
        Ok(book)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let id = resolve_id(id)?;
        if !self.repository.books.delete(id).await? {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }
        tracing::info!("Deleted book id={}", id);
        Ok(())
    }

    /// Check that the store is reachable
    pub async fn ping(&self) -> AppResult<()> {
        self.repository
            .books
            .ping()
            .await
            .map_err(|e| AppError::Unavailable(e.to_string()))
    }
}
