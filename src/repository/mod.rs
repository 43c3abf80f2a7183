//! Repository layer: the storage capability behind the book service

pub mod books;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use thiserror::Error;

use crate::models::{Book, BookFields, BookId};

pub use books::PgBookStore;
pub use memory::MemoryBookStore;

/// Errors raised by a book store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Document store holding book records.
///
/// Implementations assign identifiers and timestamps. `find_all` returns
/// records in insertion order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Persist a new record and return it with its assigned identifier
    async fn insert(&self, fields: &BookFields) -> StoreResult<Book>;

    async fn find_all(&self) -> StoreResult<Vec<Book>>;

    async fn find(&self, id: BookId) -> StoreResult<Option<Book>>;

    /// Replace the mutable fields; `None` when no record has this id
    async fn replace(&self, id: BookId, fields: &BookFields) -> StoreResult<Option<Book>>;

    /// Remove a record; `false` when no record has this id
    async fn delete(&self, id: BookId) -> StoreResult<bool>;

    /// Connectivity check
    async fn ping(&self) -> StoreResult<()>;
}

/// Main repository struct holding the configured store
#[derive(Clone)]
pub struct Repository {
    pub books: Arc<dyn BookStore>,
}

impl Repository {
    pub fn new(books: Arc<dyn BookStore>) -> Self {
        Self { books }
    }

    /// Repository backed by the given Postgres pool
    pub fn postgres(pool: Pool<Postgres>) -> Self {
        Self::new(Arc::new(PgBookStore::new(pool)))
    }

    /// Repository backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBookStore::new()))
    }
}
