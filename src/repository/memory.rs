//! In-memory book store

use std::sync::Arc;

use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use super::{BookStore, StoreResult};
use crate::models::{Book, BookFields, BookId};

/// Insertion-ordered store, shared between clones
#[derive(Clone, Default)]
pub struct MemoryBookStore {
    books: Arc<RwLock<IndexMap<BookId, Book>>>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl BookStore for MemoryBookStore {
    async fn insert(&self, fields: &BookFields) -> StoreResult<Book> {
        let now = Utc::now();
        let book = Book {
            id: BookId::new(),
            title: fields.title.clone(),
            author: fields.author.clone(),
            publish_year: fields.publish_year,
            created_at: now,
            updated_at: now,
        };
        self.books.write().await.insert(book.id, book.clone());
        Ok(book)
    }

    async fn find_all(&self) -> StoreResult<Vec<Book>> {
        Ok(self.books.read().await.values().cloned().collect())
    }

    async fn find(&self, id: BookId) -> StoreResult<Option<Book>> {
        Ok(self.books.read().await.get(&id).cloned())
    }

    async fn replace(&self, id: BookId, fields: &BookFields) -> StoreResult<Option<Book>> {
        let mut books = self.books.write().await;
        Ok(books.get_mut(&id).map(|book| {
            book.title = fields.title.clone();
            book.author = fields.author.clone();
            book.publish_year = fields.publish_year;
            book.updated_at = Utc::now();
            book.clone()
        }))
    }

    async fn delete(&self, id: BookId) -> StoreResult<bool> {
        // shift_remove keeps the remaining records in insertion order
        Ok(self.books.write().await.shift_remove(&id).is_some())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
