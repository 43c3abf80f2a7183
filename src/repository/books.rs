//! Postgres book store.
//!
//! Books are kept as JSONB documents in the `books` table; `seq` preserves
//! insertion order for listing.

use chrono::{DateTime, Utc};
use sqlx::{types::Json, FromRow, Pool, Postgres};
use uuid::Uuid;

use super::{BookStore, StoreResult};
use crate::models::{Book, BookFields, BookId};

#[derive(Debug, FromRow)]
struct BookDocumentRow {
    id: Uuid,
    document: Json<BookFields>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BookDocumentRow> for Book {
    fn from(row: BookDocumentRow) -> Self {
        let Json(fields) = row.document;
        Book {
            id: BookId::from(row.id),
            title: fields.title,
            author: fields.author,
            publish_year: fields.publish_year,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct PgBookStore {
    pool: Pool<Postgres>,
}

impl PgBookStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl BookStore for PgBookStore {
    async fn insert(&self, fields: &BookFields) -> StoreResult<Book> {
        let row = sqlx::query_as::<_, BookDocumentRow>(
            r#"
            INSERT INTO books (id, document)
            VALUES ($1, $2)
            RETURNING id, document, created_at, updated_at
            "#,
        )
        .bind(BookId::new().as_uuid())
        .bind(Json(fields))
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn find_all(&self) -> StoreResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, BookDocumentRow>(
            "SELECT id, document, created_at, updated_at FROM books ORDER BY seq",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find(&self, id: BookId) -> StoreResult<Option<Book>> {
        let row = sqlx::query_as::<_, BookDocumentRow>(
            "SELECT id, document, created_at, updated_at FROM books WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Book::from))
    }

    async fn replace(&self, id: BookId, fields: &BookFields) -> StoreResult<Option<Book>> {
        let row = sqlx::query_as::<_, BookDocumentRow>(
            r#"
            UPDATE books SET document = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, document, created_at, updated_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(Json(fields))
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Book::from))
    }

    async fn delete(&self, id: BookId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
