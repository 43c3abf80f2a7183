//! Postgres book store tests.
//!
//! Each test gets a fresh database from `DATABASE_URL` with the migrations
//! applied.

use book_catalog::{
    models::BookFields,
    repository::{BookStore, PgBookStore},
};
use sqlx::PgPool;

fn fields(title: &str, year: i32) -> BookFields {
    BookFields {
        title: title.to_string(),
        author: "Herbert".to_string(),
        publish_year: year,
    }
}

#[sqlx::test]
#[ignore] // Needs a Postgres server: DATABASE_URL=... cargo test -- --ignored
async fn test_pg_document_round_trip(pool: PgPool) {
    let store = PgBookStore::new(pool);

    let created = store
        .insert(&fields("Dune", 1965))
        .await
        .expect("Failed to insert book");
    assert_eq!(created.title, "Dune");
    assert_eq!(created.author, "Herbert");
    assert_eq!(created.publish_year, 1965);

    let fetched = store
        .find(created.id)
        .await
        .expect("Failed to find book")
        .expect("Book missing");
    assert_eq!(fetched, created);
}

#[sqlx::test]
#[ignore]
async fn test_pg_find_all_in_insertion_order(pool: PgPool) {
    let store = PgBookStore::new(pool);

    let mut ids = Vec::new();
    for (title, year) in [("C", 3), ("A", 1), ("B", 2)] {
        ids.push(store.insert(&fields(title, year)).await.expect("Failed to insert book").id);
    }
    assert!(store.delete(ids[1]).await.expect("Failed to delete book"));

    let titles: Vec<_> = store
        .find_all()
        .await
        .expect("Failed to list books")
        .into_iter()
        .map(|book| book.title)
        .collect();
    assert_eq!(titles, vec!["C", "B"]);
}

#[sqlx::test]
#[ignore]
async fn test_pg_replace_refreshes_updated_at(pool: PgPool) {
    let store = PgBookStore::new(pool);

    let created = store
        .insert(&fields("Dune", 1965))
        .await
        .expect("Failed to insert book");
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let updated = store
        .replace(created.id, &fields("Dune", 1966))
        .await
        .expect("Failed to replace book")
        .expect("Book missing");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.publish_year, 1966);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[sqlx::test]
#[ignore]
async fn test_pg_missing_ids(pool: PgPool) {
    let store = PgBookStore::new(pool);
    let id = book_catalog::models::BookId::new();

    assert!(store.find(id).await.expect("Failed to find book").is_none());
    assert!(store
        .replace(id, &fields("Dune", 1965))
        .await
        .expect("Failed to replace book")
        .is_none());
    assert!(!store.delete(id).await.expect("Failed to delete book"));
    store.ping().await.expect("Failed to ping store");
}
