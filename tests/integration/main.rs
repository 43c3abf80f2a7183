//! Integration tests

mod live_tests;
mod pg_store_tests;
