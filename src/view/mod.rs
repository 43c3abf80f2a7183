//! Catalog view: tabular rendering of book records

pub mod book_table;

pub use book_table::{BookTable, TableRow};
