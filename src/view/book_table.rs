//! Book table model and HTML rendering.
//!
//! The table is a pure function of the book slice it is built from. Display
//! numbers are 1-based positions in that slice and have nothing to do with
//! record identifiers.

use crate::models::{Book, BookId};

/// Link target for creating a book
pub const CREATE_HREF: &str = "/books/create";

pub fn details_href(id: BookId) -> String {
    format!("/books/details/{}", id)
}

pub fn edit_href(id: BookId) -> String {
    format!("/books/edit/{}", id)
}

pub fn delete_href(id: BookId) -> String {
    format!("/books/delete/{}", id)
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// 1-based display number
    pub index: usize,
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub publish_year: i32,
    pub details_href: String,
    pub edit_href: String,
    pub delete_href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookTable {
    pub rows: Vec<TableRow>,
}

impl BookTable {
    pub fn from_books(books: &[Book]) -> Self {
        let rows = books
            .iter()
            .enumerate()
            .map(|(position, book)| TableRow {
                index: position + 1,
                id: book.id,
                title: book.title.clone(),
                author: book.author.clone(),
                publish_year: book.publish_year,
                details_href: details_href(book.id),
                edit_href: edit_href(book.id),
                delete_href: delete_href(book.id),
            })
            .collect();
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the `<table>` element
    pub fn render_table(&self) -> String {
        let mut html = String::from(
            "<table class=\"books\">\n<thead>\n<tr>\
             <th>No</th><th>Title</th><th class=\"optional\">Author</th>\
             <th class=\"optional\">Publish Year</th><th>Operations</th>\
             </tr>\n</thead>\n<tbody>\n",
        );

        for row in &self.rows {
            html.push_str(&format!(
                "<tr data-id=\"{id}\"><td>{index}</td><td>{title}</td>\
                 <td class=\"optional\">{author}</td><td class=\"optional\">{year}</td>\
                 <td class=\"operations\">\
                 <a href=\"{details}\" title=\"Details\">Details</a> \
                 <a href=\"{edit}\" title=\"Edit\">Edit</a> \
                 <a href=\"{delete}\" title=\"Delete\">Delete</a>\
                 </td></tr>\n",
                id = row.id,
                index = row.index,
                title = escape_html(&row.title),
                author = escape_html(&row.author),
                year = row.publish_year,
                details = row.details_href,
                edit = row.edit_href,
                delete = row.delete_href,
            ));
        }

        html.push_str("</tbody>\n</table>");
        html
    }

    /// Render the full catalog page
    pub fn render_page(&self) -> String {
        let content = if self.is_empty() {
            "<p class=\"empty\">No books yet.</p>".to_string()
        } else {
            self.render_table()
        };

        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>Books List</title>\n</head>\n<body>\n\
             <header><h1>Books List</h1><a href=\"{create}\" title=\"Create\">Create</a></header>\n\
             {content}\n</body>\n</html>\n",
            create = CREATE_HREF,
            content = content,
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
