//! Book record and response wrappers

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A catalog book, keyed by ISBN
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    /// Unique book identifier, primary key
    pub isbn: String,
    pub amazon_url: String,
    pub author: String,
    pub language: String,
    pub pages: i32,
    pub publisher: String,
    pub title: String,
    pub year: i32,
}

/// Response wrapper for a single book
#[derive(Serialize, ToSchema)]
pub struct BookResponse {
    pub book: Book,
}

/// Response wrapper for a book list
#[derive(Serialize, ToSchema)]
pub struct BooksResponse {
    pub books: Vec<Book>,
}

/// Confirmation message response
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
