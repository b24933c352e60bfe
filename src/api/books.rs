//! Book endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookResponse, BooksResponse, MessageResponse},
    schema,
};

/// Validate a raw body against the book schema, then decode it.
///
/// Validation runs on the raw JSON so that a bad body reports every
/// violation, not just the first field serde trips over.
fn decode_book(body: Value) -> AppResult<Book> {
    if let Err(errors) = schema::book_schema().validate(&body) {
        return Err(AppError::Validation(errors));
    }
    // The schema covers types and integer ranges, so a validated body
    // always decodes; a failure here is a schema/model mismatch.
    serde_json::from_value(body)
        .map_err(|e| AppError::Internal(format!("Failed to decode validated body: {}", e)))
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books, ordered by title", body = BooksResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<BooksResponse>> {
    let books = state.repository.books.list().await?;
    Ok(Json(BooksResponse { books }))
}

/// Get a book by ISBN
#[utoipa::path(
    get,
    path = "/books/{isbn}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<BookResponse>> {
    let book = state.repository.books.get_by_isbn(&isbn).await?;
    Ok(Json(BookResponse { book }))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = BookResponse),
        (status = 400, description = "Invalid body", body = crate::error::ErrorResponse),
        (status = 409, description = "ISBN already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<BookResponse>)> {
    let book = decode_book(body)?;
    let created = state.repository.books.create(&book).await?;
    Ok((StatusCode::CREATED, Json(BookResponse { book: created })))
}

/// Update an existing book (full replace)
#[utoipa::path(
    put,
    path = "/books/{isbn}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    request_body = Book,
    responses(
        (status = 200, description = "Book updated", body = BookResponse),
        (status = 400, description = "Invalid body", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<BookResponse>> {
    let book = decode_book(body)?;
    let updated = state.repository.books.update(&isbn, &book).await?;
    Ok(Json(BookResponse { book: updated }))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{isbn}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.repository.books.delete(&isbn).await?;
    Ok(Json(MessageResponse {
        message: "Book deleted".to_string(),
    }))
}
