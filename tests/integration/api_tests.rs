//! API integration tests

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

/// A full valid book body with the given ISBN
fn book_body(isbn: &str) -> Value {
    json!({
        "isbn": isbn,
        "amazon_url": "http://a.co/eobPtX2",
        "author": "Matthew Lane",
        "language": "english",
        "pages": 264,
        "publisher": "Princeton University Press",
        "title": "Power-Up: Unlocking the Hidden Mathematics in Video Games",
        "year": 2017
    })
}

/// Create a book, panicking on failure
async fn create_book(client: &Client, isbn: &str) {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&book_body(isbn))
        .send()
        .await
        .expect("Failed to send create request");
    assert_eq!(response.status(), 201);
}

/// Delete a book, ignoring failures (cleanup helper)
async fn delete_book(client: &Client, isbn: &str) {
    let _ = client
        .delete(format!("{}/books/{}", BASE_URL, isbn))
        .send()
        .await;
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check_pings_database() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_list_books() {
    let client = Client::new();
    create_book(&client, "it-list-1").await;

    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let books = body["books"].as_array().expect("books is not an array");
    assert!(books.iter().any(|b| b["isbn"] == "it-list-1"));
    assert!(books[0]["author"].is_string());

    delete_book(&client, "it-list-1").await;
}

#[tokio::test]
#[ignore]
async fn test_get_book_by_isbn() {
    let client = Client::new();
    create_book(&client, "it-get-1").await;

    let response = client
        .get(format!("{}/books/it-get-1", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["book"]["isbn"], "it-get-1");
    assert_eq!(body["book"]["year"], 2017);

    delete_book(&client, "it-get-1").await;
}

#[tokio::test]
#[ignore]
async fn test_get_unknown_book_returns_404() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books/no-such-isbn", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_create_book() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&book_body("it-create-1"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["book"]["isbn"], "it-create-1");
    assert_eq!(body["book"]["year"], 2017);

    delete_book(&client, "it-create-1").await;
}

#[tokio::test]
#[ignore]
async fn test_create_book_missing_fields_returns_400() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "isbn": "it-create-2",
            "amazon_url": "http://a.co/eobPtX2"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    let errors = body["errors"].as_array().expect("errors is not an array");
    assert!(errors
        .iter()
        .any(|e| e.as_str().unwrap_or_default().contains("title")));
}

#[tokio::test]
#[ignore]
async fn test_create_duplicate_isbn_returns_409() {
    let client = Client::new();
    create_book(&client, "it-create-3").await;

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&book_body("it-create-3"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);

    delete_book(&client, "it-create-3").await;
}

#[tokio::test]
#[ignore]
async fn test_update_book() {
    let client = Client::new();
    create_book(&client, "it-update-1").await;

    let mut body = book_body("it-update-1");
    body["title"] = json!("UPDATED BOOK");

    let response = client
        .put(format!("{}/books/it-update-1", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["book"]["isbn"], "it-update-1");
    assert_eq!(body["book"]["title"], "UPDATED BOOK");

    delete_book(&client, "it-update-1").await;
}

#[tokio::test]
#[ignore]
async fn test_update_book_with_extra_field_returns_400() {
    let client = Client::new();
    create_book(&client, "it-update-2").await;

    let mut body = book_body("it-update-2");
    body["wrong_field"] = json!("jsdot");

    let response = client
        .put(format!("{}/books/it-update-2", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    delete_book(&client, "it-update-2").await;
}

#[tokio::test]
#[ignore]
async fn test_update_unknown_book_returns_404() {
    let client = Client::new();

    let response = client
        .put(format!("{}/books/no-such-isbn", BASE_URL))
        .json(&book_body("no-such-isbn"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_delete_book() {
    let client = Client::new();
    create_book(&client, "it-delete-1").await;

    let response = client
        .delete(format!("{}/books/it-delete-1", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book deleted");

    // The book is gone afterwards
    let response = client
        .get(format!("{}/books/it-delete-1", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_delete_unknown_book_returns_404() {
    let client = Client::new();

    let response = client
        .delete(format!("{}/books/no-such-isbn", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}
