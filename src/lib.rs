//! Bookshelf book catalog service
//!
//! A small Rust REST server exposing a JSON CRUD API over a single
//! Postgres `books` table, with declarative validation of request bodies.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod schema;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repository: repository::Repository,
}
