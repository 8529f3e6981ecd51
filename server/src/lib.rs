//! HTTP CRUD service for todos.
//!
//! # Overview
//! A thin axum layer over `todo-core`: handlers decode JSON, hand it to the
//! record model for validation, and keep validated records in an in-memory
//! `TodoStore`. Schema violations become 400 responses with a JSON body.

pub mod config;
pub mod error;
pub mod routes;
pub mod store;

use axum::Router;
use tokio::net::TcpListener;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use store::TodoStore;

/// Router backed by a fresh, empty store.
pub fn app() -> Router {
    routes::router(TodoStore::new())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
