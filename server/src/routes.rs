//! CRUD handlers for `/todos`.
//!
//! Bodies arrive as untyped `Json<Value>` and go through `Todo::parse` or
//! `Todo::apply_patch`, so schema errors come from the record model rather
//! than from serde derive messages.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use todo_core::Todo;

use crate::error::ApiError;
use crate::store::TodoStore;

pub fn router(store: TodoStore) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo).delete(delete_all_todos))
        .route(
            "/todos/{id}",
            get(get_todo)
                .patch(update_todo)
                .put(update_todo)
                .delete(delete_todo),
        )
        .with_state(store)
}

async fn list_todos(State(store): State<TodoStore>) -> Json<Vec<Value>> {
    let todos = store.list().await;
    tracing::debug!(count = todos.len(), "listing todos");
    Json(todos.iter().map(Todo::to_json).collect())
}

async fn create_todo(
    State(store): State<TodoStore>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let todo = Todo::parse(&body)?;
    let created = store.create(&todo).await;
    tracing::info!(id = ?created.id(), title = created.title(), "created todo");
    Ok((StatusCode::CREATED, Json(created.to_json())))
}

async fn delete_all_todos(State(store): State<TodoStore>) -> StatusCode {
    let removed = store.clear().await;
    tracing::info!(removed, "deleted all todos");
    StatusCode::NO_CONTENT
}

async fn get_todo(
    State(store): State<TodoStore>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    match store.get(&id).await {
        Some(todo) => Ok(Json(todo.to_json())),
        None => Err(ApiError::NotFound { id }),
    }
}

async fn update_todo(
    State(store): State<TodoStore>,
    Path(id): Path<String>,
    Json(patch): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    match store.update(&id, &patch).await? {
        Some(todo) => {
            tracing::info!(%id, "updated todo");
            Ok(Json(todo.to_json()))
        }
        None => Err(ApiError::NotFound { id }),
    }
}

async fn delete_todo(
    State(store): State<TodoStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    match store.delete(&id).await {
        Some(_) => {
            tracing::info!(%id, "deleted todo");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(ApiError::NotFound { id }),
    }
}
