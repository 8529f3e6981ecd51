//! In-memory todo storage.
//!
//! # Design
//! `TodoStore` is a cloneable handle around a shared map, so every axum
//! handler can hold one as state. Records are stored already validated;
//! the store only assigns ids and applies patches under a single write lock.

use std::{cmp::Ordering, collections::HashMap, sync::Arc};

use serde_json::Value;
use todo_core::{ModelError, Todo};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    todos: Arc<RwLock<HashMap<String, Todo>>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All stored todos, sorted by `order` (unset last), then title, then id.
    pub async fn list(&self) -> Vec<Todo> {
        let mut todos: Vec<Todo> = self.todos.read().await.values().cloned().collect();
        todos.sort_by(listing_order);
        todos
    }

    pub async fn get(&self, id: &str) -> Option<Todo> {
        self.todos.read().await.get(id).cloned()
    }

    /// Store `todo` under a fresh id, replacing any id it already carries.
    pub async fn create(&self, todo: &Todo) -> Todo {
        let id = Uuid::new_v4().to_string();
        let todo = todo.with_id(id.clone());
        self.todos.write().await.insert(id, todo.clone());
        todo
    }

    /// Apply `patch` to the todo stored under `id`.
    ///
    /// Returns `Ok(None)` when no such todo exists. The stored id always
    /// wins over an `id` supplied in the patch.
    pub async fn update(&self, id: &str, patch: &Value) -> Result<Option<Todo>, ModelError> {
        let mut todos = self.todos.write().await;
        let Some(current) = todos.get_mut(id) else {
            return Ok(None);
        };
        let updated = current.apply_patch(patch)?.with_id(id);
        *current = updated.clone();
        Ok(Some(updated))
    }

    pub async fn delete(&self, id: &str) -> Option<Todo> {
        self.todos.write().await.remove(id)
    }

    /// Remove every todo, returning how many were removed.
    pub async fn clear(&self) -> usize {
        let mut todos = self.todos.write().await;
        let removed = todos.len();
        todos.clear();
        removed
    }
}

fn listing_order(a: &Todo, b: &Todo) -> Ordering {
    let by_order = match (a.order(), b.order()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_order
        .then_with(|| a.title().cmp(b.title()))
        .then_with(|| a.id().cmp(&b.id()))
}
