use embr_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `todos` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub completed: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a todo.
///
/// `title` is optional here so a missing field reaches the handler's
/// presence check instead of failing JSON deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub title: Option<String>,
}

/// DTO for partially updating a todo. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
}
