//! Repository for the `todos` table.

use embr_core::types::DbId;
use sqlx::PgPool;

use crate::models::todo::{Todo, UpdateTodo};

/// Column list for todos queries.
const COLUMNS: &str = "id, title, completed, created_at";

/// Provides CRUD operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// List all todos, newest first. Ties on `created_at` break by id so
    /// the order stays deterministic within a single timestamp.
    pub async fn list(pool: &PgPool) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM todos ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Todo>(&query).fetch_all(pool).await
    }

    /// Insert a todo, returning the created row.
    pub async fn create(
        pool: &PgPool,
        title: &str,
        completed: bool,
    ) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (title, completed) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(title)
            .bind(completed)
            .fetch_one(pool)
            .await
    }

    /// Apply a partial update, returning the updated row or `None` when
    /// the id does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTodo,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!(
            "UPDATE todos SET \
                title = COALESCE($2, title), \
                completed = COALESCE($3, completed) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.completed)
            .fetch_optional(pool)
            .await
    }

    /// Delete a todo, returning the number of rows removed (0 or 1).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map(|result| result.rows_affected())
    }
}
