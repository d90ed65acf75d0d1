//! Handlers for todo CRUD.
//!
//! A malformed (non-integer) `{id}` segment is rejected by the `Path<DbId>`
//! extractor with 400; a well-formed but absent id returns 404.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use embr_core::error::CoreError;
use embr_core::todo::validate_title;
use embr_core::types::DbId;
use embr_db::models::todo::{CreateTodo, Todo, UpdateTodo};
use embr_db::repositories::TodoRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/todos
///
/// List all todos, newest first.
pub async fn list_todos(State(state): State<AppState>) -> AppResult<Json<Vec<Todo>>> {
    let todos = TodoRepo::list(&state.pool).await?;
    Ok(Json(todos))
}

/// POST /api/todos
///
/// Create a todo from `{"title": ...}`. A missing or empty title is a
/// validation error (400).
pub async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<CreateTodo>,
) -> AppResult<impl IntoResponse> {
    let title = validate_title(input.title.as_deref()).map_err(CoreError::Validation)?;

    let todo = TodoRepo::create(&state.pool, title, false).await?;

    tracing::info!(todo_id = todo.id, "Todo created");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// PATCH /api/todos/{id}
///
/// Apply a partial update; only the supplied fields change.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTodo>,
) -> AppResult<Json<Todo>> {
    if let Some(ref title) = input.title {
        validate_title(Some(title)).map_err(CoreError::Validation)?;
    }

    let todo = TodoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Todo", id })?;

    Ok(Json(todo))
}

/// DELETE /api/todos/{id}
///
/// Remove a todo; 204 on success, 404 when the id does not exist.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TodoRepo::delete(&state.pool, id).await?;
    if deleted == 0 {
        return Err(CoreError::NotFound { entity: "Todo", id }.into());
    }

    tracing::info!(todo_id = id, "Todo deleted");

    Ok(StatusCode::NO_CONTENT)
}
