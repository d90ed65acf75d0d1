pub mod db_info;
pub mod health;
pub mod posts;
pub mod todos;
pub mod users;

use axum::routing::{get, patch};
use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /todos          list (GET), create (POST)
/// /todos/{id}     partial update (PATCH), delete (DELETE)
/// /users          list with nested posts (GET)
/// /posts          list with author (GET)
/// /db/info        table counts and environment info (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/todos", get(todos::list_todos).post(todos::create_todo))
        .route(
            "/todos/{id}",
            patch(todos::update_todo).delete(todos::delete_todo),
        )
        .route("/users", get(users::list_users))
        .route("/posts", get(posts::list_posts))
        .route("/db/info", get(db_info::db_info))
}
