//! Handlers for user reads.

use axum::extract::State;
use axum::Json;

use embr_db::models::user::UserWithPosts;
use embr_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/users
///
/// List all users, each with their posts nested.
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserWithPosts>>> {
    let users = UserRepo::list_with_posts(&state.pool).await?;
    Ok(Json(users))
}
