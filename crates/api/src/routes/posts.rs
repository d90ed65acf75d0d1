//! Handlers for post reads.

use axum::extract::State;
use axum::Json;

use embr_db::models::post::PostWithAuthor;
use embr_db::repositories::PostRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/posts
///
/// List all posts, newest first, each annotated with the author's name
/// and email only.
pub async fn list_posts(State(state): State<AppState>) -> AppResult<Json<Vec<PostWithAuthor>>> {
    let posts = PostRepo::list_with_author(&state.pool).await?;
    Ok(Json(posts))
}
