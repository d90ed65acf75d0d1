use embr_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::post::{CreatePost, Post};

/// A row from the `users` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
}

/// A user with their posts nested.
#[derive(Debug, Serialize)]
pub struct UserWithPosts {
    #[serde(flatten)]
    pub user: User,
    pub posts: Vec<Post>,
}

/// DTO for creating a user, optionally with posts in the same operation.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub posts: Vec<CreatePost>,
}
