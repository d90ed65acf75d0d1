use embr_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `posts` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: DbId,
    pub title: String,
    pub content: Option<String>,
    pub published: bool,
    pub author_id: DbId,
    pub created_at: Timestamp,
}

/// A post joined with its author's name and email.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PostWithAuthor {
    pub id: DbId,
    pub title: String,
    pub content: Option<String>,
    pub published: bool,
    pub author_id: DbId,
    pub created_at: Timestamp,
    #[sqlx(flatten)]
    pub author: PostAuthor,
}

/// The author fields exposed on a joined post (nothing else leaks).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PostAuthor {
    #[sqlx(rename = "author_name")]
    pub name: String,
    #[sqlx(rename = "author_email")]
    pub email: String,
}

/// DTO for a post created alongside its author.
#[derive(Debug, Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub content: Option<String>,
    #[serde(default)]
    pub published: bool,
}
