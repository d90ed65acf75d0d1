//! Repository for the `posts` table.

use sqlx::PgPool;

use crate::models::post::PostWithAuthor;

/// Provides read operations for posts.
pub struct PostRepo;

impl PostRepo {
    /// List all posts, newest first, each with the author's name and
    /// email joined in.
    pub async fn list_with_author(pool: &PgPool) -> Result<Vec<PostWithAuthor>, sqlx::Error> {
        sqlx::query_as::<_, PostWithAuthor>(
            "SELECT p.id, p.title, p.content, p.published, p.author_id, p.created_at, \
                    u.name AS author_name, u.email AS author_email \
             FROM posts p \
             JOIN users u ON u.id = p.author_id \
             ORDER BY p.created_at DESC, p.id DESC",
        )
        .fetch_all(pool)
        .await
    }
}
