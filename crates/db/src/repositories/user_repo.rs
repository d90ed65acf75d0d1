//! Repository for the `users` table, including the nested-posts create.

use std::collections::HashMap;

use embr_core::types::DbId;
use sqlx::PgPool;

use crate::models::post::Post;
use crate::models::user::{CreateUser, User, UserWithPosts};

/// Column list for users queries.
const COLUMNS: &str = "id, name, email, created_at";

/// Column list for posts queries.
const POST_COLUMNS: &str = "id, title, content, published, author_id, created_at";

/// Provides read and create operations for users.
pub struct UserRepo;

impl UserRepo {
    /// List all users with their posts nested, oldest user first.
    pub async fn list_with_posts(pool: &PgPool) -> Result<Vec<UserWithPosts>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY id");
        let users = sqlx::query_as::<_, User>(&query).fetch_all(pool).await?;

        let query = format!(
            "SELECT {POST_COLUMNS} FROM posts ORDER BY created_at DESC, id DESC"
        );
        let posts = sqlx::query_as::<_, Post>(&query).fetch_all(pool).await?;

        let mut by_author: HashMap<DbId, Vec<Post>> = HashMap::new();
        for post in posts {
            by_author.entry(post.author_id).or_default().push(post);
        }

        Ok(users
            .into_iter()
            .map(|user| UserWithPosts {
                posts: by_author.remove(&user.id).unwrap_or_default(),
                user,
            })
            .collect())
    }

    /// Create a user and all supplied posts in a single transaction.
    ///
    /// A duplicate email violates `uq_users_email` and rolls everything
    /// back, so no orphaned posts survive a failed create.
    pub async fn create_with_posts(
        pool: &PgPool,
        input: &CreateUser,
    ) -> Result<UserWithPosts, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_one(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO posts (title, content, published, author_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {POST_COLUMNS}"
        );
        let mut posts = Vec::with_capacity(input.posts.len());
        for post in &input.posts {
            posts.push(
                sqlx::query_as::<_, Post>(&query)
                    .bind(&post.title)
                    .bind(&post.content)
                    .bind(post.published)
                    .bind(user.id)
                    .fetch_one(&mut *tx)
                    .await?,
            );
        }

        tx.commit().await?;

        Ok(UserWithPosts { user, posts })
    }
}
