use serde::Serialize;
use sqlx::FromRow;

/// Row counts for every table, as reported by `GET /api/db/info`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TableCounts {
    pub todos: i64,
    pub users: i64,
    pub posts: i64,
}
