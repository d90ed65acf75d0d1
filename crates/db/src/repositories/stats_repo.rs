//! Row-count statistics across all tables.

use sqlx::PgPool;

use crate::models::stats::TableCounts;

/// Provides aggregate queries over the whole store.
pub struct StatsRepo;

impl StatsRepo {
    /// Count the rows in every table in one round trip.
    pub async fn table_counts(pool: &PgPool) -> Result<TableCounts, sqlx::Error> {
        sqlx::query_as::<_, TableCounts>(
            "SELECT \
                (SELECT COUNT(*) FROM todos) AS todos, \
                (SELECT COUNT(*) FROM users) AS users, \
                (SELECT COUNT(*) FROM posts) AS posts",
        )
        .fetch_one(pool)
        .await
    }
}
