//! Database info endpoint, used to verify provisioning.

use axum::extract::State;
use axum::Json;
use embr_core::types::Timestamp;
use serde::Serialize;

use embr_db::models::stats::TableCounts;
use embr_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Response payload for `GET /api/db/info`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DbInfoResponse {
    /// Row counts per table.
    pub tables: TableCounts,
    /// `"(set)"` or `"(not set)"`; the URL itself is never echoed.
    pub database_url: &'static str,
    /// Time the counts were taken.
    pub timestamp: Timestamp,
}

/// GET /api/db/info
///
/// Report row counts and whether `DATABASE_URL` was configured. Store
/// failures surface as 500.
pub async fn db_info(State(state): State<AppState>) -> AppResult<Json<DbInfoResponse>> {
    let tables = StatsRepo::table_counts(&state.pool).await?;

    let database_url = if state.config.database_url_set {
        "(set)"
    } else {
        "(not set)"
    };

    Ok(Json(DbInfoResponse {
        tables,
        database_url,
        timestamp: chrono::Utc::now(),
    }))
}
