use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{routing::get, Json, Router};
use embr_core::types::Timestamp;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status: `healthy` or `unhealthy`.
    pub status: &'static str,
    /// Database reachability: `connected` or `disconnected`.
    pub database: &'static str,
    /// Failure detail, present only when unhealthy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Time the check was performed.
    pub timestamp: Timestamp,
}

/// GET /health -- reports service and database health.
///
/// Returns 200 when a trivial query succeeds, 503 when the store is
/// unreachable.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match embr_db::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                database: "connected",
                error: None,
                timestamp: chrono::Utc::now(),
            }),
        ),
        Err(err) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "unhealthy",
                database: "disconnected",
                error: Some(err.to_string()),
                timestamp: chrono::Utc::now(),
            }),
        ),
    }
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
