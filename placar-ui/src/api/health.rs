//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
    /// Whether any ingestion cycle has completed (readiness)
    pub has_snapshot: bool,
    /// Last ingestion failure, if the most recent cycle failed
    pub last_error: Option<String>,
}

/// GET /health
///
/// Always 200 while the process is alive; `has_snapshot` distinguishes
/// readiness from liveness.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "placar-ui".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        has_snapshot: state.shared.current_snapshot().await.is_some(),
        last_error: state.shared.last_error().await,
    })
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
