//! HTTP API handlers for placar-ui

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub mod activity;
pub mod feed;
pub mod health;
pub mod progress;
pub mod sse;
pub mod standings;

pub use activity::get_activity;
pub use feed::get_feed;
pub use health::health_routes;
pub use progress::get_progress;
pub use sse::event_stream;
pub use standings::get_standings;

use crate::snapshot::Snapshot;
use crate::AppState;

/// Shared API errors
#[derive(Debug)]
pub enum ApiError {
    /// No snapshot has been derived yet (or the last ingestion failed
    /// before the first ever succeeded)
    NoSnapshot(Option<String>),
    /// The requested feature has no configuration backing it
    NotConfigured(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NoSnapshot(last_error) => (
                StatusCode::SERVICE_UNAVAILABLE,
                last_error.unwrap_or_else(|| "no snapshot derived yet".to_string()),
            ),
            ApiError::NotConfigured(what) => {
                (StatusCode::NOT_FOUND, format!("{} is not configured", what))
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

/// Fetch the current snapshot or answer 503 with the last cycle error
pub(crate) async fn require_snapshot(
    state: &AppState,
) -> std::result::Result<std::sync::Arc<Snapshot>, ApiError> {
    match state.shared.current_snapshot().await {
        Some(snapshot) => Ok(snapshot),
        None => Err(ApiError::NoSnapshot(state.shared.last_error().await)),
    }
}
