//! placar-ui library - leaderboard service module
//!
//! Fetches the published competition sheets, derives tie-aware ranked
//! standings and serves them (with the media feed and activity stats) to
//! the presentation layer.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use placar_common::config::ChallengeConfig;

pub mod api;
pub mod ingest;
pub mod services;
pub mod snapshot;
pub mod state;

pub use snapshot::Snapshot;
pub use state::SharedState;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Snapshot slot and event channel
    pub shared: Arc<SharedState>,
    /// Challenge window for progress reporting (optional configuration)
    pub challenge: Option<ChallengeConfig>,
}

impl AppState {
    /// Create new application state
    pub fn new(shared: Arc<SharedState>, challenge: Option<ChallengeConfig>) -> Self {
        Self { shared, challenge }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/api/standings", get(api::get_standings))
        .route("/api/feed", get(api::get_feed))
        .route("/api/activity", get(api::get_activity))
        .route("/api/progress", get(api::get_progress))
        .route("/api/events", get(api::event_stream))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
