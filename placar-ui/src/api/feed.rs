//! Media feed endpoint

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{require_snapshot, ApiError};
use crate::AppState;

/// Feed response
#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub updated_at: DateTime<Utc>,
    pub urls: Vec<String>,
}

/// GET /api/feed
pub async fn get_feed(State(state): State<AppState>) -> Result<Json<FeedResponse>, ApiError> {
    let snapshot = require_snapshot(&state).await?;

    Ok(Json(FeedResponse {
        updated_at: snapshot.fetched_at,
        urls: snapshot.feed.clone(),
    }))
}
