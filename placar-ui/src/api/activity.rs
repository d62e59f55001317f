//! Activity statistics endpoint

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use placar_common::activity::ActivityCount;

use super::{require_snapshot, ApiError};
use crate::AppState;

/// Activity response
#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    pub updated_at: DateTime<Utc>,
    pub counts: Vec<ActivityCount>,
}

/// GET /api/activity
pub async fn get_activity(
    State(state): State<AppState>,
) -> Result<Json<ActivityResponse>, ApiError> {
    let snapshot = require_snapshot(&state).await?;

    Ok(Json(ActivityResponse {
        updated_at: snapshot.fetched_at,
        counts: snapshot.activity.clone(),
    }))
}
