//! Challenge progress endpoint

use axum::{extract::State, Json};
use chrono::Utc;

use placar_common::progress::{challenge_progress, ChallengeProgress};

use super::ApiError;
use crate::AppState;

/// GET /api/progress
///
/// Computed at request time from the configured challenge window; 404
/// when no window is configured.
pub async fn get_progress(
    State(state): State<AppState>,
) -> Result<Json<ChallengeProgress>, ApiError> {
    let challenge = state
        .challenge
        .as_ref()
        .ok_or(ApiError::NotConfigured("challenge window"))?;

    Ok(Json(challenge_progress(
        challenge.start,
        challenge.end,
        Utc::now(),
    )))
}
