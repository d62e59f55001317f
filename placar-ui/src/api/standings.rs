//! Ranked standings endpoint

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use placar_common::human_number::format_points;
use placar_common::roles::RoleMap;
use placar_common::standings::Standing;

use super::{require_snapshot, ApiError};
use crate::AppState;

/// One member as served to the presentation layer
#[derive(Debug, Serialize)]
pub struct MemberView {
    pub name: String,
    pub points: f64,
    /// Points formatted in the presentation locale
    pub points_display: String,
    pub image: Option<String>,
}

/// One ranked team as served to the presentation layer
#[derive(Debug, Serialize)]
pub struct StandingView {
    pub rank: u32,
    pub name: String,
    /// Raw grouping-key value
    pub team_key: String,
    pub total: f64,
    /// Total formatted in the presentation locale
    pub total_display: String,
    pub members: Vec<MemberView>,
}

/// Standings response
#[derive(Debug, Serialize)]
pub struct StandingsResponse {
    pub updated_at: DateTime<Utc>,
    /// True when a required role was unresolved (standings are empty)
    pub degraded: bool,
    pub roles: RoleMap,
    pub standings: Vec<StandingView>,
}

/// GET /api/standings
///
/// 503 until the first successful ingestion cycle.
pub async fn get_standings(
    State(state): State<AppState>,
) -> Result<Json<StandingsResponse>, ApiError> {
    let snapshot = require_snapshot(&state).await?;

    Ok(Json(StandingsResponse {
        updated_at: snapshot.fetched_at,
        degraded: snapshot.degraded,
        roles: snapshot.roles.clone(),
        standings: snapshot.standings.iter().map(standing_view).collect(),
    }))
}

/// Format one standing for the boundary (numbers become locale strings)
fn standing_view(standing: &Standing) -> StandingView {
    StandingView {
        rank: standing.rank,
        name: standing.team.name.clone(),
        team_key: standing.team.key.clone(),
        total: standing.team.total,
        total_display: format_points(standing.team.total),
        members: standing
            .team
            .members
            .iter()
            .map(|member| MemberView {
                name: member.name.clone(),
                points: member.points,
                points_display: format_points(member.points),
                image: member.image.clone(),
            })
            .collect(),
    }
}
