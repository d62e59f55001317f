//! Event types for the placar service
//!
//! Broadcast on the shared state's channel and serialized for SSE
//! transmission.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot lifecycle events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlacarEvent {
    /// A freshly derived snapshot replaced the current one
    SnapshotUpdated {
        /// Teams in the new standings
        team_count: usize,
        /// Media URLs in the new feed
        feed_count: usize,
        /// True when a required role was unresolved (empty standings)
        degraded: bool,
        /// When the cycle fetched its payloads
        fetched_at: DateTime<Utc>,
    },

    /// An ingestion cycle failed; the previous snapshot (if any) stays
    /// current
    CycleFailed {
        /// Human-readable failure description
        error: String,
        /// When the cycle failed
        timestamp: DateTime<Utc>,
    },
}

impl PlacarEvent {
    /// Event type name for the SSE `event:` field
    pub fn event_type(&self) -> &'static str {
        match self {
            PlacarEvent::SnapshotUpdated { .. } => "SnapshotUpdated",
            PlacarEvent::CycleFailed { .. } => "CycleFailed",
        }
    }
}
