//! Ingestion cycle
//!
//! Fetches the three datasets concurrently, derives a complete snapshot
//! and swaps it into shared state. A primary-dataset failure aborts the
//! cycle and keeps the previous snapshot current; feed/activity failures
//! degrade to empty results and never propagate.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{error, info, warn};

use placar_common::config::Config;
use placar_common::events::PlacarEvent;
use placar_common::{Error, Result};

use crate::services::{SheetClient, SheetError};
use crate::snapshot::Snapshot;
use crate::state::SharedState;

/// Run one fetch-derive-swap cycle
pub async fn run_cycle(client: &SheetClient, config: &Config, state: &SharedState) -> Result<()> {
    let (ranking, feed, activity) = tokio::join!(
        client.fetch_csv(&config.ranking_url),
        fetch_optional(client, config.feed_url.as_deref()),
        fetch_optional(client, config.activity_url.as_deref()),
    );

    let ranking_csv = ranking.map_err(|e| Error::Fetch(format!("ranking sheet: {e}")))?;
    let feed_csv = degrade("feed", feed);
    let activity_csv = degrade("activity", activity);

    let snapshot = Snapshot::derive(
        &ranking_csv,
        feed_csv.as_deref(),
        activity_csv.as_deref(),
        Utc::now(),
    )?;

    if snapshot.degraded {
        warn!(
            roles = ?snapshot.roles,
            "Required roles unresolved, serving degraded (empty) standings"
        );
    }

    let event = PlacarEvent::SnapshotUpdated {
        team_count: snapshot.standings.len(),
        feed_count: snapshot.feed.len(),
        degraded: snapshot.degraded,
        fetched_at: snapshot.fetched_at,
    };
    info!(
        teams = snapshot.standings.len(),
        feed = snapshot.feed.len(),
        activity = snapshot.activity.len(),
        degraded = snapshot.degraded,
        "Snapshot updated"
    );

    state.replace_snapshot(snapshot).await;
    state.broadcast_event(event);
    Ok(())
}

/// Fetch an optional auxiliary dataset
async fn fetch_optional(
    client: &SheetClient,
    url: Option<&str>,
) -> std::result::Result<Option<String>, SheetError> {
    match url {
        Some(url) => client.fetch_csv(url).await.map(Some),
        None => Ok(None),
    }
}

/// Collapse an auxiliary fetch result to its degraded default
fn degrade(
    dataset: &str,
    result: std::result::Result<Option<String>, SheetError>,
) -> Option<String> {
    match result {
        Ok(text) => text,
        Err(e) => {
            warn!("{dataset} sheet unavailable, continuing with empty {dataset}: {e}");
            None
        }
    }
}

/// Run cycles forever: one immediately, then on the refresh interval
pub async fn run_loop(client: SheetClient, config: Config, state: Arc<SharedState>) {
    let mut interval = tokio::time::interval(Duration::from_secs(config.refresh_seconds.max(1)));
    loop {
        interval.tick().await; // first tick completes immediately
        if let Err(e) = run_cycle(&client, &config, &state).await {
            error!("Ingestion cycle failed: {e}");
            state.record_error(e.to_string()).await;
            state.broadcast_event(PlacarEvent::CycleFailed {
                error: e.to_string(),
                timestamp: Utc::now(),
            });
        }
    }
}
