//! Shared service state
//!
//! The snapshot slot is the only cross-task shared resource: the
//! ingestion loop replaces it wholesale under a write lock and API
//! readers clone an `Arc`, so a reader observes either the previous
//! complete snapshot or the next one, never a partial derivation.

use std::sync::Arc;

use tokio::sync::{broadcast, RwLock};

use placar_common::events::PlacarEvent;

use crate::snapshot::Snapshot;

/// Shared state accessible by the ingestion loop and all handlers
pub struct SharedState {
    /// Current snapshot (None until the first successful cycle)
    snapshot: RwLock<Option<Arc<Snapshot>>>,
    /// Last cycle failure, surfaced in the health payload
    last_error: RwLock<Option<String>>,
    /// Event broadcaster for SSE events
    event_tx: broadcast::Sender<PlacarEvent>,
}

impl SharedState {
    /// Create new shared state with an empty snapshot slot
    pub fn new() -> Self {
        let (event_tx, _) = broadcast::channel(64);
        Self {
            snapshot: RwLock::new(None),
            last_error: RwLock::new(None),
            event_tx,
        }
    }

    /// Replace the current snapshot wholesale and clear the last error
    pub async fn replace_snapshot(&self, snapshot: Snapshot) {
        *self.snapshot.write().await = Some(Arc::new(snapshot));
        *self.last_error.write().await = None;
    }

    /// Current snapshot, if any cycle has completed
    pub async fn current_snapshot(&self) -> Option<Arc<Snapshot>> {
        self.snapshot.read().await.clone()
    }

    /// Record an ingestion failure (the snapshot slot is untouched)
    pub async fn record_error(&self, error: String) {
        *self.last_error.write().await = Some(error);
    }

    /// Last ingestion failure, if the most recent cycle failed
    pub async fn last_error(&self) -> Option<String> {
        self.last_error.read().await.clone()
    }

    /// Broadcast an event to all SSE listeners
    pub fn broadcast_event(&self, event: PlacarEvent) {
        // No receivers is fine
        let _ = self.event_tx.send(event);
    }

    /// Subscribe to the event stream for SSE
    pub fn subscribe_events(&self) -> broadcast::Receiver<PlacarEvent> {
        self.event_tx.subscribe()
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}
