//! Bus-to-hub alert relay.
//!
//! [`AlertRelay`] is the only consumer between persistence and the
//! dashboards: it subscribes to the alert bus, resolves worker display
//! info, and broadcasts each alert through the hub.

use std::sync::Arc;

use mineguard_db::repositories::WorkerRepo;
use mineguard_db::DbPool;
use mineguard_events::AlertEvent;
use tokio::sync::broadcast;

use crate::ws::{AlertBroadcast, AlertHub};

/// Fans persisted alerts out to connected dashboard observers.
pub struct AlertRelay {
    pool: DbPool,
    hub: Arc<AlertHub>,
}

impl AlertRelay {
    /// Create a new relay with the given database pool and hub.
    pub fn new(pool: DbPool, hub: Arc<AlertHub>) -> Self {
        Self { pool, hub }
    }

    /// Run the relay loop.
    ///
    /// Consumes events from `receiver` until the channel closes (i.e.
    /// the [`AlertBus`](mineguard_events::AlertBus) is dropped).
    pub async fn run(self, mut receiver: broadcast::Receiver<AlertEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => self.relay(&event).await,
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Alert relay lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Alert bus closed, relay shutting down");
                    break;
                }
            }
        }
    }

    async fn relay(&self, event: &AlertEvent) {
        // Worker display data is best-effort: an unknown worker or a
        // failed lookup must not stop the broadcast.
        let info = match WorkerRepo::display_info(&self.pool, event.record.user_id).await {
            Ok(info) => info,
            Err(e) => {
                tracing::debug!(
                    user_id = event.record.user_id,
                    error = %e,
                    "Worker lookup failed, using fallback display name"
                );
                None
            }
        };

        let (worker_name, area) = match info {
            Some(worker) => (worker.name, worker.area),
            None => (format!("Worker {}", event.record.user_id), None),
        };

        let payload = AlertBroadcast {
            id: event.record.id,
            kind: event.record.alert_type.clone(),
            severity: event.engine_severity,
            worker_name,
            area,
            value: event.value,
            timestamp: event.record.created_at,
        };

        self.hub.broadcast_alert(&payload).await;
    }
}
