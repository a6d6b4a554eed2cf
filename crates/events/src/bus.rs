//! Alert event bus backed by a `tokio::sync::broadcast` channel.

use mineguard_core::alert::EngineSeverity;
use mineguard_db::models::AlertRecord;
use tokio::sync::broadcast;

/// An alert that was just persisted, carrying everything the broadcast
/// relay needs without another read of the alerts table.
///
/// `engine_severity` is kept alongside the record because the broadcast
/// wire uses the engine scale (`warning|critical`) while the record
/// stores the persisted scale (`low|medium|high`).
#[derive(Debug, Clone)]
pub struct AlertEvent {
    pub record: AlertRecord,
    pub engine_severity: EngineSeverity,
    /// The metric value that crossed the threshold.
    pub value: f64,
}

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out bus for [`AlertEvent`]s.
///
/// Wraps a [`broadcast::Sender`] so any number of subscribers can
/// independently receive every published event. Designed to be shared
/// via `Arc<AlertBus>`.
pub struct AlertBus {
    sender: broadcast::Sender<AlertEvent>,
}

impl AlertBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full the oldest un-consumed events are dropped
    /// and slow receivers observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped;
    /// the alert itself is already persisted.
    pub fn publish(&self, event: AlertEvent) {
        // Ignore the SendError, it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<AlertEvent> {
        self.sender.subscribe()
    }
}

impl Default for AlertBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
