//! Live dashboard connection registry and best-effort fan-out.

use std::collections::{BTreeSet, HashMap};

use axum::extract::ws::Message;
use mineguard_core::alert::EngineSeverity;
use mineguard_core::types::{DbId, Timestamp};
use serde::Serialize;
use serde_json::json;
use tokio::sync::{mpsc, RwLock};

/// Channel sender half for pushing messages to an observer connection.
pub type ObserverSender = mpsc::UnboundedSender<Message>;

/// Metadata for a single registered observer.
pub struct ObserverConnection {
    /// Caller-supplied client id. Not guaranteed unique: two dashboards
    /// may connect with the same id and both stay registered.
    pub client_id: String,
    /// Channel sender for outbound messages to this connection.
    pub sender: ObserverSender,
    /// When this connection was established.
    pub connected_at: Timestamp,
}

/// Snapshot of the registry for operational visibility.
#[derive(Debug, Serialize)]
pub struct HubStatus {
    pub active_connections: usize,
    pub connection_ids: Vec<String>,
}

/// The structured payload broadcast for one alert, wrapped in the
/// `"alert"` envelope by [`AlertHub::broadcast_alert`].
///
/// Severity here is the engine scale (`warning|critical`). Dashboards
/// see the engine's judgement, not the persisted `low|medium|high` row
/// value.
#[derive(Debug, Clone, Serialize)]
pub struct AlertBroadcast {
    pub id: DbId,
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: EngineSeverity,
    pub worker_name: String,
    pub area: Option<String>,
    pub value: f64,
    pub timestamp: Timestamp,
}

/// Owns all live dashboard observer connections.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc`
/// and shared across the application. Connections are keyed by a
/// server-generated UUID so colliding client ids cannot evict each
/// other; the client id set only affects [`status`](AlertHub::status).
pub struct AlertHub {
    connections: RwLock<HashMap<String, ObserverConnection>>,
}

impl AlertHub {
    /// Create a new, empty hub.
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new observer and send its connection confirmation.
    ///
    /// Returns the receiver half of the message channel so the caller
    /// can forward messages to the WebSocket sink. Exactly one
    /// `connection_established` message (carrying the post-registration
    /// connection count) is queued before this returns.
    pub async fn connect(
        &self,
        conn_key: String,
        client_id: String,
    ) -> mpsc::UnboundedReceiver<Message> {
        let (tx, rx) = mpsc::unbounded_channel();
        let conn = ObserverConnection {
            client_id: client_id.clone(),
            sender: tx,
            connected_at: chrono::Utc::now(),
        };

        let count = {
            let mut conns = self.connections.write().await;
            conns.insert(conn_key.clone(), conn);
            conns.len()
        };
        tracing::info!(client_id = %client_id, total = count, "Dashboard observer connected");

        let greeting = json!({
            "type": "connection_established",
            "message": format!("Connected successfully as {client_id}"),
            "active_connections": count,
        });
        self.send_to(&conn_key, Message::Text(greeting.to_string().into()))
            .await;

        rx
    }

    /// Remove an observer. Idempotent: calling it for a key that is
    /// already gone is a no-op.
    pub async fn disconnect(&self, conn_key: &str, client_id: &str) {
        let removed = self.connections.write().await.remove(conn_key).is_some();
        if removed {
            let count = self.connections.read().await.len();
            tracing::info!(client_id = %client_id, total = count, "Dashboard observer disconnected");
        }
    }

    /// Deliver one message to one observer.
    ///
    /// A transport error is logged and swallowed; the connection will be
    /// reaped on the next broadcast pass.
    pub async fn send_to(&self, conn_key: &str, message: Message) {
        let conns = self.connections.read().await;
        if let Some(conn) = conns.get(conn_key) {
            if conn.sender.send(message).is_err() {
                tracing::error!(client_id = %conn.client_id, "Failed to send personal message");
            }
        }
    }

    /// Deliver a message to every registered observer.
    ///
    /// A failure on one connection never aborts delivery to the rest.
    /// Every connection whose send failed is removed from the registry
    /// once the pass completes. No heartbeat probing; reaping is lazy.
    pub async fn broadcast(&self, message: Message) {
        let mut dead: Vec<String> = Vec::new();
        {
            let conns = self.connections.read().await;
            for (key, conn) in conns.iter() {
                if conn.sender.send(message.clone()).is_err() {
                    tracing::error!(client_id = %conn.client_id, "Broadcast send failed");
                    dead.push(key.clone());
                }
            }
        }

        if !dead.is_empty() {
            let mut conns = self.connections.write().await;
            for key in &dead {
                conns.remove(key);
            }
            tracing::info!(count = dead.len(), "Reaped dead observer connections");
        }
    }

    /// Wrap an alert payload in the `"alert"` envelope and broadcast it.
    pub async fn broadcast_alert(&self, alert: &AlertBroadcast) {
        let message = json!({
            "type": "alert",
            "data": alert,
            "timestamp": chrono::Utc::now(),
        });
        self.broadcast(Message::Text(message.to_string().into()))
            .await;
        tracing::info!(
            kind = %alert.kind,
            severity = alert.severity.as_str(),
            "Alert broadcast sent"
        );
    }

    /// Current connection count and the set of registered client ids.
    ///
    /// Duplicate client ids coalesce in the id list while both
    /// connections keep counting toward `active_connections`.
    pub async fn status(&self) -> HubStatus {
        let conns = self.connections.read().await;
        let ids: BTreeSet<&str> = conns.values().map(|c| c.client_id.as_str()).collect();
        HubStatus {
            active_connections: conns.len(),
            connection_ids: ids.into_iter().map(String::from).collect(),
        }
    }

    /// Send a Close frame to every observer, then clear the registry.
    /// Returns the number of connections closed.
    ///
    /// Used during graceful shutdown.
    pub async fn close_all(&self) -> usize {
        let mut conns = self.connections.write().await;
        let count = conns.len();
        for conn in conns.values() {
            let _ = conn.sender.send(Message::Close(None));
        }
        conns.clear();
        tracing::info!(count, "Closed all dashboard connections");
        count
    }
}

impl Default for AlertHub {
    fn default() -> Self {
        Self::new()
    }
}
