//! Dashboard observer WebSocket endpoint.
//!
//! Observers connect with a caller-supplied `client_id`, receive one
//! confirmation message, then receive every broadcast alert. The only
//! inbound message the server interprets is the literal text `"ping"`,
//! answered with a `pong` envelope; all other inbound traffic is
//! ignored.

use std::time::Duration;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use serde_json::json;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// Opaque observer identifier; not guaranteed unique across
    /// connections.
    pub client_id: Option<String>,
}

/// HTTP handler that upgrades the connection to a dashboard WebSocket.
pub async fn dashboard_ws_handler(
    ws: WebSocketUpgrade,
    Query(query): Query<DashboardQuery>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let client_id = query.client_id.unwrap_or_else(|| "unknown".to_string());
    ws.on_upgrade(move |socket| handle_dashboard_socket(socket, state, client_id))
}

/// Manage a single observer connection after upgrade.
///
/// Registers with the hub (which queues the confirmation message),
/// spawns a sender task that forwards hub messages to the sink, then
/// processes inbound messages until disconnect.
async fn handle_dashboard_socket(socket: WebSocket, state: AppState, client_id: String) {
    let conn_key = uuid::Uuid::new_v4().to_string();

    let mut rx = state.hub.connect(conn_key.clone(), client_id.clone()).await;

    let (mut sink, mut stream) = socket.split();

    // Sender task: forward hub messages to the WebSocket sink. A send
    // that errors or exceeds the configured timeout ends the task; the
    // hub reaps the connection on its next broadcast pass.
    let send_timeout = Duration::from_secs(state.config.ws_send_timeout_secs);
    let sender_key = conn_key.clone();
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match tokio::time::timeout(send_timeout, sink.send(msg)).await {
                Ok(Ok(())) => {}
                Ok(Err(_)) => {
                    tracing::debug!(conn_key = %sender_key, "Dashboard sink closed");
                    break;
                }
                Err(_) => {
                    tracing::warn!(conn_key = %sender_key, "Dashboard send timed out");
                    break;
                }
            }
        }
    });

    // Receiver loop: answer pings, ignore everything else.
    while let Some(result) = stream.next().await {
        match result {
            Ok(Message::Text(text)) => {
                handle_client_text(&state.hub, &conn_key, text.as_str()).await;
            }
            Ok(Message::Close(_)) => break,
            Ok(_) => {} // the hub interprets no other inbound message
            Err(e) => {
                tracing::debug!(client_id = %client_id, error = %e, "Dashboard receive error");
                break;
            }
        }
    }

    state.hub.disconnect(&conn_key, &client_id).await;
    send_task.abort();
}

/// Interpret one inbound text message from an observer.
///
/// The literal `"ping"` is answered with a `pong` envelope on the
/// observer's own channel; every other text is ignored.
async fn handle_client_text(hub: &crate::ws::AlertHub, conn_key: &str, text: &str) {
    if text == "ping" {
        let pong = json!({
            "type": "pong",
            "timestamp": chrono::Utc::now(),
        });
        hub.send_to(conn_key, Message::Text(pong.to_string().into()))
            .await;
    }
}
