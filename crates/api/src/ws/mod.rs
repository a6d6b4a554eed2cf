//! WebSocket infrastructure: the dashboard observer channel, the
//! hardware ingest channel, and the connection hub they share.

mod dashboard;
pub mod hub;
mod ingest;

use axum::extract::State;
use axum::Json;

use crate::state::AppState;

pub use dashboard::dashboard_ws_handler;
pub use hub::{AlertBroadcast, AlertHub, HubStatus};
pub use ingest::ingest_ws_handler;

/// GET /ws/status -- current observer count and registered client ids.
pub async fn ws_status(State(state): State<AppState>) -> Json<HubStatus> {
    Json(state.hub.status().await)
}
