pub mod alerts;
pub mod health;
pub mod readings;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;
use crate::ws;

/// Build the `/api/v1` route tree.
///
/// ```text
/// POST /readings                       ingest one reading (request/response entry)
/// GET  /readings/{id}                  fetch a stored reading
/// GET  /alerts/{id}                    fetch a stored alert
/// GET  /alerts/by-reading/{reading_id} all alerts tied to one reading
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/readings", post(readings::ingest_reading))
        .route("/readings/{id}", get(readings::get_reading))
        .route("/alerts/{id}", get(alerts::get_alert))
        .route(
            "/alerts/by-reading/{reading_id}",
            get(alerts::get_by_reading),
        )
}

/// Build the root-level WebSocket route tree.
///
/// ```text
/// GET /ws/alerts?client_id=...   dashboard observer channel
/// GET /ws/ingest                 hardware ingest channel
/// GET /ws/status                 registry visibility
/// ```
pub fn ws_routes() -> Router<AppState> {
    Router::new()
        .route("/ws/alerts", get(ws::dashboard_ws_handler))
        .route("/ws/ingest", get(ws::ingest_ws_handler))
        .route("/ws/status", get(ws::ws_status))
}
