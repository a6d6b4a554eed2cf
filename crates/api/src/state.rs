use std::sync::Arc;

use mineguard_events::AlertBus;

use crate::config::ServerConfig;
use crate::ws::AlertHub;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: mineguard_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Dashboard observer registry and fan-out hub.
    pub hub: Arc<AlertHub>,
    /// Bus carrying freshly persisted alerts to the broadcast relay.
    pub alert_bus: Arc<AlertBus>,
}
