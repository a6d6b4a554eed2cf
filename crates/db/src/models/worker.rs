//! Worker display data for alert broadcasts.

use serde::Serialize;
use sqlx::FromRow;

/// Display fields resolved for the broadcast payload. Full worker
/// records are a collaborator concern.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkerInfo {
    pub name: String,
    pub area: Option<String>,
}
