//! Persisted alert rows and their create DTO.

use mineguard_core::alert::{AlertKind, AlertSeverity};
use mineguard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A stored alert, traceable to the reading that triggered it.
///
/// `severity` holds the persisted `low|medium|high` scale. `created_at`
/// serializes as `"timestamp"` per the collaborator contract.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AlertRecord {
    pub id: DbId,
    pub alert_type: String,
    pub severity: String,
    pub message: String,
    pub reading_id: DbId,
    pub user_id: DbId,
    #[serde(rename = "timestamp")]
    pub created_at: Timestamp,
}

/// DTO for inserting a new alert row.
#[derive(Debug, Clone)]
pub struct CreateAlert {
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub message: String,
    pub reading_id: DbId,
    pub user_id: DbId,
}
