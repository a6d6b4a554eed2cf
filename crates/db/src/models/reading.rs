//! Persisted telemetry reading rows.

use mineguard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A stored telemetry sample with assigned identity and timestamp.
///
/// `created_at` serializes as `"timestamp"` to match the wire contract
/// collaborators already consume.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReadingRecord {
    pub id: DbId,
    pub user_id: DbId,
    pub device_id: DbId,
    pub mq7: Option<f64>,
    pub pulse: Option<i32>,
    pub body_temp: Option<f64>,
    pub ax: Option<f64>,
    pub ay: Option<f64>,
    pub az: Option<f64>,
    pub gx: Option<f64>,
    pub gy: Option<f64>,
    pub gz: Option<f64>,
    #[serde(rename = "timestamp")]
    pub created_at: Timestamp,
}
