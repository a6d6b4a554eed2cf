//! Repository for the `alerts` table.

use mineguard_core::types::DbId;
use sqlx::PgPool;

use crate::models::{AlertRecord, CreateAlert};

/// Column list for `alerts` SELECT queries.
const COLUMNS: &str = "id, alert_type, severity, message, reading_id, user_id, created_at";

/// Column list for `alerts` INSERT statements (excludes auto-generated `id` and `created_at`).
const INSERT_COLUMNS: &str = "alert_type, severity, message, reading_id, user_id";

/// Provides query operations for alerts.
pub struct AlertRepo;

impl AlertRepo {
    /// Insert one alert, stamping the reading reference and denormalized
    /// worker id carried by the DTO.
    pub async fn insert(pool: &PgPool, alert: &CreateAlert) -> Result<AlertRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO alerts ({INSERT_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AlertRecord>(&query)
            .bind(alert.kind.as_str())
            .bind(alert.severity.as_str())
            .bind(&alert.message)
            .bind(alert.reading_id)
            .bind(alert.user_id)
            .fetch_one(pool)
            .await
    }

    /// Get a single alert by id.
    pub async fn get_by_id(pool: &PgPool, id: DbId) -> Result<Option<AlertRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM alerts WHERE id = $1");
        sqlx::query_as::<_, AlertRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Get all alerts tied to one reading, ordered by id ascending for
    /// determinism.
    pub async fn get_by_reading(
        pool: &PgPool,
        reading_id: DbId,
    ) -> Result<Vec<AlertRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM alerts WHERE reading_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, AlertRecord>(&query)
            .bind(reading_id)
            .fetch_all(pool)
            .await
    }
}
