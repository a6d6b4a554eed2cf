//! Repository for the `readings` table (append-only).

use mineguard_core::reading::NewReading;
use mineguard_core::types::DbId;
use sqlx::PgPool;

use crate::models::ReadingRecord;

/// Column list for `readings` SELECT queries (includes `id` and `created_at`).
const COLUMNS: &str = "\
    id, user_id, device_id, mq7, pulse, body_temp, \
    ax, ay, az, gx, gy, gz, created_at";

/// Column list for `readings` INSERT statements (excludes auto-generated `id` and `created_at`).
const INSERT_COLUMNS: &str = "\
    user_id, device_id, mq7, pulse, body_temp, ax, ay, az, gx, gy, gz";

/// Provides query operations for telemetry readings.
pub struct ReadingRepo;

impl ReadingRepo {
    /// Insert a validated reading and return the stored row with its
    /// assigned identity and timestamp.
    pub async fn insert(pool: &PgPool, reading: &NewReading) -> Result<ReadingRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO readings ({INSERT_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ReadingRecord>(&query)
            .bind(reading.user_id)
            .bind(reading.device_id)
            .bind(reading.mq7)
            .bind(reading.pulse)
            .bind(reading.body_temp)
            .bind(reading.ax)
            .bind(reading.ay)
            .bind(reading.az)
            .bind(reading.gx)
            .bind(reading.gy)
            .bind(reading.gz)
            .fetch_one(pool)
            .await
    }

    /// Get a single reading by id.
    pub async fn get_by_id(pool: &PgPool, id: DbId) -> Result<Option<ReadingRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM readings WHERE id = $1");
        sqlx::query_as::<_, ReadingRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
