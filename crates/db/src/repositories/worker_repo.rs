//! Read-only lookup of worker display data for broadcasts.

use mineguard_core::types::DbId;
use sqlx::PgPool;

use crate::models::WorkerInfo;

/// Provides the worker display lookup used by the alert relay.
pub struct WorkerRepo;

impl WorkerRepo {
    /// Resolve the display name and area for a worker, if known.
    pub async fn display_info(
        pool: &PgPool,
        worker_id: DbId,
    ) -> Result<Option<WorkerInfo>, sqlx::Error> {
        sqlx::query_as::<_, WorkerInfo>("SELECT name, area FROM workers WHERE id = $1")
            .bind(worker_id)
            .fetch_optional(pool)
            .await
    }
}
