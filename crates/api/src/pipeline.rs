//! The ingestion pipeline shared by both transports.
//!
//! Validates the payload, persists the reading, evaluates threshold
//! rules, persists any alerts, and publishes one event per alert.
//! Broadcast is not part of this path: each persisted alert is
//! published on the [`AlertBus`] and fanned out by the relay task, so a
//! slow or failing observer can never delay or fail ingestion.

use mineguard_core::reading::ReadingPayload;
use mineguard_core::rules;
use mineguard_db::models::{AlertRecord, CreateAlert, ReadingRecord};
use mineguard_db::repositories::{AlertRepo, ReadingRepo};
use mineguard_db::DbPool;
use mineguard_events::{AlertBus, AlertEvent};

use crate::error::AppError;

/// Everything one successful ingestion produced.
#[derive(Debug)]
pub struct IngestOutcome {
    pub reading: ReadingRecord,
    pub alerts: Vec<AlertRecord>,
}

/// Run one payload through the full pipeline.
///
/// Alerts are created and published in the order the rule engine
/// produced them; the relay preserves that order within one reading.
/// A persistence failure on an alert aborts the remaining candidates
/// but never rolls back the reading; readings are append-only facts.
pub async fn ingest(
    pool: &DbPool,
    bus: &AlertBus,
    payload: ReadingPayload,
) -> Result<IngestOutcome, AppError> {
    let sample = payload.validate()?;

    let reading = ReadingRepo::insert(pool, &sample).await?;

    let candidates = rules::evaluate(&sample);
    let mut alerts = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let record = AlertRepo::insert(
            pool,
            &CreateAlert {
                kind: candidate.kind,
                severity: candidate.severity.into(),
                message: candidate.message,
                reading_id: reading.id,
                user_id: reading.user_id,
            },
        )
        .await?;

        bus.publish(AlertEvent {
            record: record.clone(),
            engine_severity: candidate.severity,
            value: candidate.value,
        });

        alerts.push(record);
    }

    if !alerts.is_empty() {
        tracing::info!(
            reading_id = reading.id,
            user_id = reading.user_id,
            alerts = alerts.len(),
            "Reading breached thresholds"
        );
    }

    Ok(IngestOutcome { reading, alerts })
}
