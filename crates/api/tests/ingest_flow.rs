//! End-to-end tests for the ingestion pipeline.
//!
//! These run against a real PostgreSQL instance via `#[sqlx::test]`,
//! exercising the full path: validation, reading persistence, rule
//! evaluation, alert persistence, and event publication.

use assert_matches::assert_matches;
use mineguard_api::error::AppError;
use mineguard_api::pipeline;
use mineguard_core::error::CoreError;
use mineguard_core::reading::ReadingPayload;
use mineguard_db::repositories::AlertRepo;
use mineguard_events::AlertBus;
use sqlx::PgPool;

fn payload(pulse: Option<i32>, body_temp: Option<f64>, mq7: Option<f64>) -> ReadingPayload {
    ReadingPayload {
        user_id: Some(1),
        device_id: Some(1),
        pulse,
        body_temp,
        mq7,
        ..Default::default()
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn normal_reading_produces_no_alerts(pool: PgPool) {
    let bus = AlertBus::default();

    let outcome = pipeline::ingest(&pool, &bus, payload(Some(72), Some(36.8), Some(10.0)))
        .await
        .unwrap();

    assert!(outcome.reading.id > 0);
    assert!(outcome.alerts.is_empty());

    let stored = AlertRepo::get_by_reading(&pool, outcome.reading.id)
        .await
        .unwrap();
    assert!(stored.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn critical_pulse_persists_one_alert(pool: PgPool) {
    let bus = AlertBus::default();
    let mut events = bus.subscribe();

    let outcome = pipeline::ingest(&pool, &bus, payload(Some(148), None, None))
        .await
        .unwrap();

    assert_eq!(outcome.alerts.len(), 1);
    let alert = &outcome.alerts[0];
    assert_eq!(alert.alert_type, "heart_rate_high");
    // Persisted severity uses the low|medium|high scale.
    assert_eq!(alert.severity, "high");
    assert_eq!(alert.reading_id, outcome.reading.id);
    assert_eq!(alert.user_id, 1);

    // Retrievable through the read path.
    let stored = AlertRepo::get_by_reading(&pool, outcome.reading.id)
        .await
        .unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, alert.id);

    // The event carries the engine scale and the breaching value.
    let event = events.recv().await.unwrap();
    assert_eq!(event.record.id, alert.id);
    assert_eq!(event.engine_severity.as_str(), "critical");
    assert_eq!(event.value, 148.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn multi_breach_reading_yields_independent_alerts(pool: PgPool) {
    let bus = AlertBus::default();
    let mut events = bus.subscribe();

    // Warning temperature, critical pulse, warning gas.
    let outcome = pipeline::ingest(&pool, &bus, payload(Some(145), Some(38.9), Some(75.0)))
        .await
        .unwrap();

    assert_eq!(outcome.alerts.len(), 3);
    let kinds: Vec<&str> = outcome
        .alerts
        .iter()
        .map(|a| a.alert_type.as_str())
        .collect();
    // Fixed evaluation order: temperature, pulse, gas.
    assert_eq!(
        kinds,
        vec!["high_body_temperature", "heart_rate_high", "toxic_gas"]
    );

    let severities: Vec<&str> = outcome
        .alerts
        .iter()
        .map(|a| a.severity.as_str())
        .collect();
    assert_eq!(severities, vec!["medium", "high", "medium"]);

    // Read path returns them in insertion order.
    let stored = AlertRepo::get_by_reading(&pool, outcome.reading.id)
        .await
        .unwrap();
    let stored_ids: Vec<i64> = stored.iter().map(|a| a.id).collect();
    let outcome_ids: Vec<i64> = outcome.alerts.iter().map(|a| a.id).collect();
    assert_eq!(stored_ids, outcome_ids);

    // One event per alert, in the same order.
    for alert in &outcome.alerts {
        let event = events.recv().await.unwrap();
        assert_eq!(event.record.id, alert.id);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn repeated_breaches_are_not_deduplicated(pool: PgPool) {
    let bus = AlertBus::default();

    let first = pipeline::ingest(&pool, &bus, payload(Some(148), None, None))
        .await
        .unwrap();
    let second = pipeline::ingest(&pool, &bus, payload(Some(148), None, None))
        .await
        .unwrap();

    assert_eq!(first.alerts.len(), 1);
    assert_eq!(second.alerts.len(), 1);
    assert_ne!(first.alerts[0].id, second.alerts[0].id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_payload_persists_nothing(pool: PgPool) {
    let bus = AlertBus::default();

    // Missing user_id fails validation before any write.
    let missing_id = ReadingPayload {
        device_id: Some(1),
        pulse: Some(72),
        ..Default::default()
    };
    let err = pipeline::ingest(&pool, &bus, missing_id).await.unwrap_err();
    assert_matches!(err, AppError::Core(CoreError::Validation(_)));
    assert!(err.is_client_error());

    // Out-of-range pulse fails the same way.
    let out_of_range = payload(Some(500), None, None);
    let err = pipeline::ingest(&pool, &bus, out_of_range).await.unwrap_err();
    assert_matches!(err, AppError::Core(CoreError::Validation(_)));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM readings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
