//! Integration tests for the reading and alert stores.
//!
//! These run against a real PostgreSQL instance via `#[sqlx::test]`,
//! which provisions an isolated database per test and applies this
//! crate's migrations.

use mineguard_core::alert::{AlertKind, AlertSeverity};
use mineguard_core::reading::ReadingPayload;
use mineguard_db::models::CreateAlert;
use mineguard_db::repositories::{AlertRepo, ReadingRepo, WorkerRepo};
use sqlx::PgPool;

fn sample_reading(pulse: i32) -> mineguard_core::reading::NewReading {
    ReadingPayload {
        user_id: Some(1),
        device_id: Some(1),
        pulse: Some(pulse),
        ..Default::default()
    }
    .validate()
    .expect("sample reading should validate")
}

#[sqlx::test]
async fn insert_reading_assigns_identity_and_timestamp(pool: PgPool) {
    let stored = ReadingRepo::insert(&pool, &sample_reading(72)).await.unwrap();

    assert!(stored.id > 0);
    assert_eq!(stored.user_id, 1);
    assert_eq!(stored.pulse, Some(72));
    // Absent fields stay absent, not zero.
    assert!(stored.mq7.is_none());
    assert!(stored.body_temp.is_none());

    let fetched = ReadingRepo::get_by_id(&pool, stored.id).await.unwrap();
    assert_eq!(fetched.unwrap().id, stored.id);
}

#[sqlx::test]
async fn get_reading_by_unknown_id_is_none(pool: PgPool) {
    let fetched = ReadingRepo::get_by_id(&pool, 999_999).await.unwrap();
    assert!(fetched.is_none());
}

#[sqlx::test]
async fn alerts_round_trip_through_get_by_reading(pool: PgPool) {
    let reading = ReadingRepo::insert(&pool, &sample_reading(148)).await.unwrap();

    let first = AlertRepo::insert(
        &pool,
        &CreateAlert {
            kind: AlertKind::HeartRateHigh,
            severity: AlertSeverity::High,
            message: "Heart rate 148 bpm above critical threshold 140 bpm".into(),
            reading_id: reading.id,
            user_id: reading.user_id,
        },
    )
    .await
    .unwrap();

    let second = AlertRepo::insert(
        &pool,
        &CreateAlert {
            kind: AlertKind::ToxicGas,
            severity: AlertSeverity::Medium,
            message: "Gas concentration 60.0 ppm above warning threshold 50 ppm".into(),
            reading_id: reading.id,
            user_id: reading.user_id,
        },
    )
    .await
    .unwrap();

    let alerts = AlertRepo::get_by_reading(&pool, reading.id).await.unwrap();
    assert_eq!(alerts.len(), 2);
    // Ordered by id ascending.
    assert_eq!(alerts[0].id, first.id);
    assert_eq!(alerts[1].id, second.id);
    assert_eq!(alerts[0].alert_type, "heart_rate_high");
    assert_eq!(alerts[0].severity, "high");
    assert_eq!(alerts[0].reading_id, reading.id);
    assert_eq!(alerts[0].user_id, reading.user_id);
}

#[sqlx::test]
async fn get_by_reading_with_no_alerts_is_empty(pool: PgPool) {
    let reading = ReadingRepo::insert(&pool, &sample_reading(72)).await.unwrap();
    let alerts = AlertRepo::get_by_reading(&pool, reading.id).await.unwrap();
    assert!(alerts.is_empty());
}

#[sqlx::test]
async fn worker_display_info_lookup(pool: PgPool) {
    sqlx::query("INSERT INTO workers (id, name, area) VALUES (1, 'Juan Pérez', 'Túnel Norte')")
        .execute(&pool)
        .await
        .unwrap();

    let info = WorkerRepo::display_info(&pool, 1).await.unwrap().unwrap();
    assert_eq!(info.name, "Juan Pérez");
    assert_eq!(info.area.as_deref(), Some("Túnel Norte"));

    let missing = WorkerRepo::display_info(&pool, 42).await.unwrap();
    assert!(missing.is_none());
}
