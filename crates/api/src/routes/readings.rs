//! Request/response ingestion entry and reading read path.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use mineguard_core::error::CoreError;
use mineguard_core::reading::ReadingPayload;
use mineguard_core::types::DbId;
use mineguard_db::models::{AlertRecord, ReadingRecord};
use mineguard_db::repositories::ReadingRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::pipeline;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of a successful ingestion: the stored reading plus any alerts
/// it triggered.
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub reading: ReadingRecord,
    pub alerts: Vec<AlertRecord>,
}

/// POST /readings
///
/// Ingest one reading synchronously. The acknowledgment covers
/// validation, persistence, evaluation, and alert persistence;
/// broadcast happens asynchronously and never changes the outcome.
pub async fn ingest_reading(
    State(state): State<AppState>,
    Json(payload): Json<ReadingPayload>,
) -> AppResult<(StatusCode, Json<DataResponse<IngestResponse>>)> {
    let outcome = pipeline::ingest(&state.pool, &state.alert_bus, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: IngestResponse {
                reading: outcome.reading,
                alerts: outcome.alerts,
            },
        }),
    ))
}

/// GET /readings/{id}
pub async fn get_reading(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ReadingRecord>>> {
    let reading = ReadingRepo::get_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "reading",
            id,
        })?;
    Ok(Json(DataResponse { data: reading }))
}
