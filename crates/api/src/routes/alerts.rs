//! Alert read paths for collaborator dashboards.

use axum::extract::{Path, State};
use axum::Json;
use mineguard_core::error::CoreError;
use mineguard_core::types::DbId;
use mineguard_db::models::AlertRecord;
use mineguard_db::repositories::AlertRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /alerts/{id}
pub async fn get_alert(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<AlertRecord>>> {
    let alert = AlertRepo::get_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "alert", id })?;
    Ok(Json(DataResponse { data: alert }))
}

/// GET /alerts/by-reading/{reading_id}
///
/// All alerts tied to one reading, id ascending.
pub async fn get_by_reading(
    State(state): State<AppState>,
    Path(reading_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<AlertRecord>>>> {
    let alerts = AlertRepo::get_by_reading(&state.pool, reading_id).await?;
    Ok(Json(DataResponse { data: alerts }))
}
