//! Attendance recording endpoint.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde::Serialize;

use asistencia_core::RecordAttendanceRequest;
use asistencia_store::ops;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/asistencias", post(record_attendance))
}

/// Body for successful recordings.
#[derive(Serialize)]
pub struct RecordResponse {
    pub success: bool,
    pub mensaje: String,
}

/// POST /asistencias - record one event's attendance for the whole roster
async fn record_attendance(
    State(state): State<AppState>,
    Json(request): Json<RecordAttendanceRequest>,
) -> Result<(StatusCode, Json<RecordResponse>), AppError> {
    let receipt = ops::record_attendance(state.store(), request).await?;

    Ok((
        StatusCode::CREATED,
        Json(RecordResponse {
            success: true,
            mensaje: format!(
                "Asistencia registrada correctamente para {} miembros",
                receipt.miembros
            ),
        }),
    ))
}
