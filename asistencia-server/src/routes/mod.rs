pub mod asistencias;
pub mod historial;
pub mod miembros;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use asistencia_core::Error;

/// Standard API error body.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body for duplicate-event rejections; `success: false` lets the client
/// tell a conflict apart from a plain validation failure.
#[derive(Serialize)]
pub struct ConflictResponse {
    pub success: bool,
    pub mensaje: String,
}

/// Convert core errors to HTTP responses.
pub struct AppError(Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let err = self.0;
        tracing::error!("{err}");

        match err {
            Error::Validation(mensaje) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse { error: mensaje }),
            )
                .into_response(),
            Error::Conflict(mensaje) => (
                StatusCode::BAD_REQUEST,
                Json(ConflictResponse {
                    success: false,
                    mensaje,
                }),
            )
                .into_response(),
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: other.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        AppError(err)
    }
}
