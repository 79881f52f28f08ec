//! Attendance history endpoint.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;

use asistencia_core::{DEFAULT_HISTORY_LIMIT, EventSummary};
use asistencia_store::ops;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/historial", get(history))
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryParams {
    limit: Option<i64>,
}

impl HistoryParams {
    /// Effective limit: the default when absent or non-positive.
    fn effective_limit(&self) -> usize {
        match self.limit {
            Some(n) if n > 0 => n as usize,
            _ => DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// GET /historial?limit=N - per-event summaries, most recent first
async fn history(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<Vec<EventSummary>>, AppError> {
    let historial = ops::history(state.store(), params.effective_limit()).await?;
    Ok(Json(historial))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_to_twenty() {
        assert_eq!(HistoryParams::default().effective_limit(), 20);
        assert_eq!(HistoryParams { limit: Some(0) }.effective_limit(), 20);
        assert_eq!(HistoryParams { limit: Some(-3) }.effective_limit(), 20);
        assert_eq!(HistoryParams { limit: Some(5) }.effective_limit(), 5);
    }
}
