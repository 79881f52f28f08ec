//! Roster endpoints.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;

use asistencia_core::{Member, NewMemberRequest};
use asistencia_store::ops;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/miembros", get(list_members).post(create_member))
}

/// GET /miembros - active members, sorted by nombre
async fn list_members(State(state): State<AppState>) -> Result<Json<Vec<Member>>, AppError> {
    let miembros = ops::list_members(state.store()).await?;
    Ok(Json(miembros))
}

/// Body for successful roster additions.
#[derive(Serialize)]
pub struct CreateMemberResponse {
    pub success: bool,
    pub data: Member,
}

/// POST /miembros - add a member to the roster
async fn create_member(
    State(state): State<AppState>,
    Json(request): Json<NewMemberRequest>,
) -> Result<(StatusCode, Json<CreateMemberResponse>), AppError> {
    let member = ops::add_member(state.store(), request).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateMemberResponse {
            success: true,
            data: member,
        }),
    ))
}
