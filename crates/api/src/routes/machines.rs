//! Machine route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;
use uuid::Uuid;

use domain::models::UpdateMachineRequest;

use crate::app::AppState;
use crate::error::ApiError;

/// List machines.
///
/// GET /api/v1/machines
#[axum::debug_handler]
pub async fn list_machines(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let machines = state.stores.machines.list().await?;
    Ok((StatusCode::OK, Json(machines)))
}

/// Update a machine's status fields. Plain merge, no policy.
///
/// PATCH /api/v1/machines/:id
#[axum::debug_handler]
pub async fn update_machine(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMachineRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let machine = state
        .stores
        .machines
        .update(id, request)
        .await
        .map_err(|_| ApiError::NotFound("Machine not found".into()))?;

    info!(machine_id = %id, status = %machine.status, "Machine updated");
    Ok((StatusCode::OK, Json(machine)))
}
