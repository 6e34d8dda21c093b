//! Handover route handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;
use uuid::Uuid;

use domain::models::{
    Actor, CreateHandoverRequest, HandoverFilter, HandoverStatus, ListHandoversQuery,
    TransitionHandoverRequest,
};

use crate::app::AppState;
use crate::error::ApiError;

/// Submit a shift-end handover.
///
/// POST /api/v1/handovers
#[axum::debug_handler]
pub async fn create_handover(
    State(state): State<AppState>,
    Json(request): Json<CreateHandoverRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handover = state.handovers.submit(request).await?;
    Ok((StatusCode::CREATED, Json(handover)))
}

/// List handovers, newest first, optionally filtered by status and department.
///
/// GET /api/v1/handovers?status=pending&department=X
#[axum::debug_handler]
pub async fn list_handovers(
    State(state): State<AppState>,
    Query(query): Query<ListHandoversQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let filter = HandoverFilter {
        status: query.status.as_deref().and_then(HandoverStatus::parse_filter),
        department: query.department,
    };

    let handovers = state.handovers.list(&filter).await?;

    info!(count = handovers.len(), "Listed handovers");
    Ok((StatusCode::OK, Json(handovers)))
}

/// Get a single handover by id.
///
/// GET /api/v1/handovers/:id
#[axum::debug_handler]
pub async fn get_handover(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let handover = state.handovers.get(id).await?;
    Ok((StatusCode::OK, Json(handover)))
}

/// Approve or reject a pending handover.
///
/// PATCH /api/v1/handovers/:id
#[axum::debug_handler]
pub async fn transition_handover(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<TransitionHandoverRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validator::Validate::validate(&request)?;

    let actor = Actor {
        user_id: request.actor_user_id,
        role: request.actor_role,
    };

    let handover = state
        .handovers
        .transition(id, &actor, request.action, request.note.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(handover)))
}
