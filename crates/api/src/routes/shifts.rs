//! Shift route handlers.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::app::AppState;
use crate::error::ApiError;

/// List shifts ordered by start time.
///
/// GET /api/v1/shifts
#[axum::debug_handler]
pub async fn list_shifts(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let shifts = state.stores.shifts.list().await?;
    Ok((StatusCode::OK, Json(shifts)))
}

/// Get the currently running shift.
///
/// GET /api/v1/shifts/current
#[axum::debug_handler]
pub async fn current_shift(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let shift = state
        .stores
        .shifts
        .current()
        .await?
        .ok_or_else(|| ApiError::NotFound("No active shift".into()))?;
    Ok((StatusCode::OK, Json(shift)))
}
