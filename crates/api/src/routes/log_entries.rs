//! Log entry route handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;

use domain::models::{CreateLogEntryRequest, ListLogEntriesQuery, NewLogEntry};

use crate::app::AppState;
use crate::error::ApiError;

/// Record a task log entry.
///
/// POST /api/v1/log-entries
#[axum::debug_handler]
pub async fn create_log_entry(
    State(state): State<AppState>,
    Json(request): Json<CreateLogEntryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validator::Validate::validate(&request)?;

    let entry = state
        .stores
        .log_entries
        .create(NewLogEntry {
            shift_id: request.shift_id,
            user_id: request.user_id,
            task_description: request.task_description,
            remarks: request.remarks,
            timestamp: request.timestamp,
            priority: request.priority,
            status: request.status,
            department: request.department,
            area: request.area,
        })
        .await?;

    info!(entry_id = %entry.id, shift_id = %entry.shift_id, "Log entry recorded");
    Ok((StatusCode::CREATED, Json(entry)))
}

/// List log entries, optionally scoped to a shift.
///
/// GET /api/v1/log-entries?shift_id=X
#[axum::debug_handler]
pub async fn list_log_entries(
    State(state): State<AppState>,
    Query(query): Query<ListLogEntriesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let entries = state
        .stores
        .log_entries
        .list(query.shift_id.as_deref())
        .await?;
    Ok((StatusCode::OK, Json(entries)))
}
