//! Alert route handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;
use uuid::Uuid;

use domain::models::{CreateAlertRequest, ListAlertsQuery};

use crate::app::AppState;
use crate::error::ApiError;

/// List alerts, newest first; `?active=true` drops resolved ones.
///
/// GET /api/v1/alerts
#[axum::debug_handler]
pub async fn list_alerts(
    State(state): State<AppState>,
    Query(query): Query<ListAlertsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let alerts = state.stores.alerts.list(query.active).await?;
    Ok((StatusCode::OK, Json(alerts)))
}

/// Raise an alert.
///
/// POST /api/v1/alerts
#[axum::debug_handler]
pub async fn create_alert(
    State(state): State<AppState>,
    Json(request): Json<CreateAlertRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validator::Validate::validate(&request)?;

    let alert = state
        .stores
        .alerts
        .create(request.message, request.severity)
        .await;

    info!(alert_id = %alert.id, severity = ?alert.severity, "Alert raised");
    Ok((StatusCode::CREATED, Json(alert)))
}

/// Resolve an alert. One-way; resolving twice is a no-op.
///
/// POST /api/v1/alerts/:id/resolve
#[axum::debug_handler]
pub async fn resolve_alert(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let alert = state
        .stores
        .alerts
        .resolve(id)
        .await
        .map_err(|_| ApiError::NotFound("Alert not found".into()))?;

    info!(alert_id = %id, "Alert resolved");
    Ok((StatusCode::OK, Json(alert)))
}
