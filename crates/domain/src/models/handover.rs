//! Handover domain models for the shift-end approval workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Status of a shift handover.
///
/// `Approved` and `Rejected` are terminal; only `Pending` records accept
/// transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandoverStatus {
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for HandoverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandoverStatus::Pending => write!(f, "pending"),
            HandoverStatus::Approved => write!(f, "approved"),
            HandoverStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl HandoverStatus {
    /// Parses a status filter value as supplied in query strings.
    pub fn parse_filter(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(HandoverStatus::Pending),
            "approved" => Some(HandoverStatus::Approved),
            "rejected" => Some(HandoverStatus::Rejected),
            _ => None,
        }
    }
}

/// A shift-end handover record submitted by the outgoing operator.
///
/// `shift_id` and the user ids are opaque references into the shift-planning
/// and identity systems; this service never dereferences them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Handover {
    pub id: Uuid,
    pub shift_id: String,
    pub from_user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_user_id: Option<String>,
    pub status: HandoverStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
}

/// Data accepted by the store when creating a handover.
///
/// The store assigns `id`, `created_at` and the initial `Pending` status.
#[derive(Debug, Clone)]
pub struct NewHandover {
    pub shift_id: String,
    pub from_user_id: String,
    pub to_user_id: Option<String>,
    pub remarks: Option<String>,
    pub department: Option<String>,
    pub area: Option<String>,
}

/// Field updates produced by an allowed transition decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandoverPatch {
    pub status: HandoverStatus,
    pub approved_at: Option<DateTime<Utc>>,
}

/// The user and role performing a requested transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub user_id: String,
    pub role: String,
}

/// Requested transition action on a pending handover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionAction {
    Approve,
    Reject,
}

impl std::fmt::Display for TransitionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitionAction::Approve => write!(f, "approve"),
            TransitionAction::Reject => write!(f, "reject"),
        }
    }
}

/// Request to create a handover.
///
/// Required string fields default to empty so that a missing field reports a
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateHandoverRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "shift_id is required"))]
    pub shift_id: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "from_user_id is required"))]
    pub from_user_id: String,
    #[serde(default)]
    pub to_user_id: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
}

/// Request to approve or reject a handover.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct TransitionHandoverRequest {
    pub action: TransitionAction,
    #[serde(default)]
    #[validate(length(min = 1, message = "actor_user_id is required"))]
    pub actor_user_id: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "actor_role is required"))]
    pub actor_role: String,
    /// Free-form note from the reviewer. Logged, never written to the record;
    /// handover remarks are immutable after creation.
    #[serde(default)]
    pub note: Option<String>,
}

/// Query parameters for listing handovers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ListHandoversQuery {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

/// Store-level filter for listing handovers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HandoverFilter {
    pub status: Option<HandoverStatus>,
    pub department: Option<String>,
}
