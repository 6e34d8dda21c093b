//! Task log entries recorded during a shift.
//!
//! Log entries are plain data with no transition guards; their status is a
//! label, not a state machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Priority label for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogPriority {
    Low,
    Medium,
    High,
}

impl Default for LogPriority {
    fn default() -> Self {
        LogPriority::Medium
    }
}

/// Progress label for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogStatus {
    Pending,
    InProgress,
    Completed,
}

impl Default for LogStatus {
    fn default() -> Self {
        LogStatus::Pending
    }
}

/// A task record logged by an operator during a shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LogEntry {
    pub id: Uuid,
    pub shift_id: String,
    pub user_id: String,
    pub task_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub priority: LogPriority,
    pub status: LogStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
}

/// Data accepted by the store when creating a log entry.
#[derive(Debug, Clone)]
pub struct NewLogEntry {
    pub shift_id: String,
    pub user_id: String,
    pub task_description: String,
    pub remarks: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub priority: LogPriority,
    pub status: LogStatus,
    pub department: Option<String>,
    pub area: Option<String>,
}

/// Request to create a log entry.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateLogEntryRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "shift_id is required"))]
    pub shift_id: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "user_id is required"))]
    pub user_id: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "task_description is required"))]
    pub task_description: String,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub priority: LogPriority,
    #[serde(default)]
    pub status: LogStatus,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
}

/// Query parameters for listing log entries.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ListLogEntriesQuery {
    #[serde(default)]
    pub shift_id: Option<String>,
}
