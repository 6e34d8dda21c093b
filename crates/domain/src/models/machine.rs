//! Machine status records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A production machine on the floor.
///
/// Machine status is an operator-maintained label ("Running", "Maintenance",
/// "Idle", ...) updated by direct PATCH; no policy gates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Machine {
    pub id: Uuid,
    pub machine_name: String,
    pub status: String,
    /// Uptime percentage over the tracking window.
    pub uptime: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_maintenance: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
}

/// Partial update merged onto a machine record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UpdateMachineRequest {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub uptime: Option<i32>,
    #[serde(default)]
    pub last_maintenance: Option<DateTime<Utc>>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
}
