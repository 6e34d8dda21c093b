//! Shift schedule records.
//!
//! Shifts are owned by the shift-planning system; this service holds a
//! read-only view for listing and resolving the current shift.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Scheduling status of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftStatus {
    Scheduled,
    Active,
    Completed,
}

/// A scheduled work shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Shift {
    pub id: Uuid,
    pub shift_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervisor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_id: Option<String>,
    pub status: ShiftStatus,
}

impl Shift {
    /// Whether this shift is the one running at `now`.
    pub fn is_current(&self, now: DateTime<Utc>) -> bool {
        self.status == ShiftStatus::Active && self.start_time <= now && self.end_time >= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn shift(status: ShiftStatus, start_offset_hours: i64, end_offset_hours: i64) -> Shift {
        let now = Utc::now();
        Shift {
            id: Uuid::new_v4(),
            shift_name: "Morning Shift".to_string(),
            start_time: now + Duration::hours(start_offset_hours),
            end_time: now + Duration::hours(end_offset_hours),
            supervisor_id: Some("1".to_string()),
            operator_id: Some("2".to_string()),
            status,
        }
    }

    #[test]
    fn test_is_current_active_within_window() {
        assert!(shift(ShiftStatus::Active, -1, 1).is_current(Utc::now()));
    }

    #[test]
    fn test_is_current_scheduled_not_current() {
        assert!(!shift(ShiftStatus::Scheduled, -1, 1).is_current(Utc::now()));
    }

    #[test]
    fn test_is_current_outside_window() {
        assert!(!shift(ShiftStatus::Active, 1, 2).is_current(Utc::now()));
    }
}
