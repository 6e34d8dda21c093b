//! In-memory shift store.

use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use domain::models::Shift;

use crate::error::StoreError;

/// In-memory store for the shift schedule.
///
/// Shifts are owned by the shift-planning system; they are loaded here for
/// read access only.
#[derive(Debug, Default)]
pub struct MemoryShiftStore {
    records: RwLock<HashMap<Uuid, Shift>>,
}

impl MemoryShiftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a shift into the store. Used by schedule sync glue and tests.
    pub async fn insert(&self, shift: Shift) -> Shift {
        let mut records = self.records.write().await;
        records.insert(shift.id, shift.clone());
        shift
    }

    /// Lists shifts ordered by start time.
    pub async fn list(&self) -> Result<Vec<Shift>, StoreError> {
        let records = self.records.read().await;
        let mut shifts: Vec<Shift> = records.values().cloned().collect();
        shifts.sort_by(|a, b| a.start_time.cmp(&b.start_time));
        Ok(shifts)
    }

    /// Finds the active shift whose window contains now, if any.
    pub async fn current(&self) -> Result<Option<Shift>, StoreError> {
        let now = Utc::now();
        let records = self.records.read().await;
        Ok(records.values().find(|s| s.is_current(now)).cloned())
    }
}
