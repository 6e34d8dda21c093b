//! In-memory log entry store.

use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use domain::models::{LogEntry, NewLogEntry};

use crate::error::StoreError;

/// In-memory store for shift task log entries.
#[derive(Debug, Default)]
pub struct MemoryLogEntryStore {
    records: RwLock<HashMap<Uuid, LogEntry>>,
}

impl MemoryLogEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persists a new log entry, assigning its id and defaulting the
    /// timestamp to now.
    pub async fn create(&self, new: NewLogEntry) -> Result<LogEntry, StoreError> {
        let entry = LogEntry {
            id: Uuid::new_v4(),
            shift_id: new.shift_id,
            user_id: new.user_id,
            task_description: new.task_description,
            remarks: new.remarks,
            timestamp: new.timestamp.unwrap_or_else(Utc::now),
            priority: new.priority,
            status: new.status,
            department: new.department,
            area: new.area,
        };

        let mut records = self.records.write().await;
        records.insert(entry.id, entry.clone());
        Ok(entry)
    }

    /// Lists log entries, optionally scoped to a shift, newest first.
    pub async fn list(&self, shift_id: Option<&str>) -> Result<Vec<LogEntry>, StoreError> {
        let records = self.records.read().await;
        let mut matches: Vec<LogEntry> = records
            .values()
            .filter(|e| shift_id.map_or(true, |s| e.shift_id == s))
            .cloned()
            .collect();

        matches.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(matches)
    }
}
