//! Handover store: the contract and the in-memory engine.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use domain::models::{Handover, HandoverFilter, HandoverPatch, HandoverStatus, NewHandover};

use crate::error::StoreError;

/// Storage contract for handover records.
///
/// The store is deliberately dumb: it does not enforce the state machine
/// beyond the compare-and-set in [`apply_patch`](HandoverStore::apply_patch).
/// Policy decisions belong to the service layer, which keeps the two
/// independently testable. Any persistent engine implementing this trait can
/// replace the in-memory one.
#[async_trait]
pub trait HandoverStore: Send + Sync {
    /// Persists a new handover, assigning its id, creation time and the
    /// initial `Pending` status.
    async fn create(&self, new: NewHandover) -> Result<Handover, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Handover>, StoreError>;

    /// Lists handovers matching `filter`, newest first by creation time.
    /// The ordering is a contract, not incidental.
    async fn list(&self, filter: &HandoverFilter) -> Result<Vec<Handover>, StoreError>;

    /// Applies `patch` only if the stored status still equals `expected`.
    ///
    /// Returns `Conflict` when the status changed between the caller's read
    /// and this write, so at most one of two racing transitions can win.
    async fn apply_patch(
        &self,
        id: Uuid,
        expected: HandoverStatus,
        patch: HandoverPatch,
    ) -> Result<Handover, StoreError>;
}

/// In-memory handover store guarded by an async read-write lock.
#[derive(Debug, Default)]
pub struct MemoryHandoverStore {
    records: RwLock<HashMap<Uuid, Handover>>,
}

impl MemoryHandoverStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HandoverStore for MemoryHandoverStore {
    async fn create(&self, new: NewHandover) -> Result<Handover, StoreError> {
        let handover = Handover {
            id: Uuid::new_v4(),
            shift_id: new.shift_id,
            from_user_id: new.from_user_id,
            to_user_id: new.to_user_id,
            status: HandoverStatus::Pending,
            approved_at: None,
            remarks: new.remarks,
            created_at: Utc::now(),
            department: new.department,
            area: new.area,
        };

        let mut records = self.records.write().await;
        records.insert(handover.id, handover.clone());
        Ok(handover)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Handover>, StoreError> {
        let records = self.records.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn list(&self, filter: &HandoverFilter) -> Result<Vec<Handover>, StoreError> {
        let records = self.records.read().await;
        let mut matches: Vec<Handover> = records
            .values()
            .filter(|h| filter.status.map_or(true, |s| h.status == s))
            .filter(|h| {
                filter
                    .department
                    .as_deref()
                    .map_or(true, |d| h.department.as_deref() == Some(d))
            })
            .cloned()
            .collect();

        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matches)
    }

    async fn apply_patch(
        &self,
        id: Uuid,
        expected: HandoverStatus,
        patch: HandoverPatch,
    ) -> Result<Handover, StoreError> {
        // Write lock held across the compare and the write; this is the CAS.
        let mut records = self.records.write().await;
        let record = records.get_mut(&id).ok_or(StoreError::NotFound)?;

        if record.status != expected {
            return Err(StoreError::Conflict);
        }

        record.status = patch.status;
        record.approved_at = patch.approved_at;
        Ok(record.clone())
    }
}
