//! In-memory alert store.

use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use domain::models::{Alert, AlertSeverity};

use crate::error::StoreError;

/// In-memory store for floor alerts.
#[derive(Debug, Default)]
pub struct MemoryAlertStore {
    records: RwLock<HashMap<Uuid, Alert>>,
}

impl MemoryAlertStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises a new alert, unresolved and stamped now.
    pub async fn create(&self, message: String, severity: AlertSeverity) -> Alert {
        let alert = Alert {
            id: Uuid::new_v4(),
            message,
            severity,
            timestamp: Utc::now(),
            resolved: false,
        };

        let mut records = self.records.write().await;
        records.insert(alert.id, alert.clone());
        alert
    }

    /// Lists alerts newest first; `active_only` drops resolved ones.
    pub async fn list(&self, active_only: bool) -> Result<Vec<Alert>, StoreError> {
        let records = self.records.read().await;
        let mut alerts: Vec<Alert> = records
            .values()
            .filter(|a| !active_only || !a.resolved)
            .cloned()
            .collect();

        alerts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(alerts)
    }

    /// Marks an alert resolved. The flag is one-way; resolving twice is a
    /// no-op, not an error.
    pub async fn resolve(&self, id: Uuid) -> Result<Alert, StoreError> {
        let mut records = self.records.write().await;
        let alert = records.get_mut(&id).ok_or(StoreError::NotFound)?;
        alert.resolved = true;
        Ok(alert.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    #[tokio::test]
    async fn test_resolve_is_one_way_and_idempotent() {
        let store = MemoryAlertStore::new();
        let alert = store
            .create("Temperature variance".to_string(), AlertSeverity::Warning)
            .await;
        assert!(!alert.resolved);

        let resolved = assert_ok!(store.resolve(alert.id).await);
        assert!(resolved.resolved);

        let again = assert_ok!(store.resolve(alert.id).await);
        assert!(again.resolved);
    }

    #[tokio::test]
    async fn test_resolve_unknown_alert() {
        let store = MemoryAlertStore::new();
        assert_eq!(store.resolve(Uuid::new_v4()).await, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_active_filter_drops_resolved() {
        let store = MemoryAlertStore::new();
        let open = store
            .create("Handover pending approval".to_string(), AlertSeverity::Info)
            .await;
        let closed = store
            .create("Safety inspection due".to_string(), AlertSeverity::Info)
            .await;
        store.resolve(closed.id).await.unwrap();

        let active = store.list(true).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, open.id);

        let all = store.list(false).await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
