//! In-memory machine store.

use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use domain::models::{Machine, UpdateMachineRequest};

use crate::error::StoreError;

/// In-memory store for machine status records.
///
/// Machines are provisioned out of band; this store only lists and patches
/// them.
#[derive(Debug, Default)]
pub struct MemoryMachineStore {
    records: RwLock<HashMap<Uuid, Machine>>,
}

impl MemoryMachineStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a machine. Used by provisioning glue and tests.
    pub async fn insert(&self, machine: Machine) -> Machine {
        let mut records = self.records.write().await;
        records.insert(machine.id, machine.clone());
        machine
    }

    /// Lists machines ordered by name for stable output.
    pub async fn list(&self) -> Result<Vec<Machine>, StoreError> {
        let records = self.records.read().await;
        let mut machines: Vec<Machine> = records.values().cloned().collect();
        machines.sort_by(|a, b| a.machine_name.cmp(&b.machine_name));
        Ok(machines)
    }

    /// Merges a partial update onto a machine record.
    pub async fn update(
        &self,
        id: Uuid,
        updates: UpdateMachineRequest,
    ) -> Result<Machine, StoreError> {
        let mut records = self.records.write().await;
        let machine = records.get_mut(&id).ok_or(StoreError::NotFound)?;

        if let Some(status) = updates.status {
            machine.status = status;
        }
        if let Some(uptime) = updates.uptime {
            machine.uptime = uptime;
        }
        if let Some(last_maintenance) = updates.last_maintenance {
            machine.last_maintenance = Some(last_maintenance);
        }
        if let Some(department) = updates.department {
            machine.department = Some(department);
        }
        if let Some(area) = updates.area {
            machine.area = Some(area);
        }

        Ok(machine.clone())
    }
}
