//! Store implementations.

pub mod alerts;
pub mod handovers;
pub mod log_entries;
pub mod machines;
pub mod shifts;

pub use alerts::MemoryAlertStore;
pub use handovers::{HandoverStore, MemoryHandoverStore};
pub use log_entries::MemoryLogEntryStore;
pub use machines::MemoryMachineStore;
pub use shifts::MemoryShiftStore;

use std::sync::Arc;

/// The full set of stores backing the application.
///
/// Cheap to clone; every field is a shared handle.
#[derive(Clone, Default)]
pub struct Stores {
    pub handovers: Arc<MemoryHandoverStore>,
    pub log_entries: Arc<MemoryLogEntryStore>,
    pub machines: Arc<MemoryMachineStore>,
    pub alerts: Arc<MemoryAlertStore>,
    pub shifts: Arc<MemoryShiftStore>,
}

impl Stores {
    /// Creates a fresh, empty store set.
    pub fn new() -> Self {
        Self::default()
    }
}
