//! Domain models for ShiftLog.

pub mod alert;
pub mod handover;
pub mod log_entry;
pub mod machine;
pub mod shift;

pub use alert::{Alert, AlertSeverity, CreateAlertRequest, ListAlertsQuery};
pub use handover::{
    Actor, CreateHandoverRequest, Handover, HandoverFilter, HandoverPatch, HandoverStatus,
    ListHandoversQuery, NewHandover, TransitionAction, TransitionHandoverRequest,
};
pub use log_entry::{
    CreateLogEntryRequest, ListLogEntriesQuery, LogEntry, LogPriority, LogStatus, NewLogEntry,
};
pub use machine::{Machine, UpdateMachineRequest};
pub use shift::{Shift, ShiftStatus};
