//! Domain business logic services.

pub mod approval;

pub use approval::{can_transition, ApprovalConfig, Decision, DenyReason};
