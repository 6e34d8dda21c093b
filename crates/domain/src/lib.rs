//! Domain layer for the ShiftLog backend.
//!
//! This crate contains:
//! - Domain models (Handover, LogEntry, Machine, Alert, Shift)
//! - The pure handover approval policy
//! - Domain error types

pub mod models;
pub mod services;
