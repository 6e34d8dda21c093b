//! HTTP route handlers.

pub mod alerts;
pub mod handovers;
pub mod health;
pub mod log_entries;
pub mod machines;
pub mod shifts;
