//! Application services.

pub mod handover;

pub use handover::{HandoverError, HandoverService};
