//! Store error types.

use thiserror::Error;

/// Errors surfaced by store operations.
///
/// Both variants are expected, recoverable outcomes; the service layer maps
/// them onto its own error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    /// A compare-and-set update lost to a concurrent writer.
    #[error("record was modified concurrently")]
    Conflict,
}
