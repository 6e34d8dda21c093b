//! Persistence layer for the ShiftLog backend.
//!
//! This crate contains:
//! - The `HandoverStore` contract any storage engine must satisfy
//! - In-memory store implementations guarded by async locks
//! - Store error types

pub mod error;
pub mod stores;

pub use error::StoreError;
pub use stores::{HandoverStore, MemoryHandoverStore, Stores};
