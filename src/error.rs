//! Error types for the store

use thiserror::Error;

/// Errors raised by the core store.
///
/// Every variant is synchronous and leaves the store unchanged: validation
/// runs before any mutation or scoring, so a failed call has no partial
/// effects. Empty-store searches and `k` larger than the record count are
/// valid outcomes, not errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
