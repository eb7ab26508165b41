//! Error types for the store module.

use receipt_points_core::ReceiptId;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record for this identifier.
    #[error("receipt not found: {0}")]
    NotFound(ReceiptId),

    /// A writer panicked while holding the lock.
    #[error("store lock poisoned")]
    LockPoisoned,
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
