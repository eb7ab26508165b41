//! Error types for the receipt processor.

use receipt_points_core::{PointsError, ReceiptId, ValidationError};
use receipt_points_store::StoreError;
use thiserror::Error;

/// Errors that can occur during processor operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The document does not satisfy the structural contract.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Identifier is malformed or unknown. The two cases are not distinguished.
    #[error("receipt not found: {0}")]
    NotFound(String),

    /// A stored receipt could not be scored.
    #[error("points computation failed for receipt {id}: {source}")]
    Computation {
        id: ReceiptId,
        #[source]
        source: PointsError,
    },

    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Every generated identifier was already taken.
    #[error("no free receipt id after {0} attempts")]
    IdsExhausted(u32),
}

/// Result type for processor operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
