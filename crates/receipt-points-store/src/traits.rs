//! Store trait: the abstract interface for receipt records.
//!
//! The processor only needs these operations, so any keyed backend works.
//! [`MemoryStore`](crate::MemoryStore) is the one shipped.

use async_trait::async_trait;
use receipt_points_core::{Points, Receipt, ReceiptId};

use crate::error::Result;

/// Result of inserting a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertResult {
    /// Receipt was stored under the identifier.
    Inserted,
    /// The identifier is taken. Nothing was written.
    AlreadyExists,
}

/// A stored receipt and its points, once computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptRecord {
    /// The document as submitted.
    pub receipt: Receipt,
    /// Cached points. `None` until the first lookup scores the receipt.
    pub points: Option<Points>,
}

impl ReceiptRecord {
    /// A fresh record with no cached points.
    pub fn new(receipt: Receipt) -> Self {
        Self {
            receipt,
            points: None,
        }
    }
}

/// The Store trait: async interface for receipt records.
///
/// # Design Notes
///
/// - **No overwrites**: inserting under an existing identifier returns
///   `AlreadyExists` and leaves the stored record untouched.
/// - **First cached value wins**: `cache_points` only writes when the record has
///   no points yet, so racing lookups all report the same value.
/// - **No deletion**: records live as long as the store.
#[async_trait]
pub trait Store: Send + Sync {
    /// Insert a receipt under `id`.
    ///
    /// # Returns
    /// - `Inserted` if the identifier was free.
    /// - `AlreadyExists` if a record already uses it.
    async fn insert_receipt(&self, id: &ReceiptId, receipt: &Receipt) -> Result<InsertResult>;

    /// Get the record for an identifier.
    async fn get_record(&self, id: &ReceiptId) -> Result<Option<ReceiptRecord>>;

    /// Check if a record exists.
    async fn has_receipt(&self, id: &ReceiptId) -> Result<bool>;

    /// Cache computed points for a record.
    ///
    /// Returns the points held after the call: `points` if none were cached,
    /// otherwise the earlier value. Fails with `NotFound` for unknown ids.
    async fn cache_points(&self, id: &ReceiptId, points: Points) -> Result<Points>;

    /// Number of stored records.
    async fn count(&self) -> Result<usize>;
}
