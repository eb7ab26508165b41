//! In-memory implementation of the Store trait.
//!
//! Nothing is persisted. Records are kept until the store is dropped.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::{debug, trace};

use receipt_points_core::{Points, Receipt, ReceiptId};

use crate::error::{Result, StoreError};
use crate::traits::{InsertResult, ReceiptRecord, Store};

/// In-memory store implementation. Thread-safe via RwLock.
pub struct MemoryStore {
    records: RwLock<HashMap<ReceiptId, ReceiptRecord>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<ReceiptId, ReceiptRecord>>> {
        self.records.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<ReceiptId, ReceiptRecord>>> {
        self.records.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_receipt(&self, id: &ReceiptId, receipt: &Receipt) -> Result<InsertResult> {
        let mut records = self.write()?;

        match records.entry(*id) {
            Entry::Occupied(_) => {
                debug!(%id, "receipt id already in use");
                Ok(InsertResult::AlreadyExists)
            }
            Entry::Vacant(slot) => {
                slot.insert(ReceiptRecord::new(receipt.clone()));
                trace!(%id, "receipt stored");
                Ok(InsertResult::Inserted)
            }
        }
    }

    async fn get_record(&self, id: &ReceiptId) -> Result<Option<ReceiptRecord>> {
        let records = self.read()?;
        Ok(records.get(id).cloned())
    }

    async fn has_receipt(&self, id: &ReceiptId) -> Result<bool> {
        let records = self.read()?;
        Ok(records.contains_key(id))
    }

    async fn cache_points(&self, id: &ReceiptId, points: Points) -> Result<Points> {
        let mut records = self.write()?;
        let record = records.get_mut(id).ok_or(StoreError::NotFound(*id))?;

        Ok(*record.points.get_or_insert(points))
    }

    async fn count(&self) -> Result<usize> {
        let records = self.read()?;
        Ok(records.len())
    }
}
