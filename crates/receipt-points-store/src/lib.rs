//! # Receipt Points Store
//!
//! Storage abstraction for submitted receipts. The processor talks to the
//! [`Store`] trait only; [`MemoryStore`] keeps records in process memory.
//!
//! ## Key Types
//!
//! - [`Store`] - The async trait for all storage operations
//! - [`MemoryStore`] - In-memory storage, no persistence
//! - [`ReceiptRecord`] - A stored receipt with its cached points
//! - [`InsertResult`] - Result of inserting a receipt
//!
//! ## Usage
//!
//! ```rust
//! use receipt_points_core::{ReceiptBuilder, ReceiptId};
//! use receipt_points_store::{InsertResult, MemoryStore, Store};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let store = MemoryStore::new();
//! let id = ReceiptId::generate();
//! let receipt = ReceiptBuilder::new("Target").item("Dasani", "1.40").total("1.40").build();
//!
//! assert_eq!(store.insert_receipt(&id, &receipt).await.unwrap(), InsertResult::Inserted);
//! assert_eq!(store.cache_points(&id, 7).await.unwrap(), 7);
//! # });
//! ```
//!
//! ## Design Notes
//!
//! - **No overwrites**: an identifier is bound to one receipt forever
//! - **Memoized points**: the first cached value is the value every caller sees
//! - **No eviction**: records are retained for the life of the store

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use traits::{InsertResult, ReceiptRecord, Store};
