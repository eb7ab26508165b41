//! # Receipt Points
//!
//! A small HTTP service that accepts retail receipts, assigns each an
//! identifier, and awards reward points computed from the receipt contents.
//!
//! ## Endpoints
//!
//! - `POST /receipts/process` - body is a receipt, returns `{"id": "..."}`
//! - `GET /receipts/:id/points` - returns `{"points": N}`
//!
//! Malformed receipts answer `400`; unknown or malformed identifiers `404`.
//!
//! ## Usage
//!
//! ```rust
//! use receipt_points::{ProcessorConfig, ReceiptProcessor};
//! use receipt_points::core::{ReceiptBuilder, ReceiptValidator};
//! use receipt_points::store::MemoryStore;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let processor = ReceiptProcessor::new(
//!     MemoryStore::new(),
//!     ReceiptValidator::default(),
//!     ProcessorConfig::default(),
//! );
//!
//! let receipt = ReceiptBuilder::new("Walgreens")
//!     .date("2022-01-02")
//!     .time("08:13")
//!     .item("Pepsi - 12-oz", "1.25")
//!     .item("Dasani", "1.40")
//!     .total("2.65")
//!     .build();
//!
//! let id = processor.submit(&receipt).await.unwrap();
//! assert_eq!(processor.get_points_by_id(&id).await.unwrap(), 15);
//! # });
//! ```
//!
//! ## Re-exports
//!
//! - `receipt_points::core` - Receipts, amounts, scoring, validation
//! - `receipt_points::store` - Storage abstraction and in-memory store

pub mod config;
pub mod error;
pub mod http;
pub mod processor;
pub mod server;

// Re-export component crates
pub use receipt_points_core as core;
pub use receipt_points_store as store;

pub use config::{ConfigError, ServiceConfig};
pub use error::{Result, ServiceError};
pub use http::create_router;
pub use processor::{ProcessorConfig, ReceiptProcessor};
pub use server::{create_app, run_server};

pub use receipt_points_core::{compute_points, Receipt, ReceiptBuilder, ReceiptId};
