//! # Receipt Points Core
//!
//! Pure primitives for scoring retail receipts: documents, amounts,
//! identifiers, the points engine and the structural contract.
//!
//! This crate contains no I/O, no storage, no networking.
//!
//! ## Key Types
//!
//! - [`Receipt`] - A submitted receipt document, kept in wire form
//! - [`Amount`] - Exact two-decimal currency value
//! - [`ReceiptId`] - Random identifier assigned at submission
//! - [`PointsBreakdown`] - Per-rule contributions of one receipt
//! - [`ReceiptValidator`] - Compiled [`ReceiptSchema`]
//!
//! ## Scoring
//!
//! ```rust
//! use receipt_points_core::{compute_points, ReceiptBuilder};
//!
//! let receipt = ReceiptBuilder::new("Target")
//!     .date("2022-01-02")
//!     .time("13:13")
//!     .item("Pepsi - 12-oz", "1.25")
//!     .total("1.25")
//!     .build();
//!
//! assert_eq!(compute_points(&receipt).unwrap(), 31);
//! ```

pub mod amount;
pub mod error;
pub mod points;
pub mod receipt;
pub mod types;
pub mod validation;

pub use amount::Amount;
pub use error::{AmountError, ParseIdError, PointsError, SchemaError, ValidationError};
pub use points::{compute_points, score_receipt, Points, PointsBreakdown};
pub use receipt::{Item, Receipt, ReceiptBuilder};
pub use types::ReceiptId;
pub use validation::{validate_receipt, ReceiptSchema, ReceiptValidator};
