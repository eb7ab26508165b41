//! # Receipt Points Testkit
//!
//! Testing utilities for receipt points.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: Receipt documents with known point totals
//! - **Generators**: Proptest strategies producing schema-valid receipts
//!
//! ## Fixtures
//!
//! ```rust
//! use receipt_points_core::compute_points;
//! use receipt_points_testkit::all_fixtures;
//!
//! for fixture in all_fixtures() {
//!     assert_eq!(compute_points(&fixture.receipt()).unwrap(), fixture.expected_points);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use receipt_points_testkit::generators::{receipt_from_params, ReceiptParams};
//!
//! proptest! {
//!     #[test]
//!     fn points_are_deterministic(params: ReceiptParams) {
//!         let r1 = receipt_from_params(&params);
//!         let r2 = receipt_from_params(&params);
//!         prop_assert_eq!(compute_points(&r1).unwrap(), compute_points(&r2).unwrap());
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{all_fixtures, Fixture, CORNER_MARKET, MORNING, SIMPLE, TARGET};
pub use generators::{receipt_from_params, ReceiptParams};
