//! Error types for the receipt points core.

use thiserror::Error;

/// Errors from parsing a currency string into an [`Amount`](crate::Amount).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,

    #[error("amount {0:?} has no decimal point")]
    MissingFraction(String),

    #[error("amount {0:?} has a non-digit dollar part")]
    InvalidDollars(String),

    #[error("amount {0:?} must have exactly two fractional digits")]
    InvalidCents(String),

    #[error("amount {0:?} is out of range")]
    OutOfRange(String),
}

/// Errors raised while scoring a receipt.
///
/// The engine expects a receipt that already passed boundary validation, so
/// any of these indicates a defect upstream rather than bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointsError {
    #[error("cannot parse {field}: {source}")]
    InvalidAmount {
        field: String,
        #[source]
        source: AmountError,
    },

    #[error("cannot parse purchase date {0:?}")]
    InvalidDate(String),

    #[error("cannot parse purchase time {0:?}")]
    InvalidTime(String),

    #[error("arithmetic overflow in {0} rule")]
    Overflow(&'static str),
}

/// Structural validation failures for a submitted receipt document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} does not match pattern {pattern}")]
    PatternMismatch { field: String, pattern: String },

    #[error("invalid amount in {field}: {source}")]
    InvalidAmount {
        field: String,
        #[source]
        source: AmountError,
    },

    #[error("purchaseDate {0:?} is not a calendar date (YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("purchaseTime {0:?} is not a time of day (HH:MM)")]
    InvalidTime(String),

    #[error("receipt must have at least {min} item(s), got {got}")]
    TooFewItems { min: usize, got: usize },
}

/// Errors building a validator from a [`ReceiptSchema`](crate::ReceiptSchema).
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid pattern for {field}: {source}")]
    InvalidPattern {
        field: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// A string that is not a receipt identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed receipt id {0:?}")]
pub struct ParseIdError(pub String);
