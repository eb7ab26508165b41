//! Strong type definitions for receipt points.
//!
//! Identifiers are newtypes so a raw string never stands in for a stored id.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::{Builder, Uuid};

use crate::error::ParseIdError;

/// Identifier assigned to a receipt at submission.
///
/// A random (version 4) UUID. Uniqueness is the only property callers may rely
/// on; the value carries no information about the receipt it names.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Generate a fresh identifier from 128 random bits.
    pub fn generate() -> Self {
        Self::from_random_bytes(rand::random())
    }

    /// Build an identifier from caller-supplied random bytes.
    ///
    /// Version and variant bits are overwritten, so any 16 bytes are accepted.
    pub fn from_random_bytes(bytes: [u8; 16]) -> Self {
        Self(Builder::from_random_bytes(bytes).into_uuid())
    }

    /// Get the underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Debug for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReceiptId({})", self.0.hyphenated())
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for ReceiptId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| ParseIdError(s.to_string()))
    }
}

impl From<Uuid> for ReceiptId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}
