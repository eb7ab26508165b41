//! Exact currency amounts.
//!
//! Receipt totals and prices arrive as strings such as `"35.35"`. They are
//! parsed into [`rust_decimal::Decimal`] so divisibility checks never see
//! binary floating point error.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::AmountError;

/// A non-negative currency amount with exactly two fractional digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    /// Number of fractional digits every amount carries.
    pub const SCALE: u32 = 2;

    /// Parse a currency string of the form `<digits>.<two digits>`.
    pub fn parse(s: &str) -> Result<Self, AmountError> {
        if s.is_empty() {
            return Err(AmountError::Empty);
        }

        let (dollars, cents) = s
            .split_once('.')
            .ok_or_else(|| AmountError::MissingFraction(s.to_string()))?;

        if dollars.is_empty() || !dollars.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountError::InvalidDollars(s.to_string()));
        }
        if cents.len() != Self::SCALE as usize || !cents.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountError::InvalidCents(s.to_string()));
        }

        Decimal::from_str_exact(s)
            .map(Self)
            .map_err(|_| AmountError::OutOfRange(s.to_string()))
    }

    /// The exact decimal value.
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// True when the cents part is `00`.
    pub fn is_whole_dollars(&self) -> bool {
        self.0.fract().is_zero()
    }

    /// True when the amount is an exact multiple of `step`. A zero step never matches.
    pub fn is_multiple_of(&self, step: Decimal) -> bool {
        if step.is_zero() {
            return false;
        }
        self.0.checked_rem(step).is_some_and(|r| r.is_zero())
    }

    /// The amount in whole cents, if it fits in a `u64`.
    pub fn cents(&self) -> Option<u64> {
        self.0.checked_mul(Decimal::ONE_HUNDRED)?.to_u64()
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
