//! The points engine: a pure function from a receipt to its reward points.
//!
//! Each rule contributes independently and the contributions are summed:
//!
//! | Rule | Points |
//! |---|---|
//! | Retailer name | 1 per alphanumeric character |
//! | Round-dollar total | 50 when the cents are `00` |
//! | Quarter-multiple total | 25 when the total is a multiple of 0.25 |
//! | Item pairs | 5 per two items |
//! | Item descriptions | `ceil(price * 0.2)` when the trimmed length is a multiple of 3 |
//! | Odd purchase day | 6 |
//! | Afternoon purchase | 10 when the hour is 14 or 15 |

use std::ops::RangeInclusive;

use chrono::{Datelike, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::PointsError;
use crate::receipt::{Item, Receipt};

/// Reward points. Wide enough that the description bonus of any price a
/// [`Decimal`] can hold converts without loss.
pub type Points = u128;

pub const ROUND_DOLLAR_BONUS: Points = 50;
pub const QUARTER_MULTIPLE_BONUS: Points = 25;
pub const POINTS_PER_ITEM_PAIR: Points = 5;
pub const ODD_DAY_BONUS: Points = 6;
pub const AFTERNOON_BONUS: Points = 10;

/// Purchase hours (inclusive) that earn [`AFTERNOON_BONUS`].
pub const AFTERNOON_HOURS: RangeInclusive<u32> = 14..=15;

/// Trimmed description lengths divisible by this earn the description bonus.
pub const DESCRIPTION_LENGTH_DIVISOR: usize = 3;

/// `0.25`
const QUARTER: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// `0.2`, the share of a qualifying item's price awarded as points.
const DESCRIPTION_PRICE_FACTOR: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

/// Points awarded by each rule for one receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer_name: Points,
    pub round_dollar_total: Points,
    pub quarter_multiple_total: Points,
    pub item_pairs: Points,
    pub item_descriptions: Points,
    pub odd_purchase_day: Points,
    pub afternoon_purchase: Points,
}

impl PointsBreakdown {
    /// Sum of all rule contributions.
    pub fn total(&self) -> Result<Points, PointsError> {
        [
            self.retailer_name,
            self.round_dollar_total,
            self.quarter_multiple_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_purchase_day,
            self.afternoon_purchase,
        ]
        .into_iter()
        .try_fold(0 as Points, |acc, points| acc.checked_add(points))
        .ok_or(PointsError::Overflow("total"))
    }
}

/// Compute the points for a receipt.
pub fn compute_points(receipt: &Receipt) -> Result<Points, PointsError> {
    score_receipt(receipt)?.total()
}

/// Evaluate every rule and return the per-rule contributions.
pub fn score_receipt(receipt: &Receipt) -> Result<PointsBreakdown, PointsError> {
    let total = receipt
        .parsed_total()
        .map_err(|source| PointsError::InvalidAmount {
            field: "total".to_string(),
            source,
        })?;
    let date = receipt
        .parsed_date()
        .ok_or_else(|| PointsError::InvalidDate(receipt.purchase_date.clone()))?;
    let time = receipt
        .parsed_time()
        .ok_or_else(|| PointsError::InvalidTime(receipt.purchase_time.clone()))?;

    Ok(PointsBreakdown {
        retailer_name: retailer_points(&receipt.retailer),
        round_dollar_total: if total.is_whole_dollars() {
            ROUND_DOLLAR_BONUS
        } else {
            0
        },
        quarter_multiple_total: if total.is_multiple_of(QUARTER) {
            QUARTER_MULTIPLE_BONUS
        } else {
            0
        },
        item_pairs: item_pair_points(receipt.item_count())?,
        item_descriptions: description_points(&receipt.items)?,
        odd_purchase_day: if date.day() % 2 == 1 { ODD_DAY_BONUS } else { 0 },
        afternoon_purchase: if AFTERNOON_HOURS.contains(&time.hour()) {
            AFTERNOON_BONUS
        } else {
            0
        },
    })
}

/// One point per alphanumeric character, in the Unicode sense.
pub fn retailer_points(retailer: &str) -> Points {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as Points
}

/// Five points for every two items.
pub fn item_pair_points(item_count: usize) -> Result<Points, PointsError> {
    (item_count as Points / 2)
        .checked_mul(POINTS_PER_ITEM_PAIR)
        .ok_or(PointsError::Overflow("item pairs"))
}

/// Sum of the description bonus over all items.
pub fn description_points(items: &[Item]) -> Result<Points, PointsError> {
    items
        .iter()
        .enumerate()
        .try_fold(0 as Points, |acc, (index, item)| {
            let points = item_description_points(index, item)?;
            acc.checked_add(points)
                .ok_or(PointsError::Overflow("item descriptions"))
        })
}

fn item_description_points(index: usize, item: &Item) -> Result<Points, PointsError> {
    // An all-whitespace description trims to length 0 and still qualifies.
    if item.trimmed_description_len() % DESCRIPTION_LENGTH_DIVISOR != 0 {
        return Ok(0);
    }

    let price = item
        .parsed_price()
        .map_err(|source| PointsError::InvalidAmount {
            field: format!("items[{index}].price"),
            source,
        })?;

    price
        .as_decimal()
        .checked_mul(DESCRIPTION_PRICE_FACTOR)
        .and_then(|scaled| scaled.ceil().to_u128())
        .ok_or(PointsError::Overflow("item descriptions"))
}
