//! Receipt documents as submitted by clients.
//!
//! A [`Receipt`] keeps the wire representation (strings for dates, times and
//! amounts) so the stored document is exactly what was submitted. Typed views
//! are produced on demand by the accessor methods.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::error::AmountError;

/// Format of `purchaseDate`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format of `purchaseTime` (24-hour clock).
pub const TIME_FORMAT: &str = "%H:%M";

/// A retail receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Name of the retailer or store.
    pub retailer: String,
    /// Date of purchase, `YYYY-MM-DD`.
    pub purchase_date: String,
    /// Time of purchase, `HH:MM`.
    pub purchase_time: String,
    /// Purchased items, in receipt order.
    pub items: Vec<Item>,
    /// Total amount paid, e.g. `"35.35"`.
    pub total: String,
}

/// A single line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Short product description. May carry surrounding whitespace.
    pub short_description: String,
    /// Price paid, e.g. `"6.49"`.
    pub price: String,
}

impl Receipt {
    /// Parse the purchase date.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.purchase_date, DATE_FORMAT).ok()
    }

    /// Parse the purchase time.
    pub fn parsed_time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.purchase_time, TIME_FORMAT).ok()
    }

    /// Parse the total.
    pub fn parsed_total(&self) -> Result<Amount, AmountError> {
        Amount::parse(&self.total)
    }

    /// Number of items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Item {
    /// Create an item.
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }

    /// Parse the price.
    pub fn parsed_price(&self) -> Result<Amount, AmountError> {
        Amount::parse(&self.price)
    }

    /// Character count of the description once surrounding whitespace is trimmed.
    pub fn trimmed_description_len(&self) -> usize {
        self.short_description.trim().chars().count()
    }
}

/// Builder for constructing receipts.
#[derive(Debug, Clone)]
pub struct ReceiptBuilder {
    retailer: String,
    purchase_date: String,
    purchase_time: String,
    items: Vec<Item>,
    total: String,
}

impl ReceiptBuilder {
    /// Start a receipt for the given retailer.
    ///
    /// Defaults: 2022-01-02 at 10:00, no items, total `0.00`.
    pub fn new(retailer: impl Into<String>) -> Self {
        Self {
            retailer: retailer.into(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "10:00".to_string(),
            items: Vec::new(),
            total: "0.00".to_string(),
        }
    }

    /// Set the purchase date (`YYYY-MM-DD`).
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.purchase_date = date.into();
        self
    }

    /// Set the purchase time (`HH:MM`).
    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.purchase_time = time.into();
        self
    }

    /// Append an item.
    pub fn item(mut self, short_description: impl Into<String>, price: impl Into<String>) -> Self {
        self.items.push(Item::new(short_description, price));
        self
    }

    /// Replace all items.
    pub fn items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    /// Set the total.
    pub fn total(mut self, total: impl Into<String>) -> Self {
        self.total = total.into();
        self
    }

    /// Build the receipt.
    pub fn build(self) -> Receipt {
        Receipt {
            retailer: self.retailer,
            purchase_date: self.purchase_date,
            purchase_time: self.purchase_time,
            items: self.items,
            total: self.total,
        }
    }
}
