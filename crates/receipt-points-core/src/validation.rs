//! Structural validation of submitted receipts.
//!
//! [`ReceiptSchema`] is the declarative contract (patterns and item bounds). It
//! is plain data so it can be loaded from a configuration artifact. A
//! [`ReceiptValidator`] compiles it once and is then reused for every document.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::error::{SchemaError, ValidationError};
use crate::receipt::Receipt;

pub const DEFAULT_RETAILER_PATTERN: &str = r"^[\w\s\-&]+$";
pub const DEFAULT_DESCRIPTION_PATTERN: &str = r"^[\w\s\-]+$";
pub const DEFAULT_AMOUNT_PATTERN: &str = r"^\d+\.\d{2}$";
pub const DEFAULT_DATE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";
pub const DEFAULT_TIME_PATTERN: &str = r"^\d{2}:\d{2}$";

/// Declarative structural contract for a receipt document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReceiptSchema {
    /// Pattern `retailer` must match.
    pub retailer_pattern: String,
    /// Pattern every `shortDescription` must match.
    pub description_pattern: String,
    /// Pattern `total` and every `price` must match.
    pub amount_pattern: String,
    /// Shape `purchaseDate` must have before it is read as a calendar date.
    pub date_pattern: String,
    /// Shape `purchaseTime` must have before it is read as a clock time.
    pub time_pattern: String,
    /// Minimum number of items.
    pub min_items: usize,
}

impl Default for ReceiptSchema {
    fn default() -> Self {
        Self {
            retailer_pattern: DEFAULT_RETAILER_PATTERN.to_string(),
            description_pattern: DEFAULT_DESCRIPTION_PATTERN.to_string(),
            amount_pattern: DEFAULT_AMOUNT_PATTERN.to_string(),
            date_pattern: DEFAULT_DATE_PATTERN.to_string(),
            time_pattern: DEFAULT_TIME_PATTERN.to_string(),
            min_items: 1,
        }
    }
}

/// A compiled [`ReceiptSchema`].
#[derive(Debug, Clone)]
pub struct ReceiptValidator {
    retailer: Regex,
    description: Regex,
    amount: Regex,
    date: Regex,
    time: Regex,
    min_items: usize,
}

impl ReceiptValidator {
    /// Compile a schema.
    pub fn new(schema: &ReceiptSchema) -> Result<Self, SchemaError> {
        Ok(Self {
            retailer: compile("retailerPattern", &schema.retailer_pattern)?,
            description: compile("descriptionPattern", &schema.description_pattern)?,
            amount: compile("amountPattern", &schema.amount_pattern)?,
            date: compile("datePattern", &schema.date_pattern)?,
            time: compile("timePattern", &schema.time_pattern)?,
            min_items: schema.min_items,
        })
    }

    /// Validate a receipt, reporting the first offending field.
    ///
    /// A receipt that passes can be scored without a computation error.
    pub fn validate(&self, receipt: &Receipt) -> Result<(), ValidationError> {
        // 1. Retailer
        check_pattern(&self.retailer, "retailer", &receipt.retailer)?;

        // 2. Date and time must have the exact shape and be real calendar values
        if !self.date.is_match(&receipt.purchase_date) || receipt.parsed_date().is_none() {
            return Err(ValidationError::InvalidDate(receipt.purchase_date.clone()));
        }
        if !self.time.is_match(&receipt.purchase_time) || receipt.parsed_time().is_none() {
            return Err(ValidationError::InvalidTime(receipt.purchase_time.clone()));
        }

        // 3. Total
        self.check_amount("total", &receipt.total)?;

        // 4. Items
        if receipt.items.len() < self.min_items {
            return Err(ValidationError::TooFewItems {
                min: self.min_items,
                got: receipt.items.len(),
            });
        }
        for (index, item) in receipt.items.iter().enumerate() {
            check_pattern(
                &self.description,
                &format!("items[{index}].shortDescription"),
                &item.short_description,
            )?;
            self.check_amount(&format!("items[{index}].price"), &item.price)?;
        }

        Ok(())
    }

    fn check_amount(&self, field: &str, value: &str) -> Result<(), ValidationError> {
        check_pattern(&self.amount, field, value)?;
        Amount::parse(value).map_err(|source| ValidationError::InvalidAmount {
            field: field.to_string(),
            source,
        })?;
        Ok(())
    }
}

impl Default for ReceiptValidator {
    fn default() -> Self {
        Self::new(&ReceiptSchema::default()).expect("built-in receipt schema compiles")
    }
}

/// Validate a receipt against the built-in contract.
pub fn validate_receipt(receipt: &Receipt) -> Result<(), ValidationError> {
    ReceiptValidator::default().validate(receipt)
}

fn compile(field: &'static str, pattern: &str) -> Result<Regex, SchemaError> {
    Regex::new(pattern).map_err(|source| SchemaError::InvalidPattern { field, source })
}

fn check_pattern(regex: &Regex, field: &str, value: &str) -> Result<(), ValidationError> {
    if regex.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::PatternMismatch {
            field: field.to_string(),
            pattern: regex.as_str().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AmountError;
    use crate::points::compute_points;
    use crate::receipt::{Item, ReceiptBuilder};

    fn valid_receipt() -> Receipt {
        ReceiptBuilder::new("Walgreens")
            .date("2022-01-02")
            .time("08:13")
            .item("Pepsi - 12-oz", "1.25")
            .item("Dasani", "1.40")
            .total("2.65")
            .build()
    }

    #[test]
    fn test_default_schema_compiles() {
        assert!(ReceiptValidator::new(&ReceiptSchema::default()).is_ok());
    }

    #[test]
    fn test_valid_receipt() {
        let receipt = valid_receipt();
        assert!(validate_receipt(&receipt).is_ok());
        assert!(compute_points(&receipt).is_ok());
    }

    #[test]
    fn test_retailer_pattern() {
        let mut receipt = valid_receipt();
        receipt.retailer = "M&M Corner Market".into();
        assert!(validate_receipt(&receipt).is_ok());

        receipt.retailer = String::new();
        assert!(matches!(
            validate_receipt(&receipt),
            Err(ValidationError::PatternMismatch { ref field, .. }) if field == "retailer"
        ));

        receipt.retailer = "Joe's".into();
        assert!(validate_receipt(&receipt).is_err());
    }

    #[test]
    fn test_bad_date_and_time() {
        let mut receipt = valid_receipt();
        receipt.purchase_date = "2022-02-30".into();
        assert_eq!(
            validate_receipt(&receipt),
            Err(ValidationError::InvalidDate("2022-02-30".into()))
        );

        let mut receipt = valid_receipt();
        receipt.purchase_time = "24:00".into();
        assert_eq!(
            validate_receipt(&receipt),
            Err(ValidationError::InvalidTime("24:00".into()))
        );

        let mut receipt = valid_receipt();
        receipt.purchase_time = "13:01:00".into();
        assert!(matches!(validate_receipt(&receipt), Err(ValidationError::InvalidTime(_))));
    }

    #[test]
    fn test_loose_date_and_time_shapes_are_rejected() {
        for date in ["2022-1-1", "+2022-01-01", "22-01-01", "2022-01-01 "] {
            let mut receipt = valid_receipt();
            receipt.purchase_date = date.into();
            assert_eq!(
                validate_receipt(&receipt),
                Err(ValidationError::InvalidDate(date.into())),
                "date {date:?}"
            );
        }

        for time in ["1:05", "13:1", "01:05 ", "T13:01"] {
            let mut receipt = valid_receipt();
            receipt.purchase_time = time.into();
            assert_eq!(
                validate_receipt(&receipt),
                Err(ValidationError::InvalidTime(time.into())),
                "time {time:?}"
            );
        }
    }

    #[test]
    fn test_huge_amounts_validate_and_score() {
        let receipt = ReceiptBuilder::new("Target")
            .date("2022-01-02")
            .time("10:00")
            .item("abc", "100000000000000000000.00")
            .total("100000000000000000000.00")
            .build();
        assert!(validate_receipt(&receipt).is_ok());
        assert!(compute_points(&receipt).is_ok());
    }

    #[test]
    fn test_bad_total() {
        let mut receipt = valid_receipt();
        receipt.total = "2.6".into();
        assert!(matches!(
            validate_receipt(&receipt),
            Err(ValidationError::PatternMismatch { ref field, .. }) if field == "total"
        ));
    }

    #[test]
    fn test_total_out_of_range() {
        let mut receipt = valid_receipt();
        receipt.total = format!("{}.00", "9".repeat(40));
        assert!(matches!(
            validate_receipt(&receipt),
            Err(ValidationError::InvalidAmount {
                source: AmountError::OutOfRange(_),
                ..
            })
        ));
    }

    #[test]
    fn test_empty_items() {
        let mut receipt = valid_receipt();
        receipt.items.clear();
        assert_eq!(
            validate_receipt(&receipt),
            Err(ValidationError::TooFewItems { min: 1, got: 0 })
        );
    }

    #[test]
    fn test_item_field_paths() {
        let mut receipt = valid_receipt();
        receipt.items.push(Item::new("Chips", "1"));
        assert!(matches!(
            validate_receipt(&receipt),
            Err(ValidationError::PatternMismatch { ref field, .. }) if field == "items[2].price"
        ));

        let mut receipt = valid_receipt();
        receipt.items[1].short_description = "Dasani!".into();
        assert!(matches!(
            validate_receipt(&receipt),
            Err(ValidationError::PatternMismatch { ref field, .. })
                if field == "items[1].shortDescription"
        ));
    }

    #[test]
    fn test_whitespace_description_is_accepted() {
        let mut receipt = valid_receipt();
        receipt.items[0].short_description = "   ".into();
        assert!(validate_receipt(&receipt).is_ok());
    }

    #[test]
    fn test_custom_schema() {
        let schema = ReceiptSchema {
            min_items: 3,
            ..ReceiptSchema::default()
        };
        let validator = ReceiptValidator::new(&schema).unwrap();
        assert_eq!(
            validator.validate(&valid_receipt()),
            Err(ValidationError::TooFewItems { min: 3, got: 2 })
        );
    }

    #[test]
    fn test_invalid_pattern_is_schema_error() {
        let schema = ReceiptSchema {
            amount_pattern: "(".into(),
            ..ReceiptSchema::default()
        };
        assert!(matches!(
            ReceiptValidator::new(&schema),
            Err(SchemaError::InvalidPattern { field: "amountPattern", .. })
        ));
    }

    #[test]
    fn test_schema_json_field_names() {
        let json = serde_json::to_value(ReceiptSchema::default()).unwrap();
        assert_eq!(json["minItems"], 1);
        assert_eq!(json["amountPattern"], DEFAULT_AMOUNT_PATTERN);
        assert_eq!(json["datePattern"], DEFAULT_DATE_PATTERN);
        let unknown = r#"{"retailerPattern":"a","descriptionPattern":"a","amountPattern":"a","datePattern":"a","timePattern":"a","minItems":1,"extra":true}"#;
        assert!(serde_json::from_str::<ReceiptSchema>(unknown).is_err());
    }
}
