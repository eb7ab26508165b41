//! Proptest generators for property-based testing.
//!
//! Every receipt produced here satisfies the built-in structural contract.

use proptest::prelude::*;

use receipt_points_core::{Item, Receipt, ReceiptBuilder};

/// Generate a retailer name matching the retailer pattern.
pub fn retailer() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 &-]{0,31}".prop_map(String::from)
}

/// Generate a short description, possibly padded with whitespace.
pub fn short_description() -> impl Strategy<Value = String> {
    "[ ]{0,3}[A-Za-z0-9][A-Za-z0-9 -]{0,23}[ ]{0,3}".prop_map(String::from)
}

/// Generate an amount in cents, up to 10,000.00.
pub fn cents() -> impl Strategy<Value = u64> {
    0u64..=1_000_000
}

/// Format cents as a two-decimal currency string.
pub fn format_cents(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// Generate a valid `YYYY-MM-DD` date.
pub fn purchase_date() -> impl Strategy<Value = String> {
    (2000u32..=2030, 1u32..=12, 1u32..=28)
        .prop_map(|(year, month, day)| format!("{year:04}-{month:02}-{day:02}"))
}

/// Generate a valid `HH:MM` time.
pub fn purchase_time() -> impl Strategy<Value = String> {
    (0u32..24, 0u32..60).prop_map(|(hour, minute)| format!("{hour:02}:{minute:02}"))
}

/// Generate an item.
pub fn item() -> impl Strategy<Value = Item> {
    (short_description(), cents()).prop_map(|(description, price)| {
        Item::new(description, format_cents(price))
    })
}

/// Parameters for generating a receipt.
#[derive(Debug, Clone)]
pub struct ReceiptParams {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total_cents: u64,
}

impl Arbitrary for ReceiptParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            retailer(),
            purchase_date(),
            purchase_time(),
            prop::collection::vec(item(), 1..=12),
            cents(),
        )
            .prop_map(
                |(retailer, purchase_date, purchase_time, items, total_cents)| ReceiptParams {
                    retailer,
                    purchase_date,
                    purchase_time,
                    items,
                    total_cents,
                },
            )
            .boxed()
    }
}

/// Build a receipt from parameters.
pub fn receipt_from_params(params: &ReceiptParams) -> Receipt {
    ReceiptBuilder::new(params.retailer.clone())
        .date(params.purchase_date.clone())
        .time(params.purchase_time.clone())
        .items(params.items.clone())
        .total(format_cents(params.total_cents))
        .build()
}

/// Generate a valid receipt.
pub fn receipt() -> impl Strategy<Value = Receipt> {
    any::<ReceiptParams>().prop_map(|params| receipt_from_params(&params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_points_core::{compute_points, score_receipt, validate_receipt, Points};

    proptest! {
        #[test]
        fn generated_receipts_are_valid(receipt in receipt()) {
            prop_assert!(validate_receipt(&receipt).is_ok());
        }

        #[test]
        fn points_are_deterministic(params: ReceiptParams) {
            let r1 = receipt_from_params(&params);
            let r2 = receipt_from_params(&params);
            prop_assert_eq!(compute_points(&r1).unwrap(), compute_points(&r2).unwrap());
        }

        #[test]
        fn valid_receipts_always_score(receipt in receipt()) {
            let breakdown = score_receipt(&receipt).unwrap();
            prop_assert_eq!(breakdown.total().unwrap(), compute_points(&receipt).unwrap());
        }

        #[test]
        fn round_totals_earn_both_total_bonuses(params: ReceiptParams, dollars in 0u64..10_000) {
            let params = ReceiptParams { total_cents: dollars * 100, ..params };
            let breakdown = score_receipt(&receipt_from_params(&params)).unwrap();
            prop_assert_eq!(breakdown.round_dollar_total, 50);
            prop_assert_eq!(breakdown.quarter_multiple_total, 25);
        }

        #[test]
        fn pair_bonus_follows_item_count(params: ReceiptParams) {
            let receipt = receipt_from_params(&params);
            let breakdown = score_receipt(&receipt).unwrap();
            prop_assert_eq!(breakdown.item_pairs, 5 * (receipt.items.len() as Points / 2));
        }
    }
}
