//! Fixture receipts with known point totals.
//!
//! The JSON documents live in `fixtures/` and are embedded at compile time so
//! tests can post them verbatim.

use receipt_points_core::{Points, Receipt};

/// A receipt document and the points it must score.
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    pub name: &'static str,
    pub json: &'static str,
    pub expected_points: Points,
}

impl Fixture {
    /// Parse the embedded document.
    pub fn receipt(&self) -> Receipt {
        serde_json::from_str(self.json)
            .unwrap_or_else(|e| panic!("fixture {} is not a receipt: {e}", self.name))
    }

    /// The embedded document as a JSON value.
    pub fn json_value(&self) -> serde_json::Value {
        serde_json::from_str(self.json)
            .unwrap_or_else(|e| panic!("fixture {} is not JSON: {e}", self.name))
    }
}

/// Five items, odd day, 13:01. 28 points.
pub const TARGET: Fixture = Fixture {
    name: "target",
    json: include_str!("../fixtures/target-receipt.json"),
    expected_points: 28,
};

/// Round total, four items, 14:33. 109 points.
pub const CORNER_MARKET: Fixture = Fixture {
    name: "corner-market",
    json: include_str!("../fixtures/corner-market-receipt.json"),
    expected_points: 109,
};

/// Two items, even day, 08:13. 15 points.
pub const MORNING: Fixture = Fixture {
    name: "morning",
    json: include_str!("../fixtures/morning-receipt.json"),
    expected_points: 15,
};

/// One item, quarter total. 31 points.
pub const SIMPLE: Fixture = Fixture {
    name: "simple",
    json: include_str!("../fixtures/simple-receipt.json"),
    expected_points: 31,
};

/// All fixtures.
pub fn all_fixtures() -> [Fixture; 4] {
    [TARGET, CORNER_MARKET, MORNING, SIMPLE]
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_points_core::validate_receipt;

    #[test]
    fn test_fixtures_parse_and_validate() {
        for fixture in all_fixtures() {
            let receipt = fixture.receipt();
            assert!(
                validate_receipt(&receipt).is_ok(),
                "fixture {} must satisfy the schema",
                fixture.name
            );
        }
    }

    #[test]
    fn test_fixture_names_are_unique() {
        let fixtures = all_fixtures();
        for (i, a) in fixtures.iter().enumerate() {
            for b in &fixtures[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
