//! The `CardCost` record.
//!
//! A `CardCost` maps an ISO 3166-1 alpha-2 country code (or the fallback
//! sentinel bucket) to the flat transaction cost charged for cards issued in
//! that country.
//!
//! # Invariants
//!
//! - Exactly one record exists per country value; the store rejects
//!   duplicates at creation time.
//! - `country` is stored uppercased (normalization happens during payload
//!   validation, before the record reaches the store).
//! - `cost` is non-negative.
//! - `version` starts at 0 and is incremented on every update; it is the
//!   optimistic concurrency token compared during compare-and-swap writes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A per-country transaction cost record.
///
/// # Example JSON
///
/// ```json
/// {
///     "id": 1,
///     "country": "US",
///     "cost": 5.0,
///     "version": 0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCost {
    /// Synthetic identity assigned by the store on creation.
    pub id: u64,
    /// Uppercased country code, unique across the store.
    pub country: String,
    /// Non-negative transaction cost.
    pub cost: Decimal,
    /// Optimistic concurrency token, bumped on every update.
    pub version: u64,
}

impl CardCost {
    /// Creates a freshly-persisted record at version 0.
    #[must_use]
    pub const fn new(id: u64, country: String, cost: Decimal) -> Self {
        Self {
            id,
            country,
            cost,
            version: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_record_starts_at_version_zero() {
        let record = CardCost::new(1, "US".to_string(), Decimal::new(50, 1));

        assert_eq!(record.id, 1);
        assert_eq!(record.country, "US");
        assert_eq!(record.cost, Decimal::new(50, 1));
        assert_eq!(record.version, 0);
    }

    #[rstest]
    fn serializes_cost_as_json_number() {
        let record = CardCost::new(7, "DK".to_string(), Decimal::new(25, 1));

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["country"], "DK");
        assert_eq!(json["cost"], 2.5);
        assert_eq!(json["version"], 0);
    }

    #[rstest]
    fn round_trips_through_json() {
        let record = CardCost::new(3, "GR".to_string(), Decimal::new(1500, 2));

        let json = serde_json::to_string(&record).unwrap();
        let decoded: CardCost = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, record);
    }
}
