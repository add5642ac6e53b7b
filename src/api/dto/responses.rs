//! Response DTOs for the card cost API.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::CardCost;

/// Response body for `POST /payment-card-cost`.
///
/// # Example JSON
///
/// ```json
/// { "country": "US", "cost": 5.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentCardCostResponse {
    /// The country whose record supplied the cost. When the fallback bucket
    /// answered, this is the bucket's own key.
    pub country: String,
    /// The transaction cost.
    pub cost: Decimal,
}

impl From<CardCost> for PaymentCardCostResponse {
    fn from(record: CardCost) -> Self {
        Self {
            country: record.country,
            cost: record.cost,
        }
    }
}

/// Full card cost record as returned by the CRUD endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardCostResponse {
    /// Record identity.
    pub id: u64,
    /// Uppercased country code.
    pub country: String,
    /// Transaction cost.
    pub cost: Decimal,
    /// Optimistic concurrency token.
    pub version: u64,
}

impl From<CardCost> for CardCostResponse {
    fn from(record: CardCost) -> Self {
        Self {
            id: record.id,
            country: record.country,
            cost: record.cost,
            version: record.version,
        }
    }
}
