//! Request DTOs for the card cost API.
//!
//! Bodies are deserialized as-is; validation and country normalization live
//! in the application layer and run on every request.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Request body for `POST /payment-card-cost`.
///
/// # Example JSON
///
/// ```json
/// { "card_number": "4532756279624064" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaymentCardCostRequest {
    /// The payment card number, 8–19 characters.
    pub card_number: String,
}

/// Request body for `POST /card-costs`.
///
/// # Example JSON
///
/// ```json
/// { "country": "US", "cost": 5.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCardCostRequest {
    /// Country code; uppercased during validation.
    pub country: String,
    /// Non-negative transaction cost.
    pub cost: Decimal,
}

/// Request body for `PUT /card-costs/{id}`.
///
/// Both fields are replaced in full; there is no partial update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateCardCostRequest {
    /// Country code; uppercased during validation.
    pub country: String,
    /// Non-negative transaction cost.
    pub cost: Decimal,
}
