//! Handler for `/payment-card-cost`.

use std::time::Instant;

use axum::Json;
use axum::extract::State;
use axum::http::Uri;

use crate::api::dto::requests::PaymentCardCostRequest;
use crate::api::dto::responses::PaymentCardCostResponse;
use crate::api::middleware::{ApiErrorResponse, domain_error_to_response};
use crate::application::validation::{mask_card_number, validate_payment_request};
use crate::infrastructure::AppDependencies;

/// POST /payment-card-cost - Resolve a card number to its country's cost.
///
/// Validates the card number, derives its BIN, asks the external lookup
/// service for the issuing country and maps it to a stored cost record
/// (falling back to the sentinel bucket).
///
/// # Request Body
///
/// ```json
/// { "card_number": "4532756279624064" }
/// ```
///
/// # Response
///
/// - `200 OK` - `{ "country": "US", "cost": 5.0 }`
/// - `400 Bad Request` - malformed card number, or the lookup yielded no
///   usable country code
/// - `404 Not Found` - no cost record for the country or the fallback bucket
/// - `502 Bad Gateway` - the external lookup failed
/// - `500 Internal Server Error`
pub async fn payment_card_cost(
    State(dependencies): State<AppDependencies>,
    uri: Uri,
    Json(request): Json<PaymentCardCostRequest>,
) -> Result<Json<PaymentCardCostResponse>, ApiErrorResponse> {
    let started = Instant::now();

    // Validate before logging so an arbitrarily long card number never
    // reaches the masking helper or the logs.
    validate_payment_request(&request.card_number)
        .map_err(|error| domain_error_to_response(error, &uri))?;

    let masked = mask_card_number(&request.card_number);
    tracing::info!(card_number = %masked, "received payment card cost request");

    let record = dependencies
        .payment_resolver()
        .resolve(&request.card_number)
        .await
        .map_err(|error| domain_error_to_response(error, &uri))?;

    tracing::info!(
        card_number = %masked,
        country = %record.country,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "payment card cost request completed"
    );

    Ok(Json(PaymentCardCostResponse::from(record)))
}
