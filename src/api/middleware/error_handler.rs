//! Error handling for the API layer.
//!
//! Translates [`DomainError`] kinds into HTTP responses. The mapping is a
//! pure function; handlers apply it with `map_err` and rely on axum's
//! `IntoResponse` for serialization.
//!
//! # Error Body
//!
//! ```json
//! {
//!     "message": "Card Cost with Id: 42 do not exists!",
//!     "details": "uri=/card-costs/42",
//!     "timestamp": "2026-08-31T12:00:00Z"
//! }
//! ```
//!
//! # Error Mapping
//!
//! | Domain Error | HTTP Status |
//! |--------------|-------------|
//! | `InvalidInput` | 400 |
//! | `Conflict` | 400 |
//! | `NotFound` | 404 |
//! | `ExternalApi` | 502 |
//! | `Internal` | 500 |

use axum::Json;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::DomainError;

/// JSON error body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    /// The user-facing error message, verbatim from the domain layer.
    pub message: String,
    /// The request that failed, as `uri=<path>`.
    pub details: String,
    /// When the error was produced.
    pub timestamp: DateTime<Utc>,
}

impl ApiError {
    /// Creates an error body stamped with the current time.
    #[must_use]
    pub fn new(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: details.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Response wrapper pairing an HTTP status with an [`ApiError`] body.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a new `ApiErrorResponse`.
    #[must_use]
    pub const fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

/// Maps a domain error onto its HTTP status and error body.
///
/// Pure apart from the timestamp; the message passes through verbatim.
#[must_use]
pub fn domain_error_to_response(error: DomainError, uri: &Uri) -> ApiErrorResponse {
    let status = match &error {
        DomainError::InvalidInput(_) | DomainError::Conflict(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::ExternalApi(_) => StatusCode::BAD_GATEWAY,
        DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let details = format!("uri={}", uri.path());

    ApiErrorResponse::new(status, ApiError::new(error.to_string(), details))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn uri(path: &str) -> Uri {
        path.parse().unwrap()
    }

    #[rstest]
    #[case(
        DomainError::invalid_input("CardNumber cannot be null or empty"),
        StatusCode::BAD_REQUEST
    )]
    #[case(DomainError::conflict("Country already exists"), StatusCode::BAD_REQUEST)]
    #[case(DomainError::not_found("No card costs found"), StatusCode::NOT_FOUND)]
    #[case(
        DomainError::external_api("Invalid response from external API."),
        StatusCode::BAD_GATEWAY
    )]
    #[case(DomainError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn maps_each_kind_to_its_status(#[case] error: DomainError, #[case] expected: StatusCode) {
        let response = domain_error_to_response(error, &uri("/card-costs"));
        assert_eq!(response.status, expected);
    }

    #[rstest]
    fn carries_the_message_verbatim_and_the_request_uri() {
        let response = domain_error_to_response(
            DomainError::not_found("Card Cost with Id: 42 do not exists!"),
            &uri("/card-costs/42"),
        );

        assert_eq!(response.error.message, "Card Cost with Id: 42 do not exists!");
        assert_eq!(response.error.details, "uri=/card-costs/42");
    }

    #[rstest]
    fn serializes_message_details_and_timestamp() {
        let error = ApiError::new("boom", "uri=/card-costs");

        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(json["message"], "boom");
        assert_eq!(json["details"], "uri=/card-costs");
        assert!(json["timestamp"].is_string());
    }
}
