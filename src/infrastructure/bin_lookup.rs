//! External BIN lookup client.
//!
//! Queries the BIN service at `<base>/<6-char-bin>` and extracts the issuing
//! country of the card. Only `country.alpha2` is consumed from the response;
//! the upstream also sends scheme, brand and bank details, which are accepted
//! and ignored.
//!
//! Every payment-cost resolution performs exactly one external call: no
//! retry, no caching, and no timeout beyond the client library default.
//!
//! Failures are classified so the resolution engine can translate each kind
//! into its own user-facing message:
//!
//! - [`BinLookupError::Connection`] — transport unreachable or timed out
//! - [`BinLookupError::UpstreamStatus`] — service answered with a non-success
//!   status
//! - [`BinLookupError::InvalidResponse`] — success status but an empty body
//! - [`BinLookupError::Protocol`] — any other client-level failure, including
//!   bodies that fail to decode

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Number of leading card number characters forming the BIN.
pub const BIN_LENGTH: usize = 6;

/// Errors communicating with the BIN lookup service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BinLookupError {
    /// Failed to reach the service at the transport level.
    #[error("connection failure: {0}")]
    Connection(String),

    /// The service answered with a non-success HTTP status.
    #[error("upstream returned status {0}")]
    UpstreamStatus(StatusCode),

    /// The service answered successfully but with an empty body.
    #[error("empty response body")]
    InvalidResponse,

    /// Any other failure while talking to the service.
    #[error("protocol error: {0}")]
    Protocol(String),
}

/// Issuing-country fragment of the BIN lookup response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryInfo {
    /// ISO 3166-1 alpha-2 code. Absent when the upstream knows the BIN but
    /// not the country.
    pub alpha2: Option<String>,
}

/// BIN lookup response body.
///
/// # Example JSON (fields beyond `country` are ignored)
///
/// ```json
/// {
///     "scheme": "visa",
///     "type": "debit",
///     "country": { "numeric": "208", "alpha2": "DK", "name": "Denmark" },
///     "bank": { "name": "Jyske Bank" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CardInfoResponse {
    /// Issuing country, when the upstream knows it.
    pub country: Option<CountryInfo>,
}

/// Trait for BIN lookup implementations.
///
/// The production implementation is [`HttpBinLookupClient`]; tests substitute
/// doubles that return canned results.
#[async_trait]
pub trait BinLookup: Send + Sync {
    /// Looks up card information for a 6-character BIN prefix.
    ///
    /// # Errors
    ///
    /// Returns a classified [`BinLookupError`] on any communication failure.
    async fn lookup(&self, bin: &str) -> Result<CardInfoResponse, BinLookupError>;
}

/// HTTP implementation of [`BinLookup`] over reqwest.
#[derive(Debug, Clone)]
pub struct HttpBinLookupClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBinLookupClient {
    /// Creates a client against the given base URL (no trailing slash).
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds the lookup URL for a BIN.
    fn lookup_url(&self, bin: &str) -> String {
        format!("{}/{bin}", self.base_url)
    }
}

#[async_trait]
impl BinLookup for HttpBinLookupClient {
    async fn lookup(&self, bin: &str) -> Result<CardInfoResponse, BinLookupError> {
        let url = self.lookup_url(bin);

        tracing::debug!(bin, %url, "sending BIN lookup request");

        let response = self.client.get(&url).send().await.map_err(|error| {
            if error.is_connect() || error.is_timeout() {
                BinLookupError::Connection(error.to_string())
            } else {
                BinLookupError::Protocol(error.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BinLookupError::UpstreamStatus(status));
        }

        let body = response
            .text()
            .await
            .map_err(|error| BinLookupError::Protocol(error.to_string()))?;

        if body.trim().is_empty() {
            return Err(BinLookupError::InvalidResponse);
        }

        serde_json::from_str(&body).map_err(|error| BinLookupError::Protocol(error.to_string()))
    }
}
