//! Payment cost resolution engine.
//!
//! Resolves a payment card number to the transaction cost of its issuing
//! country. Single pass through a fixed sequence of states:
//!
//! ```text
//! Validated → BinExtracted → LookedUp → CountryResolved → CostResolved
//! ```
//!
//! with an early exit into exactly one error kind at every step:
//!
//! 1. Validate the card number shape ([`InvalidInput`]).
//! 2. Extract the BIN (first 6 characters; validation guarantees at least 8).
//! 3. Call the external BIN lookup ([`ExternalApi`] on any transport,
//!    upstream-status, protocol or empty-body failure).
//! 4. A structurally successful response with a null or empty country code is
//!    an [`InvalidInput`] — the lookup worked, the card number did not.
//! 5. Map the country to a stored cost record, falling back to the sentinel
//!    bucket (default "OTHERS"); if neither exists, [`NotFound`] naming the
//!    *resolved* country (not the fallback bucket — load-bearing,
//!    user-visible behavior).
//!
//! Exactly one external call per resolution: no retry, no caching.
//!
//! [`InvalidInput`]: DomainError::InvalidInput
//! [`ExternalApi`]: DomainError::ExternalApi
//! [`NotFound`]: DomainError::NotFound

use std::sync::Arc;

use crate::domain::{CardCost, DomainError, DomainResult};
use crate::infrastructure::{BIN_LENGTH, BinLookup, BinLookupError, CardCostRepository};

use super::validation::{mask_card_number, validate_payment_request};

/// The payment cost resolution engine.
///
/// Dependencies are passed in at construction; the engine holds no global
/// state and performs no wiring of its own.
pub struct PaymentCostResolver {
    repository: Arc<dyn CardCostRepository>,
    bin_lookup: Arc<dyn BinLookup>,
    fallback_country: String,
}

impl PaymentCostResolver {
    /// Creates the engine over a record store and a BIN lookup client.
    ///
    /// `fallback_country` is the sentinel bucket key queried when a resolved
    /// country has no dedicated record.
    #[must_use]
    pub fn new(
        repository: Arc<dyn CardCostRepository>,
        bin_lookup: Arc<dyn BinLookup>,
        fallback_country: String,
    ) -> Self {
        Self {
            repository,
            bin_lookup,
            fallback_country,
        }
    }

    /// Resolves a card number to its issuing country's cost record.
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidInput`] for a malformed card number, or when
    ///   the lookup succeeded but yielded no usable country code
    /// - [`DomainError::ExternalApi`] for any failure communicating with the
    ///   BIN service
    /// - [`DomainError::NotFound`] when neither the resolved country nor the
    ///   fallback bucket has a cost record
    pub async fn resolve(&self, card_number: &str) -> DomainResult<CardCost> {
        validate_payment_request(card_number)?;

        let bin: String = card_number.chars().take(BIN_LENGTH).collect();

        tracing::info!(
            card_number = %mask_card_number(card_number),
            "resolving payment card cost"
        );

        let card_info = self
            .bin_lookup
            .lookup(&bin)
            .await
            .map_err(lookup_error_to_domain)?;

        let Some(country) = card_info.country else {
            tracing::error!(%bin, "BIN lookup response carried no country object");
            return Err(DomainError::external_api("Invalid response from external API."));
        };

        let country_code = match country.alpha2 {
            Some(code) if !code.is_empty() => code,
            _ => {
                tracing::error!(%bin, "BIN lookup resolved a null or empty country code");
                return Err(DomainError::invalid_input(
                    "Country code is null or empty. Cause card_number is invalid.",
                ));
            }
        };

        let record = self
            .repository
            .find_by_country(&country_code)
            .await
            .map_err(|error| DomainError::internal(error.to_string()))?;

        let record = match record {
            Some(record) => Some(record),
            None => self
                .repository
                .find_by_country(&self.fallback_country)
                .await
                .map_err(|error| DomainError::internal(error.to_string()))?,
        };

        // The message names the resolved country even though the fallback
        // bucket was the one queried last; callers rely on seeing the country
        // their card actually resolved to.
        record.ok_or_else(|| {
            DomainError::not_found(format!(
                "Card Cost with country: {country_code} do not exists!"
            ))
        })
    }
}

/// Maps a classified lookup failure to its user-facing message.
fn lookup_error_to_domain(error: BinLookupError) -> DomainError {
    tracing::error!(%error, "BIN lookup failed");

    match error {
        BinLookupError::Connection(_) => DomainError::external_api(
            "Failed to connect to external API. Please try again later.",
        ),
        BinLookupError::UpstreamStatus(status) => {
            DomainError::external_api(format!("External API returned an error: {status}"))
        }
        BinLookupError::InvalidResponse => {
            DomainError::external_api("Invalid response from external API.")
        }
        BinLookupError::Protocol(_) => DomainError::external_api(
            "An error occurred while communicating with the external API.",
        ),
    }
}
