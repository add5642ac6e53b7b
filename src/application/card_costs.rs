//! CRUD service for `CardCost` records.
//!
//! Thin orchestration over the record store: validates and normalizes
//! payloads, owns the user-facing policy messages, and translates
//! infrastructure [`RepositoryError`]s into the domain taxonomy.
//!
//! Updates are optimistic: the service reads the current record, then issues
//! a compare-and-swap against the version it read. A concurrent writer that
//! got in between loses with a `Conflict`, never a silent overwrite.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::{CardCost, DomainError, DomainResult};
use crate::infrastructure::{CardCostRepository, RepositoryError};

use super::validation::validate_card_cost_payload;

/// Application service for card cost CRUD operations.
pub struct CardCostService {
    repository: Arc<dyn CardCostRepository>,
}

impl CardCostService {
    /// Creates the service over a record store.
    #[must_use]
    pub fn new(repository: Arc<dyn CardCostRepository>) -> Self {
        Self { repository }
    }

    /// Creates a new card cost record.
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidInput`] if the payload fails validation
    /// - [`DomainError::Conflict`] if the (normalized) country already exists
    pub async fn create(&self, country: &str, cost: Decimal) -> DomainResult<CardCost> {
        let country = validate_card_cost_payload(country, cost)?;

        self.repository
            .insert(&country, cost)
            .await
            .map_err(|error| match error {
                RepositoryError::DuplicateCountry(_) => {
                    DomainError::conflict("Country already exists")
                }
                other => DomainError::internal(other.to_string()),
            })
    }

    /// Returns all card cost records.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NotFound`] when the store is empty. An empty
    /// collection is surfaced as an error, never as an empty list.
    pub async fn get_all(&self) -> DomainResult<Vec<CardCost>> {
        let records = self
            .repository
            .find_all()
            .await
            .map_err(|error| DomainError::internal(error.to_string()))?;

        if records.is_empty() {
            tracing::error!("no card costs found in store");
            return Err(DomainError::not_found("No card costs found"));
        }

        Ok(records)
    }

    /// Returns the card cost record with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NotFound`] if no such record exists.
    pub async fn get_by_id(&self, id: u64) -> DomainResult<CardCost> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|error| DomainError::internal(error.to_string()))?
            .ok_or_else(|| DomainError::not_found(missing_record_message(id)))
    }

    /// Replaces a record's country and cost, bumping its version.
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidInput`] if the payload fails validation
    /// - [`DomainError::NotFound`] if no record exists with this id
    /// - [`DomainError::Conflict`] if a concurrent update won the race
    pub async fn update(&self, id: u64, country: &str, cost: Decimal) -> DomainResult<CardCost> {
        let country = validate_card_cost_payload(country, cost)?;

        let current = self.get_by_id(id).await?;

        self.repository
            .update(id, &country, cost, current.version)
            .await
            .map_err(|error| match error {
                RepositoryError::RecordMissing(_) => {
                    DomainError::not_found(missing_record_message(id))
                }
                RepositoryError::VersionConflict { .. } => DomainError::conflict(format!(
                    "Card Cost with Id: {id} was modified by another request"
                )),
                other => DomainError::internal(other.to_string()),
            })
    }

    /// Deletes the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NotFound`] if no such record exists.
    pub async fn delete(&self, id: u64) -> DomainResult<()> {
        self.repository
            .delete(id)
            .await
            .map_err(|error| match error {
                RepositoryError::RecordMissing(_) => {
                    DomainError::not_found(missing_record_message(id))
                }
                other => DomainError::internal(other.to_string()),
            })
    }
}

fn missing_record_message(id: u64) -> String {
    format!("Card Cost with Id: {id} do not exists!")
}
