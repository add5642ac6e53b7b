//! Record store abstraction for `CardCost` persistence.
//!
//! The store is specified as a trait so the application layer never depends
//! on a concrete storage technology; the shipped implementation is the
//! in-memory store in [`crate::infrastructure::in_memory`], and tests
//! substitute their own doubles.
//!
//! # Design
//!
//! - **Trait-based abstraction**: object-safe (`Arc<dyn CardCostRepository>`)
//!   async trait, one implementation per storage backend
//! - **Optimistic locking**: updates are compare-and-swap against the stored
//!   `version`; a mismatch is a distinct error, never a silent overwrite
//! - **Infrastructure errors stay infrastructural**: the application layer
//!   translates [`RepositoryError`] into user-facing [`DomainError`]
//!   messages
//!
//! [`DomainError`]: crate::domain::DomainError

use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::CardCost;

/// Result alias for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors that can occur when interacting with the record store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// A record for this country already exists (uniqueness violation).
    #[error("country {0} already exists")]
    DuplicateCountry(String),

    /// No record exists with the given id.
    #[error("record {0} not found")]
    RecordMissing(u64),

    /// Optimistic locking conflict: the record was modified by another
    /// request between the read and the write.
    #[error("version conflict on record {id}: expected {expected}, actual {actual}")]
    VersionConflict {
        /// The id of the contested record.
        id: u64,
        /// The version the writer expected.
        expected: u64,
        /// The version actually found in the store.
        actual: u64,
    },

    /// A storage backend operation failed.
    #[error("storage error: {0}")]
    Storage(String),
}

/// Trait for `CardCost` record stores.
///
/// Implementations must be thread-safe (`Send + Sync`), allow unlimited
/// concurrent reads, and serialize conflicting writes to the same record.
#[async_trait]
pub trait CardCostRepository: Send + Sync {
    /// Persists a new record, assigning its id and starting at version 0.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateCountry`] if a record for this
    /// country is already present. The check and the insert happen atomically.
    async fn insert(&self, country: &str, cost: Decimal) -> RepositoryResult<CardCost>;

    /// Returns all records. An empty store yields an empty vector; surfacing
    /// emptiness as an error is application policy, not store policy.
    async fn find_all(&self) -> RepositoryResult<Vec<CardCost>>;

    /// Looks a record up by id.
    async fn find_by_id(&self, id: u64) -> RepositoryResult<Option<CardCost>>;

    /// Looks a record up by its (uppercased) country code.
    async fn find_by_country(&self, country: &str) -> RepositoryResult<Option<CardCost>>;

    /// Replaces a record's country and cost, compare-and-swap on version.
    ///
    /// On success both fields are replaced and the version is incremented.
    ///
    /// # Errors
    ///
    /// - [`RepositoryError::RecordMissing`] if the id does not exist
    /// - [`RepositoryError::VersionConflict`] if `expected_version` does not
    ///   match the stored version
    async fn update(
        &self,
        id: u64,
        country: &str,
        cost: Decimal,
        expected_version: u64,
    ) -> RepositoryResult<CardCost>;

    /// Removes a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::RecordMissing`] if the id does not exist.
    async fn delete(&self, id: u64) -> RepositoryResult<()>;
}
