//! Domain error taxonomy for the card cost service.
//!
//! Every fallible operation in the application layer returns
//! [`DomainResult`], and each [`DomainError`] kind maps to exactly one HTTP
//! status at the API boundary. Errors are raised at the point of detection
//! and propagate unmodified via `Result` and `?`; nothing is retried
//! internally.
//!
//! # Error Mapping
//!
//! | Kind | HTTP Status |
//! |------|-------------|
//! | `InvalidInput` | 400 |
//! | `NotFound` | 404 |
//! | `Conflict` | 400 |
//! | `ExternalApi` | 502 |
//! | `Internal` | 500 |
//!
//! `Conflict` maps to 400 rather than 409: duplicate-country creation has
//! always been reported as a bad request, and optimistic-locking losers share
//! the kind.

use thiserror::Error;

/// Result alias used throughout the application layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Errors that can occur during card cost operations.
///
/// Each variant carries the complete user-facing message; the API boundary
/// serializes it verbatim into the error body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The request payload failed validation.
    #[error("{0}")]
    InvalidInput(String),

    /// The requested record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The operation conflicts with existing state (duplicate country or a
    /// lost optimistic-locking race).
    #[error("{0}")]
    Conflict(String),

    /// Communication with the external BIN lookup service failed.
    #[error("{0}")]
    ExternalApi(String),

    /// An unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}

impl DomainError {
    /// Creates an `InvalidInput` error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates a `NotFound` error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Creates a `Conflict` error.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates an `ExternalApi` error.
    #[must_use]
    pub fn external_api(message: impl Into<String>) -> Self {
        Self::ExternalApi(message.into())
    }

    /// Creates an `Internal` error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn display_returns_message_verbatim() {
        let error = DomainError::not_found("Card Cost with Id: 42 do not exists!");
        assert_eq!(format!("{error}"), "Card Cost with Id: 42 do not exists!");
    }

    #[rstest]
    #[case(DomainError::invalid_input("a"), DomainError::InvalidInput("a".to_string()))]
    #[case(DomainError::not_found("b"), DomainError::NotFound("b".to_string()))]
    #[case(DomainError::conflict("c"), DomainError::Conflict("c".to_string()))]
    #[case(DomainError::external_api("d"), DomainError::ExternalApi("d".to_string()))]
    #[case(DomainError::internal("e"), DomainError::Internal("e".to_string()))]
    fn constructors_produce_expected_variants(
        #[case] constructed: DomainError,
        #[case] expected: DomainError,
    ) {
        assert_eq!(constructed, expected);
    }

    #[rstest]
    fn errors_with_different_kinds_are_not_equal() {
        assert_ne!(
            DomainError::invalid_input("same"),
            DomainError::conflict("same")
        );
    }

    #[rstest]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}

        let error = DomainError::internal("boom");
        assert_error(&error);
    }
}
