//! API middleware: domain-to-HTTP error translation.

pub mod error_handler;

pub use error_handler::{ApiError, ApiErrorResponse, domain_error_to_response};
