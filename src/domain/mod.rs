//! Domain layer: the `CardCost` record and the error taxonomy.
//!
//! This layer is pure data — no I/O, no framework types. Everything above it
//! (application services, infrastructure, API handlers) speaks in these
//! types.

mod card_cost;
mod errors;

pub use card_cost::CardCost;
pub use errors::{DomainError, DomainResult};
