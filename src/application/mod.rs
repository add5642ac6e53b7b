//! Application layer: validation, CRUD orchestration and the payment cost
//! resolution engine.
//!
//! Services here depend only on the domain types and the infrastructure
//! traits; concrete stores and HTTP clients are injected at construction.

mod card_costs;
mod payment;
pub mod validation;

pub use card_costs::CardCostService;
pub use payment::PaymentCostResolver;
