//! HTTP handlers for the card cost API.

pub mod card_costs;
pub mod payment;
