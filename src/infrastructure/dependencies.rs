//! Dependency container for the card cost application.
//!
//! Wiring is explicit: the record store and the BIN lookup client are
//! constructed once at startup and passed into the application services via
//! constructors. No global state, no service locator.
//!
//! # Thread Safety
//!
//! All dependencies are `Arc`-wrapped and `Send + Sync`, so the container is
//! cheap to clone into every request handler as axum state.

use std::sync::Arc;

use crate::application::{CardCostService, PaymentCostResolver};

use super::bin_lookup::BinLookup;
use super::config::AppConfig;
use super::repository::CardCostRepository;

/// Application dependency container, used as axum router state.
#[derive(Clone)]
pub struct AppDependencies {
    config: AppConfig,
    card_costs: Arc<CardCostService>,
    payment_resolver: Arc<PaymentCostResolver>,
}

impl AppDependencies {
    /// Wires the application services from their infrastructure dependencies.
    #[must_use]
    pub fn new(
        config: AppConfig,
        repository: Arc<dyn CardCostRepository>,
        bin_lookup: Arc<dyn BinLookup>,
    ) -> Self {
        let card_costs = Arc::new(CardCostService::new(Arc::clone(&repository)));
        let payment_resolver = Arc::new(PaymentCostResolver::new(
            repository,
            bin_lookup,
            config.fallback_country.clone(),
        ));

        Self {
            config,
            card_costs,
            payment_resolver,
        }
    }

    /// Returns the application configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the CRUD service for card cost records.
    #[must_use]
    pub fn card_costs(&self) -> &CardCostService {
        &self.card_costs
    }

    /// Returns the payment cost resolution engine.
    #[must_use]
    pub fn payment_resolver(&self) -> &PaymentCostResolver {
        &self.payment_resolver
    }
}
