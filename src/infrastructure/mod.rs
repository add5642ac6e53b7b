//! Infrastructure layer for the card cost application.
//!
//! - **Configuration**: settings loaded from environment variables
//! - **Record store**: `CardCostRepository` trait plus the in-memory
//!   implementation with compare-and-swap-on-version updates
//! - **BIN lookup**: trait-abstracted HTTP client for the external service
//! - **Dependencies**: explicit constructor-wired container shared as router
//!   state
//!
//! External collaborators are abstracted behind traits so the application
//! layer stays testable without a network or a database.

mod bin_lookup;
mod config;
mod dependencies;
mod in_memory;
mod repository;

pub use bin_lookup::{
    BIN_LENGTH, BinLookup, BinLookupError, CardInfoResponse, CountryInfo, HttpBinLookupClient,
};
pub use config::{AppConfig, ConfigError, DEFAULT_BINLIST_URL, DEFAULT_FALLBACK_COUNTRY};
pub use dependencies::AppDependencies;
pub use in_memory::InMemoryCardCostRepository;
pub use repository::{CardCostRepository, RepositoryError, RepositoryResult};
