//! End-to-end tests for the payment cost resolution flow, combining the CRUD
//! service and the resolution engine over one shared store.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rust_decimal::Decimal;

use card_cost_api::application::{CardCostService, PaymentCostResolver};
use card_cost_api::domain::DomainError;
use card_cost_api::infrastructure::{
    BinLookup, BinLookupError, CardInfoResponse, CountryInfo, InMemoryCardCostRepository,
};

/// Lookup double that counts calls, to pin the one-call-per-resolution
/// contract.
struct CountingBinLookup {
    alpha2: String,
    calls: AtomicUsize,
}

impl CountingBinLookup {
    fn resolving(alpha2: &str) -> Self {
        Self {
            alpha2: alpha2.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BinLookup for CountingBinLookup {
    async fn lookup(&self, _bin: &str) -> Result<CardInfoResponse, BinLookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(CardInfoResponse {
            country: Some(CountryInfo {
                alpha2: Some(self.alpha2.clone()),
            }),
        })
    }
}

struct Fixture {
    service: CardCostService,
    resolver: PaymentCostResolver,
    lookup: Arc<CountingBinLookup>,
}

fn fixture(alpha2: &str) -> Fixture {
    let repository = Arc::new(InMemoryCardCostRepository::new());
    let lookup = Arc::new(CountingBinLookup::resolving(alpha2));

    let repository_dyn: Arc<dyn card_cost_api::infrastructure::CardCostRepository> =
        Arc::<InMemoryCardCostRepository>::clone(&repository);
    let lookup_dyn: Arc<dyn BinLookup> = Arc::<CountingBinLookup>::clone(&lookup);

    Fixture {
        service: CardCostService::new(repository_dyn),
        resolver: PaymentCostResolver::new(repository, lookup_dyn, "OTHERS".to_string()),
        lookup,
    }
}

fn cost(value: i64, scale: u32) -> Decimal {
    Decimal::new(value, scale)
}

#[tokio::test]
async fn created_record_is_resolvable_by_card_number() {
    let fixture = fixture("US");
    fixture.service.create("us", cost(50, 1)).await.unwrap();

    let resolved = fixture.resolver.resolve("4532756279624064").await.unwrap();

    assert_eq!(resolved.country, "US");
    assert_eq!(resolved.cost, cost(50, 1));
}

#[tokio::test]
async fn dedicated_record_wins_over_fallback_bucket() {
    let fixture = fixture("US");
    fixture.service.create("OTHERS", cost(20, 1)).await.unwrap();
    fixture.service.create("US", cost(50, 1)).await.unwrap();

    let resolved = fixture.resolver.resolve("4532756279624064").await.unwrap();

    assert_eq!(resolved.country, "US");
    assert_eq!(resolved.cost, cost(50, 1));
}

#[tokio::test]
async fn updating_a_record_changes_subsequent_resolutions() {
    let fixture = fixture("US");
    let created = fixture.service.create("US", cost(50, 1)).await.unwrap();

    fixture
        .service
        .update(created.id, "US", cost(90, 1))
        .await
        .unwrap();
    let resolved = fixture.resolver.resolve("4532756279624064").await.unwrap();

    assert_eq!(resolved.cost, cost(90, 1));
    assert_eq!(resolved.version, 1);
}

#[tokio::test]
async fn deleting_the_last_matching_record_makes_resolution_not_found() {
    let fixture = fixture("ZZ");
    let created = fixture.service.create("OTHERS", cost(20, 1)).await.unwrap();

    assert!(fixture.resolver.resolve("4532756279624064").await.is_ok());

    fixture.service.delete(created.id).await.unwrap();
    let error = fixture.resolver.resolve("4532756279624064").await.unwrap_err();

    assert_eq!(
        error,
        DomainError::not_found("Card Cost with country: ZZ do not exists!")
    );
}

#[tokio::test]
async fn each_resolution_performs_exactly_one_lookup() {
    let fixture = fixture("ZZ");
    fixture.service.create("OTHERS", cost(20, 1)).await.unwrap();

    fixture.resolver.resolve("4532756279624064").await.unwrap();
    fixture.resolver.resolve("4532756279624064").await.unwrap();

    // Two resolutions, two calls: no caching, no retries, and the fallback
    // path never triggers a second lookup.
    assert_eq!(fixture.lookup.call_count(), 2);
}

#[tokio::test]
async fn invalid_card_number_short_circuits_before_the_lookup() {
    let fixture = fixture("US");

    let error = fixture.resolver.resolve("  ").await.unwrap_err();

    assert_eq!(
        error,
        DomainError::invalid_input("CardNumber cannot be null or empty")
    );
    assert_eq!(fixture.lookup.call_count(), 0);
}
