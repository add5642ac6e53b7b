//! In-memory `CardCost` record store.
//!
//! Backed by a `HashMap` behind an `RwLock`: reads share the lock, writes
//! take it exclusively, so conflicting writes to the same record are
//! serialized while reads proceed concurrently. Ids come from an atomic
//! counter starting at 1.
//!
//! Lock acquisitions never cross an `.await`, so the std lock is safe inside
//! async methods.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::CardCost;

use super::repository::{CardCostRepository, RepositoryError, RepositoryResult};

/// In-memory implementation of [`CardCostRepository`].
#[derive(Debug)]
pub struct InMemoryCardCostRepository {
    records: RwLock<HashMap<u64, CardCost>>,
    next_id: AtomicU64,
}

impl Default for InMemoryCardCostRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCardCostRepository {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

/// A poisoned lock means another writer panicked mid-write; surface it as a
/// storage failure instead of panicking the whole request.
fn poisoned<T>(_: T) -> RepositoryError {
    RepositoryError::Storage("record store lock poisoned".to_string())
}

#[async_trait]
impl CardCostRepository for InMemoryCardCostRepository {
    async fn insert(&self, country: &str, cost: Decimal) -> RepositoryResult<CardCost> {
        let mut records = self.records.write().map_err(poisoned)?;

        if records.values().any(|record| record.country == country) {
            return Err(RepositoryError::DuplicateCountry(country.to_string()));
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let record = CardCost::new(id, country.to_string(), cost);
        records.insert(id, record.clone());

        Ok(record)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<CardCost>> {
        let records = self.records.read().map_err(poisoned)?;

        let mut all: Vec<CardCost> = records.values().cloned().collect();
        all.sort_by_key(|record| record.id);

        Ok(all)
    }

    async fn find_by_id(&self, id: u64) -> RepositoryResult<Option<CardCost>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.get(&id).cloned())
    }

    async fn find_by_country(&self, country: &str) -> RepositoryResult<Option<CardCost>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records
            .values()
            .find(|record| record.country == country)
            .cloned())
    }

    async fn update(
        &self,
        id: u64,
        country: &str,
        cost: Decimal,
        expected_version: u64,
    ) -> RepositoryResult<CardCost> {
        let mut records = self.records.write().map_err(poisoned)?;

        let record = records
            .get_mut(&id)
            .ok_or(RepositoryError::RecordMissing(id))?;

        if record.version != expected_version {
            return Err(RepositoryError::VersionConflict {
                id,
                expected: expected_version,
                actual: record.version,
            });
        }

        record.country = country.to_string();
        record.cost = cost;
        record.version += 1;

        Ok(record.clone())
    }

    async fn delete(&self, id: u64) -> RepositoryResult<()> {
        let mut records = self.records.write().map_err(poisoned)?;

        records
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::RecordMissing(id))
    }
}
