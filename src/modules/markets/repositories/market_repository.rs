// MarketRepository: storage seam for market records
//
// The reference server keeps all state in memory; every mutation happens
// under a single write lock so a read immediately following a mutation
// always observes it. Cnpj uniqueness is enforced inside that same
// critical section: two parallel identical inserts cannot both observe
// the cnpj as absent, so at most one of them succeeds.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::core::{AppError, Result};
use crate::modules::markets::models::{Market, MarketPayload};

/// Storage operations backing the /mercado collection
#[async_trait]
pub trait MarketRepository: Send + Sync {
    /// All markets, ordered by id
    async fn list(&self) -> Vec<Market>;

    /// Market by id, if present
    async fn find_by_id(&self, id: i64) -> Option<Market>;

    /// Market owning the given cnpj, if any
    async fn find_by_cnpj(&self, cnpj: &str) -> Option<Market>;

    /// Insert a new market, assigning the next id. The cnpj uniqueness
    /// check runs atomically with the insert; a taken cnpj is a Conflict.
    async fn insert(&self, payload: MarketPayload) -> Result<Market>;

    /// Replace the stored fields of an existing market, keeping its id.
    /// An unknown id is NotFound and wins over any cnpj conflict the
    /// payload would cause; a cnpj owned by another record is a Conflict.
    async fn update(&self, id: i64, payload: MarketPayload) -> Result<Market>;

    /// Remove a market. Returns `false` when the id is unknown.
    async fn remove(&self, id: i64) -> bool;
}

/// In-memory repository used by the reference server
pub struct InMemoryMarketRepository {
    records: RwLock<HashMap<i64, Market>>,
    next_id: AtomicI64,
}

impl InMemoryMarketRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryMarketRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketRepository for InMemoryMarketRepository {
    async fn list(&self) -> Vec<Market> {
        let records = self.records.read().await;
        let mut markets: Vec<Market> = records.values().cloned().collect();
        markets.sort_by_key(|m| m.id);
        markets
    }

    async fn find_by_id(&self, id: i64) -> Option<Market> {
        self.records.read().await.get(&id).cloned()
    }

    async fn find_by_cnpj(&self, cnpj: &str) -> Option<Market> {
        self.records
            .read()
            .await
            .values()
            .find(|m| m.cnpj == cnpj)
            .cloned()
    }

    async fn insert(&self, payload: MarketPayload) -> Result<Market> {
        let mut records = self.records.write().await;
        if let Some(owner) = records.values().find(|m| m.cnpj == payload.cnpj) {
            return Err(AppError::conflict(format!(
                "Market with cnpj '{}' already exists (id {})",
                payload.cnpj, owner.id
            )));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let market = payload.into_market(id);
        records.insert(id, market.clone());
        Ok(market)
    }

    async fn update(&self, id: i64, payload: MarketPayload) -> Result<Market> {
        let mut records = self.records.write().await;
        if !records.contains_key(&id) {
            return Err(AppError::not_found(format!("Market {}", id)));
        }
        if let Some(owner) = records.values().find(|m| m.cnpj == payload.cnpj) {
            if owner.id != id {
                return Err(AppError::conflict(format!(
                    "Market with cnpj '{}' already exists (id {})",
                    payload.cnpj, owner.id
                )));
            }
        }
        let market = payload.into_market(id);
        records.insert(id, market.clone());
        Ok(market)
    }

    async fn remove(&self, id: i64) -> bool {
        self.records.write().await.remove(&id).is_some()
    }
}
