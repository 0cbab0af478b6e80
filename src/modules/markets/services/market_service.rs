// MarketService: contract rules for the /mercado collection
//
// Orchestrates payload validation, cnpj uniqueness, and store access.
// Controllers translate the AppError variants into the wire statuses.

use std::sync::Arc;

use crate::core::{AppError, Result};
use crate::modules::markets::models::{Market, MarketPayload};
use crate::modules::markets::repositories::MarketRepository;

pub struct MarketService {
    repository: Arc<dyn MarketRepository>,
}

impl MarketService {
    pub fn new(repository: Arc<dyn MarketRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_markets(&self) -> Vec<Market> {
        self.repository.list().await
    }

    /// Create a market. Duplicate cnpj is a conflict, never a silent
    /// success; the repository decides ownership atomically with the
    /// insert, so parallel identical creates admit exactly one winner.
    pub async fn create_market(&self, payload: MarketPayload) -> Result<Market> {
        payload.validate()?;

        let market = self.repository.insert(payload).await?;
        tracing::info!(id = market.id, cnpj = %market.cnpj, "market created");
        Ok(market)
    }

    pub async fn get_market(&self, id: i64) -> Result<Market> {
        self.repository
            .find_by_id(id)
            .await
            .ok_or_else(|| AppError::not_found(format!("Market {}", id)))
    }

    /// Update a market in place. The id never changes; moving to a cnpj
    /// owned by another record is rejected, keeping one's own is allowed.
    pub async fn update_market(&self, id: i64, payload: MarketPayload) -> Result<Market> {
        payload.validate()?;

        let updated = self.repository.update(id, payload).await?;
        tracing::info!(id = updated.id, "market updated");
        Ok(updated)
    }

    pub async fn delete_market(&self, id: i64) -> Result<()> {
        if !self.repository.remove(id).await {
            return Err(AppError::not_found(format!("Market {}", id)));
        }
        tracing::info!(id, "market deleted");
        Ok(())
    }
}
