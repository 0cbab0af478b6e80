use crate::core::{AppError, Result};
use std::env;
use std::time::Duration;

/// Smallest and largest acceptable per-request time budget, in seconds.
/// Suites run with budgets anywhere inside this window. Timeout
/// simulation passes sub-second budgets to the client directly and
/// never goes through this config.
pub const MIN_BUDGET_SECS: u64 = 5;
pub const MAX_BUDGET_SECS: u64 = 15;

/// Batch-size window for rate-limit probing.
pub const MIN_BATCH_SIZE: usize = 50;
pub const MAX_BATCH_SIZE: usize = 100;

/// Configuration for the contract verifier client
#[derive(Debug, Clone)]
pub struct VerifierConfig {
    /// Base URL of the target service (no trailing slash)
    pub base_url: String,
    /// Per-request time budget; exceeding it fails the request, no retry
    pub time_budget: Duration,
    /// Number of identical concurrent requests in a rate-limit probe
    pub batch_size: usize,
}

impl VerifierConfig {
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("MERCADO_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());
        let budget_secs: u64 = env::var("MERCADO_TIME_BUDGET_SECS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|_| {
                AppError::Configuration("Invalid MERCADO_TIME_BUDGET_SECS".to_string())
            })?;
        let batch_size: usize = env::var("MERCADO_BATCH_SIZE")
            .unwrap_or_else(|_| "60".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid MERCADO_BATCH_SIZE".to_string()))?;

        let config = Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            time_budget: Duration::from_secs(budget_secs),
            batch_size,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let secs = self.time_budget.as_secs();
        if !(MIN_BUDGET_SECS..=MAX_BUDGET_SECS).contains(&secs) {
            return Err(AppError::Configuration(format!(
                "Time budget must be between {} and {} seconds, got {}",
                MIN_BUDGET_SECS, MAX_BUDGET_SECS, secs
            )));
        }
        if !(MIN_BATCH_SIZE..=MAX_BATCH_SIZE).contains(&self.batch_size) {
            return Err(AppError::Configuration(format!(
                "Batch size must be between {} and {}, got {}",
                MIN_BATCH_SIZE, MAX_BATCH_SIZE, self.batch_size
            )));
        }
        Ok(())
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            time_budget: Duration::from_secs(5),
            batch_size: 60,
        }
    }
}
