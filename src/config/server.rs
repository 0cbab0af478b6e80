use crate::core::{AppError, Result};
use std::env;

/// Server configuration for the reference HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    /// Sustained rate-limit quota applied by the middleware
    pub rate_limit_per_minute: u32,
    /// Burst capacity before 429s start
    pub rate_limit_burst: u32,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid SERVER_PORT".to_string()))?;
        let rate_limit_per_minute = env::var("RATE_LIMIT_PER_MINUTE")
            .unwrap_or_else(|_| "300".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid RATE_LIMIT_PER_MINUTE".to_string()))?;
        let rate_limit_burst = env::var("RATE_LIMIT_BURST")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid RATE_LIMIT_BURST".to_string()))?;

        Ok(Self {
            host,
            port,
            workers: num_cpus::get() * 2, // 2x CPU cores for I/O-bound workload
            rate_limit_per_minute,
            rate_limit_burst,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
