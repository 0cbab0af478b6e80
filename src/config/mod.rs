use crate::core::Result;
use std::env;

pub mod server;
pub mod verifier;

pub use server::ServerConfig;
pub use verifier::VerifierConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub verifier: VerifierConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Ok(Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            server: ServerConfig::from_env()?,
            verifier: VerifierConfig::from_env()?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.rate_limit_per_minute == 0 {
            return Err(crate::core::AppError::Configuration(
                "Rate limit must be greater than 0".to_string(),
            ));
        }
        if self.server.rate_limit_burst == 0 {
            return Err(crate::core::AppError::Configuration(
                "Rate limit burst must be greater than 0".to_string(),
            ));
        }
        self.verifier.validate()
    }
}
