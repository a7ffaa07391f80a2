use crate::core::{AppError, Result};
use std::env;

pub mod pricing;
pub mod server;

pub use pricing::PricingConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub pricing: PricingConfig,
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

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            server: ServerConfig::from_env()?,
            pricing: PricingConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "Server workers must be greater than 0".to_string(),
            ));
        }

        if self.server.json_payload_limit == 0 {
            return Err(AppError::Configuration(
                "JSON payload limit must be greater than 0".to_string(),
            ));
        }

        self.pricing.validate()
    }

    /// Default tracing filter when RUST_LOG is unset
    pub fn log_filter(&self) -> String {
        format!("quoteflow={},actix_web=info", self.app.log_level)
    }
}
