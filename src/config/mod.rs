use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub policy: PolicyConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Business-rule knobs enforced by the eligibility validator
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Maximum number of simultaneously active coupons per merchant
    pub max_active_coupons: u32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            max_active_coupons: 5,
        }
    }
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
            policy: PolicyConfig {
                max_active_coupons: env::var("MAX_ACTIVE_COUPONS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid MAX_ACTIVE_COUPONS".to_string())
                    })?,
            },
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.policy.max_active_coupons == 0 {
            return Err(AppError::Configuration(
                "Max active coupons must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
