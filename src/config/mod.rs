use serde::Deserialize;
use std::env;

use crate::core::{AppError, Result};
use crate::modules::gateways::{GatewayEnvironment, HmacSigner};

/// Main configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub gateway: GatewayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    pub environment: GatewayEnvironment,
    pub base_url: String,
    pub refresh_token: String,
    pub signing_key: String,
    pub order_id_prefix: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| AppError::configuration(format!("{} not set", key)))
        };

        let environment = match lookup("OMNIKASSA_ENVIRONMENT") {
            Some(value) => value.parse().map_err(AppError::configuration)?,
            None => GatewayEnvironment::default(),
        };

        let config = Config {
            app: AppConfig {
                log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            },
            gateway: GatewayConfig {
                environment,
                base_url: lookup("OMNIKASSA_BASE_URL")
                    .unwrap_or_else(|| environment.base_url().to_string()),
                refresh_token: required("OMNIKASSA_REFRESH_TOKEN")?,
                signing_key: required("OMNIKASSA_SIGNING_KEY")?,
                order_id_prefix: lookup("OMNIKASSA_ORDER_ID_PREFIX").filter(|p| !p.is_empty()),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.gateway.refresh_token.trim().is_empty() {
            return Err(AppError::configuration("Refresh token cannot be empty"));
        }

        if let Some(prefix) = &self.gateway.order_id_prefix {
            // Merchant order ids are at most 10 characters
            if prefix.chars().count() >= 10 {
                return Err(AppError::configuration(
                    "Order id prefix must leave room for the order id",
                ));
            }
        }

        self.signer().map(|_| ())
    }

    /// Signer keyed with the configured signing key
    pub fn signer(&self) -> Result<HmacSigner> {
        HmacSigner::new(&self.gateway.signing_key)
    }
}
