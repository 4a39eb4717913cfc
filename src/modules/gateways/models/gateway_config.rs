use serde::{Deserialize, Serialize};
use std::fmt;

/// Gateway environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayEnvironment {
    #[default]
    Sandbox,
    Production,
}

impl GatewayEnvironment {
    /// REST API base URL for this environment
    pub fn base_url(&self) -> &'static str {
        match self {
            GatewayEnvironment::Sandbox => "https://betalen.rabobank.nl/omnikassa-api-sandbox/",
            GatewayEnvironment::Production => "https://betalen.rabobank.nl/omnikassa-api/",
        }
    }
}

impl fmt::Display for GatewayEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayEnvironment::Sandbox => write!(f, "sandbox"),
            GatewayEnvironment::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for GatewayEnvironment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sandbox" | "test" => Ok(GatewayEnvironment::Sandbox),
            "production" | "live" => Ok(GatewayEnvironment::Production),
            _ => Err(format!("Invalid gateway environment: {}", s)),
        }
    }
}
