use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::core::{timezone, AppError, Result};

/// Answer to an order announcement
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAnnounceResponse {
    /// Payment page the consumer is sent to
    pub redirect_url: String,
    pub omnikassa_order_id: Option<String>,
}

impl OrderAnnounceResponse {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Access token obtained with the merchant's refresh token
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    pub token: String,
    pub valid_until: String,
    pub duration_in_millis: u64,
}

impl AccessTokenResponse {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn valid_until(&self) -> Result<DateTime<FixedOffset>> {
        timezone::parse_iso8601(&self.valid_until)
    }

    pub fn is_valid_at(&self, now: DateTime<FixedOffset>) -> Result<bool> {
        Ok(now < self.valid_until()?)
    }
}

/// Error body returned by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error_code: u32,
    pub error_message: Option<String>,
    pub consumer_message: Option<String>,
}

impl ErrorResponse {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<ErrorResponse> for AppError {
    fn from(response: ErrorResponse) -> Self {
        let message = response
            .error_message
            .or(response.consumer_message)
            .unwrap_or_else(|| "no message".to_string());

        AppError::gateway(format!("{} ({})", message, response.error_code))
    }
}
