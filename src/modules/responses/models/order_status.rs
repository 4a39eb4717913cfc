use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{timezone, AppError, Money, Result, SignatureFields};
use crate::modules::gateways::Signer;
use crate::modules::responses::services::verify_message;

/// Status of an order at the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Completed,
    Cancelled,
    Expired,
    InProgress,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::Expired => "EXPIRED",
            OrderStatus::InProgress => "IN_PROGRESS",
        }
    }

    /// No further status changes will follow
    pub fn is_final(&self) -> bool {
        !matches!(self, OrderStatus::InProgress)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "COMPLETED" => Ok(OrderStatus::Completed),
            "CANCELLED" => Ok(OrderStatus::Cancelled),
            "EXPIRED" => Ok(OrderStatus::Expired),
            "IN_PROGRESS" => Ok(OrderStatus::InProgress),
            _ => Err(AppError::invalid_response(format!("Unknown order status: {}", s))),
        }
    }
}

/// One order in a merchant order status response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantOrderResult {
    pub merchant_order_id: String,
    pub omnikassa_order_id: String,
    pub poi_id: u64,
    pub order_status: OrderStatus,
    /// Kept as received, it is part of the signature
    pub order_status_date_time: String,
    #[serde(default)]
    pub error_code: Option<String>,
    pub paid_amount: Money,
    pub total_amount: Money,
}

impl MerchantOrderResult {
    pub fn order_status_date_time(&self) -> Result<DateTime<FixedOffset>> {
        timezone::parse_iso8601(&self.order_status_date_time)
    }
}

impl SignatureFields for MerchantOrderResult {
    fn append_signature_fields(&self, fields: &mut Vec<String>) {
        fields.push(self.merchant_order_id.clone());
        fields.push(self.omnikassa_order_id.clone());
        fields.push(self.poi_id.to_string());
        fields.push(self.order_status.to_string());
        fields.push(self.order_status_date_time.clone());
        fields.push(self.error_code.clone().unwrap_or_default());
        self.paid_amount.append_signature_fields(fields);
        self.total_amount.append_signature_fields(fields);
    }
}

/// Batch of order status changes fetched after a notification
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantOrderStatusResponse {
    pub signature: String,
    pub more_order_results_available: bool,
    #[serde(default)]
    pub order_results: Vec<MerchantOrderResult>,
}

impl MerchantOrderStatusResponse {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn verify(&self, signer: &dyn Signer) -> Result<()> {
        verify_message(signer, self, &self.signature, "merchant order status response")
    }
}

impl SignatureFields for MerchantOrderStatusResponse {
    fn append_signature_fields(&self, fields: &mut Vec<String>) {
        fields.push(self.more_order_results_available.to_string());

        for result in &self.order_results {
            result.append_signature_fields(fields);
        }
    }
}
