use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::core::{timezone, Result, SignatureFields};
use crate::modules::gateways::Signer;
use crate::modules::responses::services::verify_message;

/// Webhook telling the merchant that order statuses changed.
///
/// The `authentication` token is used to fetch the changed orders and is
/// only usable until `expiry`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub authentication: String,
    /// Kept as received, it is part of the signature
    pub expiry: String,
    pub event_name: String,
    pub poi_id: u64,
    pub signature: String,
}

impl Notification {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn expiry(&self) -> Result<DateTime<FixedOffset>> {
        timezone::parse_iso8601(&self.expiry)
    }

    pub fn is_expired_at(&self, now: DateTime<FixedOffset>) -> Result<bool> {
        Ok(self.expiry()? <= now)
    }

    pub fn verify(&self, signer: &dyn Signer) -> Result<()> {
        verify_message(signer, self, &self.signature, "notification")
    }
}

impl SignatureFields for Notification {
    fn append_signature_fields(&self, fields: &mut Vec<String>) {
        fields.push(self.authentication.clone());
        fields.push(self.expiry.clone());
        fields.push(self.event_name.clone());
        fields.push(self.poi_id.to_string());
    }
}
