use std::collections::HashMap;

use super::order_status::OrderStatus;
use crate::core::{AppError, Result, SignatureFields};
use crate::modules::gateways::Signer;
use crate::modules::responses::services::verify_message;

/// Query parameters on the merchant return URL after a payment attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnParameters {
    pub order_id: String,
    pub status: OrderStatus,
    pub signature: String,
}

impl ReturnParameters {
    /// Read `order_id`, `status` and `signature` from the query string pairs
    pub fn from_query(query: &HashMap<String, String>) -> Result<Self> {
        let field = |name: &str| {
            query
                .get(name)
                .cloned()
                .ok_or_else(|| AppError::invalid_response(format!("Missing {} in return URL", name)))
        };

        Ok(Self {
            order_id: field("order_id")?,
            status: field("status")?.parse()?,
            signature: field("signature")?,
        })
    }

    pub fn verify(&self, signer: &dyn Signer) -> Result<()> {
        verify_message(signer, self, &self.signature, "return parameters")
    }
}

impl SignatureFields for ReturnParameters {
    fn append_signature_fields(&self, fields: &mut Vec<String>) {
        fields.push(self.order_id.clone());
        fields.push(self.status.to_string());
    }
}
