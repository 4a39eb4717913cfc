// Order announcement message.
//
// An order is created once per payment attempt, filled in by the integration
// code and serialized exactly once. Mandatory fields are set at construction
// and every setter validates before it mutates, so a rejected value leaves the
// order in its last valid state.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use super::address::Address;
use super::customer_information::CustomerInformation;
use super::order_item::OrderItems;
use super::payment_brand::{PaymentBrand, PaymentBrandForce};
use crate::core::traits::signature_fields::optional_field;
use crate::core::{timezone, Money, Result, SignatureFields};
use crate::modules::gateways::Signer;
use crate::modules::orders::services::DataHelper;

/// Order to announce at the gateway
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    timestamp: DateTime<FixedOffset>,
    merchant_order_id: String,
    description: Option<String>,
    order_items: Option<OrderItems>,
    amount: Money,
    shipping_detail: Option<Address>,
    billing_detail: Option<Address>,
    customer_information: Option<CustomerInformation>,
    language: Option<String>,
    merchant_return_url: String,
    payment_brand: Option<PaymentBrand>,
    payment_brand_force: Option<PaymentBrandForce>,
}

impl Order {
    /// Create an order stamped with the current time
    ///
    /// # Arguments
    /// * `merchant_order_id` - AN..max 10, unique per order
    /// * `amount` - Total order amount
    /// * `merchant_return_url` - AN..max 1024, where the consumer lands afterwards
    pub fn new(merchant_order_id: &str, amount: Money, merchant_return_url: &str) -> Result<Self> {
        DataHelper::validate_an(merchant_order_id, 10)?;
        DataHelper::validate_an(merchant_return_url, 1024)?;

        Ok(Self {
            timestamp: timezone::now(),
            merchant_order_id: merchant_order_id.to_string(),
            description: None,
            order_items: None,
            amount,
            shipping_detail: None,
            billing_detail: None,
            customer_information: None,
            language: None,
            merchant_return_url: merchant_return_url.to_string(),
            payment_brand: None,
            payment_brand_force: None,
        })
    }

    pub fn set_timestamp(&mut self, timestamp: DateTime<FixedOffset>) {
        self.timestamp = timestamp;
    }

    /// AN..max 10
    pub fn set_merchant_order_id(&mut self, merchant_order_id: &str) -> Result<()> {
        DataHelper::validate_an(merchant_order_id, 10)?;
        self.merchant_order_id = merchant_order_id.to_string();
        Ok(())
    }

    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
    }

    /// AN..max 1024
    pub fn set_merchant_return_url(&mut self, merchant_return_url: &str) -> Result<()> {
        DataHelper::validate_an(merchant_return_url, 1024)?;
        self.merchant_return_url = merchant_return_url.to_string();
        Ok(())
    }

    /// AN..max 35
    pub fn set_description(&mut self, description: Option<&str>) -> Result<()> {
        DataHelper::validate_null_or_an(description, 35)?;
        self.description = description.map(str::to_string);
        Ok(())
    }

    /// ISO 639-1 code, AN..max 2
    pub fn set_language(&mut self, language: Option<&str>) -> Result<()> {
        DataHelper::validate_null_or_an(language, 2)?;
        self.language = language.map(str::to_string);
        Ok(())
    }

    /// AN..max 50, one of the gateway's payment brands
    pub fn set_payment_brand(&mut self, payment_brand: Option<&str>) -> Result<()> {
        DataHelper::validate_null_or_an(payment_brand, 50)?;
        self.payment_brand = payment_brand.map(str::parse::<PaymentBrand>).transpose()?;
        Ok(())
    }

    /// AN..max 50, `FORCE_ONCE` or `FORCE_ALWAYS`; only meaningful together
    /// with a payment brand
    pub fn set_payment_brand_force(&mut self, payment_brand_force: Option<&str>) -> Result<()> {
        DataHelper::validate_null_or_an(payment_brand_force, 50)?;
        self.payment_brand_force = payment_brand_force
            .map(str::parse::<PaymentBrandForce>)
            .transpose()?;
        Ok(())
    }

    pub fn set_shipping_detail(&mut self, shipping_detail: Option<Address>) {
        self.shipping_detail = shipping_detail;
    }

    pub fn set_billing_detail(&mut self, billing_detail: Option<Address>) {
        self.billing_detail = billing_detail;
    }

    pub fn set_customer_information(&mut self, customer_information: Option<CustomerInformation>) {
        self.customer_information = customer_information;
    }

    /// Attach a fresh, empty item collection, replacing any previous one
    pub fn new_items(&mut self) -> &mut OrderItems {
        self.order_items.insert(OrderItems::new())
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    pub fn merchant_order_id(&self) -> &str {
        &self.merchant_order_id
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn order_items(&self) -> Option<&OrderItems> {
        self.order_items.as_ref()
    }

    pub fn payment_brand(&self) -> Option<PaymentBrand> {
        self.payment_brand
    }

    pub fn payment_brand_force(&self) -> Option<PaymentBrandForce> {
        self.payment_brand_force
    }

    /// Build the signed request payload
    pub fn to_request_object(&self, signer: &dyn Signer) -> OrderRequest {
        let signature = signer.sign(&self.signature_fields());

        tracing::debug!(
            merchant_order_id = %self.merchant_order_id,
            amount = self.amount.amount(),
            currency = %self.amount.currency(),
            "Signed order announcement"
        );

        OrderRequest {
            timestamp: timezone::format_iso8601(&self.timestamp),
            merchant_order_id: self.merchant_order_id.clone(),
            description: self.description.clone(),
            order_items: self.order_items.clone(),
            amount: self.amount,
            shipping_detail: self.shipping_detail.clone(),
            billing_detail: self.billing_detail.clone(),
            customer_information: self.customer_information.clone(),
            language: self.language.clone(),
            merchant_return_url: self.merchant_return_url.clone(),
            payment_brand: self.payment_brand,
            payment_brand_force: self.payment_brand_force,
            signature,
        }
    }

    /// Serialize the signed request payload to a JSON body
    pub fn to_json(&self, signer: &dyn Signer) -> Result<String> {
        Ok(serde_json::to_string(&self.to_request_object(signer))?)
    }
}

impl SignatureFields for Order {
    fn append_signature_fields(&self, fields: &mut Vec<String>) {
        fields.push(timezone::format_iso8601(&self.timestamp));
        fields.push(self.merchant_order_id.clone());
        self.amount.append_signature_fields(fields);
        fields.push(optional_field(self.language.as_deref()));
        fields.push(optional_field(self.description.as_deref()));
        fields.push(self.merchant_return_url.clone());

        if let Some(order_items) = &self.order_items {
            order_items.append_signature_fields(fields);
        }

        if let Some(shipping_detail) = &self.shipping_detail {
            shipping_detail.append_signature_fields(fields);
        }

        if let Some(payment_brand) = self.payment_brand {
            fields.push(payment_brand.to_string());
        }

        if let Some(payment_brand_force) = self.payment_brand_force {
            fields.push(payment_brand_force.to_string());
        }

        if let Some(customer_information) = &self.customer_information {
            customer_information.append_signature_fields(fields);
        }

        if let Some(billing_detail) = &self.billing_detail {
            billing_detail.append_signature_fields(fields);
        }
    }
}

/// Signed order announcement as sent to the gateway
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub timestamp: String,
    pub merchant_order_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_items: Option<OrderItems>,
    pub amount: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_detail: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_detail: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_information: Option<CustomerInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(rename = "merchantReturnURL")]
    pub merchant_return_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_brand: Option<PaymentBrand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_brand_force: Option<PaymentBrandForce>,
    pub signature: String,
}
