use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::Money;
use crate::modules::orders::models::{LineItemType, PaymentMethod};

/// Payment data handed over by the host payment framework
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Host order/payment reference
    pub external_id: String,

    /// Free-text description, shortened to fit the gateway
    pub description: Option<String>,

    /// Total amount
    pub total: Money,

    /// Order lines
    #[serde(default)]
    pub lines: Vec<PaymentLine>,

    pub shipping_address: Option<PostalAddress>,

    pub billing_address: Option<PostalAddress>,

    pub customer: Option<Customer>,

    /// Consumer locale, e.g. `nl_NL`
    pub locale: Option<String>,

    /// Payment method picked in the host checkout
    pub payment_method: Option<PaymentMethod>,
}

/// Single order line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentLine {
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub quantity: u32,
    pub unit_price: Money,
    pub tax_amount: Option<Money>,
    pub line_type: Option<LineItemType>,
}

/// Postal address as known by the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostalAddress {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub street: String,
    pub house_number: Option<String>,
    pub house_number_addition: Option<String>,
    pub postal_code: String,
    pub city: String,
    pub country_code: String,
}

/// Consumer details as known by the host
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Customer {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub initials: Option<String>,
}
