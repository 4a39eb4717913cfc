use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::traits::SignatureFields;
use super::{AppError, Currency, Result};

/// Monetary value in integer minor units (cents for EUR)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    currency: Currency,
    #[serde(deserialize_with = "minor_units")]
    amount: i64,
}

/// Status responses send amounts as strings, requests use numbers
fn minor_units<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(i64),
        Text(String),
    }

    match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(amount) => Ok(amount),
        RawAmount::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

impl Money {
    pub fn new(currency: Currency, amount: i64) -> Self {
        Self { currency, amount }
    }

    /// Convert a major-unit decimal (e.g. `12.95`) to minor units.
    ///
    /// Values with more decimals than the currency allows, or negative
    /// values, are rejected.
    pub fn from_decimal(currency: Currency, value: Decimal) -> Result<Self> {
        currency.validate_amount(value).map_err(AppError::format)?;

        let minor = value
            .checked_mul(Decimal::from(currency.minor_unit_factor()))
            .and_then(|minor| minor.trunc().to_i64())
            .ok_or_else(|| AppError::format(format!("Amount {} is out of range", value)))?;

        Ok(Self::new(currency, minor))
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Amount in minor units
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Amount in major units
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.amount, self.currency.scale())
    }
}

impl SignatureFields for Money {
    fn append_signature_fields(&self, fields: &mut Vec<String>) {
        fields.push(self.currency.to_string());
        fields.push(self.amount.to_string());
    }
}
