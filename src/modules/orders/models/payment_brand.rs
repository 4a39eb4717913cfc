use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{AppError, Result};

/// Payment brand the consumer is steered to on the payment page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentBrand {
    Ideal,
    Afterpay,
    Paypal,
    Mastercard,
    Visa,
    Bancontact,
    Maestro,
    VPay,
    Cards,
}

impl PaymentBrand {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentBrand::Ideal => "IDEAL",
            PaymentBrand::Afterpay => "AFTERPAY",
            PaymentBrand::Paypal => "PAYPAL",
            PaymentBrand::Mastercard => "MASTERCARD",
            PaymentBrand::Visa => "VISA",
            PaymentBrand::Bancontact => "BANCONTACT",
            PaymentBrand::Maestro => "MAESTRO",
            PaymentBrand::VPay => "V_PAY",
            PaymentBrand::Cards => "CARDS",
        }
    }
}

impl fmt::Display for PaymentBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentBrand {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "IDEAL" => Ok(PaymentBrand::Ideal),
            "AFTERPAY" => Ok(PaymentBrand::Afterpay),
            "PAYPAL" => Ok(PaymentBrand::Paypal),
            "MASTERCARD" => Ok(PaymentBrand::Mastercard),
            "VISA" => Ok(PaymentBrand::Visa),
            "BANCONTACT" => Ok(PaymentBrand::Bancontact),
            "MAESTRO" => Ok(PaymentBrand::Maestro),
            "V_PAY" => Ok(PaymentBrand::VPay),
            "CARDS" => Ok(PaymentBrand::Cards),
            _ => Err(AppError::format(format!("Unknown payment brand: {}", s))),
        }
    }
}

/// Whether the consumer may pick another brand than the one suggested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentBrandForce {
    /// Brand is forced for the first attempt only
    ForceOnce,
    /// Brand is forced for every attempt
    ForceAlways,
}

impl PaymentBrandForce {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentBrandForce::ForceOnce => "FORCE_ONCE",
            PaymentBrandForce::ForceAlways => "FORCE_ALWAYS",
        }
    }
}

impl fmt::Display for PaymentBrandForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentBrandForce {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "FORCE_ONCE" => Ok(PaymentBrandForce::ForceOnce),
            "FORCE_ALWAYS" => Ok(PaymentBrandForce::ForceAlways),
            _ => Err(AppError::format(format!("Unknown payment brand force: {}", s))),
        }
    }
}

/// Payment method as chosen in the host payment framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Ideal,
    Afterpay,
    Paypal,
    Mastercard,
    Visa,
    Bancontact,
    Maestro,
    VPay,
    CreditCard,
    BankTransfer,
    DirectDebit,
}
