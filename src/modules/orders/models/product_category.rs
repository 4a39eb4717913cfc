use serde::{Deserialize, Serialize};
use std::fmt;

/// Gateway product category of an order item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductCategory {
    Physical,
    Digital,
}

impl ProductCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Physical => "PHYSICAL",
            ProductCategory::Digital => "DIGITAL",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line type used by the host payment framework
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemType {
    Physical,
    Digital,
    Discount,
    Shipping,
    Fee,
    GiftCard,
    StoreCredit,
    Surcharge,
    /// A line type this crate does not know about
    #[serde(untagged)]
    Other(String),
}

impl std::str::FromStr for LineItemType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "physical" => LineItemType::Physical,
            "digital" => LineItemType::Digital,
            "discount" => LineItemType::Discount,
            "shipping" => LineItemType::Shipping,
            "fee" => LineItemType::Fee,
            "gift_card" => LineItemType::GiftCard,
            "store_credit" => LineItemType::StoreCredit,
            "surcharge" => LineItemType::Surcharge,
            _ => LineItemType::Other(s.to_string()),
        })
    }
}

/// VAT category of an order item, serialized as the gateway's numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VatCategory {
    #[serde(rename = "1")]
    High,
    #[serde(rename = "2")]
    Low,
    #[serde(rename = "3")]
    Zero,
    #[serde(rename = "4")]
    None,
}

impl VatCategory {
    pub fn code(&self) -> &'static str {
        match self {
            VatCategory::High => "1",
            VatCategory::Low => "2",
            VatCategory::Zero => "3",
            VatCategory::None => "4",
        }
    }
}
