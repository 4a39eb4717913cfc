// A single line of an order as sent to the gateway.
//
// Items sign in insertion order. An item without tax still occupies one
// (empty) position in the signature, while an absent id or VAT category
// occupies none.

use serde::Serialize;

use super::product_category::{ProductCategory, VatCategory};
use crate::core::traits::signature_fields::optional_field;
use crate::core::{AppError, Money, Result, SignatureFields};
use crate::modules::orders::services::DataHelper;

/// Represents a single product or service in an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    quantity: u32,
    amount: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    tax: Option<Money>,
    category: ProductCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    vat_category: Option<VatCategory>,
}

impl OrderItem {
    /// Create a new order item with validation
    ///
    /// # Arguments
    /// * `name` - AN..max 50
    /// * `quantity` - Must be positive
    /// * `amount` - Price per unit
    /// * `category` - Physical or digital goods
    pub fn new(
        name: &str,
        quantity: u32,
        amount: Money,
        category: ProductCategory,
    ) -> Result<Self> {
        DataHelper::validate_an(name, 50)?;
        Self::validate_quantity(quantity)?;

        Ok(Self {
            id: None,
            name: name.to_string(),
            description: None,
            quantity,
            amount,
            tax: None,
            category,
            vat_category: None,
        })
    }

    /// Merchant item id, AN..max 25
    pub fn set_id(&mut self, id: Option<&str>) -> Result<()> {
        DataHelper::validate_null_or_an(id, 25)?;
        self.id = id.map(str::to_string);
        Ok(())
    }

    /// AN..max 100
    pub fn set_description(&mut self, description: Option<&str>) -> Result<()> {
        DataHelper::validate_null_or_an(description, 100)?;
        self.description = description.map(str::to_string);
        Ok(())
    }

    /// Tax per unit; must be in the same currency as the amount
    pub fn set_tax(&mut self, tax: Option<Money>) -> Result<()> {
        if let Some(tax) = tax {
            if tax.currency() != self.amount.currency() {
                return Err(AppError::format(format!(
                    "Tax currency {} does not match item currency {}",
                    tax.currency(),
                    self.amount.currency()
                )));
            }
        }

        self.tax = tax;
        Ok(())
    }

    pub fn set_vat_category(&mut self, vat_category: Option<VatCategory>) {
        self.vat_category = vat_category;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> ProductCategory {
        self.category
    }

    fn validate_quantity(quantity: u32) -> Result<()> {
        if quantity == 0 {
            return Err(AppError::format("Quantity must be positive, got: 0"));
        }

        Ok(())
    }
}

impl SignatureFields for OrderItem {
    fn append_signature_fields(&self, fields: &mut Vec<String>) {
        if let Some(id) = &self.id {
            fields.push(id.clone());
        }

        fields.push(self.name.clone());
        fields.push(optional_field(self.description.as_deref()));
        fields.push(self.quantity.to_string());
        self.amount.append_signature_fields(fields);

        match &self.tax {
            Some(tax) => tax.append_signature_fields(fields),
            None => fields.push(String::new()),
        }

        fields.push(self.category.to_string());

        if let Some(vat_category) = &self.vat_category {
            fields.push(vat_category.code().to_string());
        }
    }
}

/// Ordered collection of order items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OrderItems {
    items: Vec<OrderItem>,
}

impl OrderItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create, validate and append a new item, returning it for further setup
    pub fn new_item(
        &mut self,
        name: &str,
        quantity: u32,
        amount: Money,
        category: ProductCategory,
    ) -> Result<&mut OrderItem> {
        let item = OrderItem::new(name, quantity, amount, category)?;
        self.items.push(item);
        let index = self.items.len() - 1;
        Ok(&mut self.items[index])
    }

    pub fn push(&mut self, item: OrderItem) {
        self.items.push(item);
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrderItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl SignatureFields for OrderItems {
    fn append_signature_fields(&self, fields: &mut Vec<String>) {
        for item in &self.items {
            item.append_signature_fields(fields);
        }
    }
}
