use crate::modules::orders::models::{LineItemType, ProductCategory};

/// Maps host line types to the gateway's product categories
pub struct ProductCategories;

impl ProductCategories {
    /// Anything that is not shipped physically is sent as digital
    pub fn transform(line_type: Option<&LineItemType>) -> ProductCategory {
        match line_type {
            Some(LineItemType::Physical) => ProductCategory::Physical,
            // digital, discount, shipping, unknown
            _ => ProductCategory::Digital,
        }
    }
}
