use serde::Serialize;

use crate::core::traits::signature_fields::optional_field;
use crate::core::{Result, SignatureFields};
use crate::modules::orders::services::DataHelper;

/// Shipping or billing address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    middle_name: Option<String>,
    last_name: String,
    street: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    house_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    house_number_addition: Option<String>,
    postal_code: String,
    city: String,
    country_code: String,
}

impl Address {
    /// Create an address from its mandatory parts
    ///
    /// # Arguments
    /// * `first_name` - AN..max 50
    /// * `last_name` - AN..max 50
    /// * `street` - AN..max 100
    /// * `postal_code` - AN..max 10
    /// * `city` - AN..max 40
    /// * `country_code` - ISO 3166-1 alpha-2, AN..max 2
    pub fn new(
        first_name: &str,
        last_name: &str,
        street: &str,
        postal_code: &str,
        city: &str,
        country_code: &str,
    ) -> Result<Self> {
        DataHelper::validate_an(first_name, 50)?;
        DataHelper::validate_an(last_name, 50)?;
        DataHelper::validate_an(street, 100)?;
        DataHelper::validate_an(postal_code, 10)?;
        DataHelper::validate_an(city, 40)?;
        DataHelper::validate_an(country_code, 2)?;

        Ok(Self {
            first_name: first_name.to_string(),
            middle_name: None,
            last_name: last_name.to_string(),
            street: street.to_string(),
            house_number: None,
            house_number_addition: None,
            postal_code: postal_code.to_string(),
            city: city.to_string(),
            country_code: country_code.to_string(),
        })
    }

    /// Middle name or prefix (e.g. "van der"), AN..max 20
    pub fn set_middle_name(&mut self, middle_name: Option<&str>) -> Result<()> {
        DataHelper::validate_null_or_an(middle_name, 20)?;
        self.middle_name = middle_name.map(str::to_string);
        Ok(())
    }

    /// AN..max 100
    pub fn set_house_number(&mut self, house_number: Option<&str>) -> Result<()> {
        DataHelper::validate_null_or_an(house_number, 100)?;
        self.house_number = house_number.map(str::to_string);
        Ok(())
    }

    /// AN..max 6
    pub fn set_house_number_addition(&mut self, addition: Option<&str>) -> Result<()> {
        DataHelper::validate_null_or_an(addition, 6)?;
        self.house_number_addition = addition.map(str::to_string);
        Ok(())
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }
}

impl SignatureFields for Address {
    fn append_signature_fields(&self, fields: &mut Vec<String>) {
        fields.push(self.first_name.clone());
        fields.push(optional_field(self.middle_name.as_deref()));
        fields.push(self.last_name.clone());
        fields.push(self.street.clone());
        fields.push(optional_field(self.house_number.as_deref()));
        fields.push(optional_field(self.house_number_addition.as_deref()));
        fields.push(self.postal_code.clone());
        fields.push(self.city.clone());
        fields.push(self.country_code.clone());
    }
}
