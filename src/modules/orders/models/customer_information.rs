use chrono::NaiveDate;
use serde::Serialize;

use crate::core::traits::signature_fields::optional_field;
use crate::core::{AppError, Result, SignatureFields};
use crate::modules::orders::services::DataHelper;

/// Consumer details, used by payment brands such as AfterPay
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initials: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    telephone_number: Option<String>,
}

impl CustomerInformation {
    pub fn new() -> Self {
        Self::default()
    }

    /// AN..max 45
    pub fn set_email_address(&mut self, email_address: Option<&str>) -> Result<()> {
        DataHelper::validate_null_or_an(email_address, 45)?;
        self.email_address = email_address.map(str::to_string);
        Ok(())
    }

    /// Sent as `DD-MM-YYYY`
    pub fn set_date_of_birth(&mut self, date_of_birth: Option<NaiveDate>) {
        self.date_of_birth = date_of_birth.map(|date| date.format("%d-%m-%Y").to_string());
    }

    /// `M` or `F`, AN..max 1
    pub fn set_gender(&mut self, gender: Option<&str>) -> Result<()> {
        DataHelper::validate_null_or_an(gender, 1)?;

        if let Some(value) = gender {
            if !matches!(value, "M" | "F") {
                return Err(AppError::format(format!("Unknown gender: {}", value)));
            }
        }

        self.gender = gender.map(str::to_string);
        Ok(())
    }

    /// AN..max 256
    pub fn set_initials(&mut self, initials: Option<&str>) -> Result<()> {
        DataHelper::validate_null_or_an(initials, 256)?;
        self.initials = initials.map(str::to_string);
        Ok(())
    }

    /// AN..max 31
    pub fn set_telephone_number(&mut self, telephone_number: Option<&str>) -> Result<()> {
        DataHelper::validate_null_or_an(telephone_number, 31)?;
        self.telephone_number = telephone_number.map(str::to_string);
        Ok(())
    }

    pub fn email_address(&self) -> Option<&str> {
        self.email_address.as_deref()
    }

    pub fn date_of_birth(&self) -> Option<&str> {
        self.date_of_birth.as_deref()
    }
}

impl SignatureFields for CustomerInformation {
    fn append_signature_fields(&self, fields: &mut Vec<String>) {
        fields.push(optional_field(self.email_address.as_deref()));
        fields.push(optional_field(self.date_of_birth.as_deref()));
        fields.push(optional_field(self.gender.as_deref()));
        fields.push(optional_field(self.initials.as_deref()));
        fields.push(optional_field(self.telephone_number.as_deref()));
    }
}
