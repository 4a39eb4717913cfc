use crate::modules::orders::models::{PaymentBrand, PaymentMethod};

/// Maps host payment methods to gateway payment brands
pub struct PaymentBrands;

impl PaymentBrands {
    /// `None` lets the consumer choose on the gateway's payment page
    pub fn transform(method: Option<PaymentMethod>) -> Option<PaymentBrand> {
        match method? {
            PaymentMethod::Ideal => Some(PaymentBrand::Ideal),
            PaymentMethod::Afterpay => Some(PaymentBrand::Afterpay),
            PaymentMethod::Paypal => Some(PaymentBrand::Paypal),
            PaymentMethod::Mastercard => Some(PaymentBrand::Mastercard),
            PaymentMethod::Visa => Some(PaymentBrand::Visa),
            PaymentMethod::Bancontact => Some(PaymentBrand::Bancontact),
            PaymentMethod::Maestro => Some(PaymentBrand::Maestro),
            PaymentMethod::VPay => Some(PaymentBrand::VPay),
            PaymentMethod::CreditCard => Some(PaymentBrand::Cards),
            PaymentMethod::BankTransfer | PaymentMethod::DirectDebit => None,
        }
    }
}
