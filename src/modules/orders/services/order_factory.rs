// Translates a host payment into a gateway order.
//
// Free-text values coming from the host (descriptions, product names) are
// shortened to the gateway's limits. Identifiers and addresses are validated
// as-is, so a value that does not fit fails the payment attempt.

use super::{DataHelper, PaymentBrands, ProductCategories};
use crate::core::Result;
use crate::modules::gateways::{Customer, PaymentLine, PaymentRequest, PostalAddress};
use crate::modules::orders::models::{
    Address, CustomerInformation, Order, OrderItems, PaymentBrandForce,
};

pub struct OrderFactory {
    merchant_return_url: String,
    order_id_prefix: Option<String>,
}

impl OrderFactory {
    pub fn new(merchant_return_url: impl Into<String>) -> Self {
        Self {
            merchant_return_url: merchant_return_url.into(),
            order_id_prefix: None,
        }
    }

    /// Prepend a fixed prefix to every merchant order id
    pub fn with_order_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.order_id_prefix = Some(prefix.into());
        self
    }

    pub fn build(&self, request: &PaymentRequest) -> Result<Order> {
        let merchant_order_id = format!(
            "{}{}",
            self.order_id_prefix.as_deref().unwrap_or_default(),
            request.external_id
        );

        let mut order = Order::new(&merchant_order_id, request.total, &self.merchant_return_url)?;

        let description = request
            .description
            .as_deref()
            .map(|description| DataHelper::shorten(description.trim(), 35))
            .filter(|description| !description.is_empty());
        order.set_description(description.as_deref())?;

        let language = request
            .locale
            .as_deref()
            .map(|locale| DataHelper::shorten(locale, 2).to_uppercase())
            .filter(|language| !language.is_empty());
        order.set_language(language.as_deref())?;

        if !request.lines.is_empty() {
            Self::add_lines(order.new_items(), &request.lines)?;
        }

        if let Some(address) = &request.shipping_address {
            order.set_shipping_detail(Some(Self::address(address)?));
        }

        if let Some(address) = &request.billing_address {
            order.set_billing_detail(Some(Self::address(address)?));
        }

        if let Some(customer) = &request.customer {
            order.set_customer_information(Some(Self::customer_information(customer)?));
        }

        if let Some(brand) = PaymentBrands::transform(request.payment_method) {
            order.set_payment_brand(Some(brand.as_str()))?;
            order.set_payment_brand_force(Some(PaymentBrandForce::ForceOnce.as_str()))?;
        }

        tracing::debug!(
            merchant_order_id = %order.merchant_order_id(),
            lines = request.lines.len(),
            payment_brand = ?order.payment_brand(),
            "Built order from payment request"
        );

        Ok(order)
    }

    fn add_lines(items: &mut OrderItems, lines: &[PaymentLine]) -> Result<()> {
        for line in lines {
            let category = ProductCategories::transform(line.line_type.as_ref());
            let name = DataHelper::shorten(&line.name, 50);
            let item = items.new_item(&name, line.quantity, line.unit_price, category)?;

            item.set_id(line.id.as_deref())?;

            let description = line
                .description
                .as_deref()
                .map(|description| DataHelper::shorten(description, 100))
                .filter(|description| !description.is_empty());
            item.set_description(description.as_deref())?;
            item.set_tax(line.tax_amount)?;
        }

        Ok(())
    }

    fn address(address: &PostalAddress) -> Result<Address> {
        let mut result = Address::new(
            &address.first_name,
            &address.last_name,
            &address.street,
            &address.postal_code,
            &address.city,
            &address.country_code,
        )?;

        result.set_middle_name(address.middle_name.as_deref())?;
        result.set_house_number(address.house_number.as_deref())?;
        result.set_house_number_addition(address.house_number_addition.as_deref())?;

        Ok(result)
    }

    fn customer_information(customer: &Customer) -> Result<CustomerInformation> {
        let mut info = CustomerInformation::new();

        info.set_email_address(customer.email.as_deref())?;
        info.set_telephone_number(customer.phone.as_deref())?;
        info.set_gender(customer.gender.as_deref())?;
        info.set_initials(customer.initials.as_deref())?;
        info.set_date_of_birth(customer.birth_date);

        Ok(info)
    }
}
