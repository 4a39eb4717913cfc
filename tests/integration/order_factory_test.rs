// Host payment → gateway order translation

use chrono::NaiveDate;
use omnikassa::gateways::{Customer, HmacSigner, PaymentLine, PaymentRequest, PostalAddress};
use omnikassa::orders::{
    LineItemType, OrderFactory, PaymentBrand, PaymentBrandForce, PaymentMethod, ProductCategory,
};
use omnikassa::{Currency, Money};
use serde_json::Value;

fn line(name: &str, line_type: Option<LineItemType>) -> PaymentLine {
    PaymentLine {
        id: Some("SKU".to_string()),
        name: name.to_string(),
        description: Some("d".repeat(150)),
        quantity: 2,
        unit_price: Money::new(Currency::EUR, 1000),
        tax_amount: Some(Money::new(Currency::EUR, 174)),
        line_type,
    }
}

fn address() -> PostalAddress {
    PostalAddress {
        first_name: "Jan".to_string(),
        middle_name: Some("van".to_string()),
        last_name: "Jansen".to_string(),
        street: "Kerkstraat".to_string(),
        house_number: Some("12".to_string()),
        house_number_addition: Some("A".to_string()),
        postal_code: "1234 AB".to_string(),
        city: "Utrecht".to_string(),
        country_code: "NL".to_string(),
    }
}

fn request() -> PaymentRequest {
    PaymentRequest {
        external_id: "77".to_string(),
        description: Some("Webshop order 77".to_string()),
        total: Money::new(Currency::EUR, 2500),
        lines: vec![
            line("T-shirt", Some(LineItemType::Physical)),
            line(&"e-book ".repeat(10), Some(LineItemType::Digital)),
            line("Discount", Some(LineItemType::Discount)),
            line("Unknown", None),
        ],
        shipping_address: Some(address()),
        billing_address: Some(address()),
        customer: Some(Customer {
            email: Some("jan@example.com".to_string()),
            phone: Some("0612345678".to_string()),
            gender: Some("M".to_string()),
            birth_date: NaiveDate::from_ymd_opt(1980, 3, 7),
            initials: Some("J.".to_string()),
        }),
        locale: Some("en_US".to_string()),
        payment_method: Some(PaymentMethod::CreditCard),
    }
}

#[test]
fn test_build_full_order() {
    let factory = OrderFactory::new("https://example.com/return").with_order_id_prefix("WS");
    let order = factory.build(&request()).unwrap();

    assert_eq!(order.merchant_order_id(), "WS77");
    assert_eq!(order.language(), Some("EN"));
    assert_eq!(order.payment_brand(), Some(PaymentBrand::Cards));
    assert_eq!(order.payment_brand_force(), Some(PaymentBrandForce::ForceOnce));

    let categories: Vec<ProductCategory> = order
        .order_items()
        .unwrap()
        .iter()
        .map(|item| item.category())
        .collect();
    assert_eq!(
        categories,
        vec![
            ProductCategory::Physical,
            ProductCategory::Digital,
            ProductCategory::Digital,
            ProductCategory::Digital
        ]
    );

    let long_name = order.order_items().unwrap().iter().nth(1).unwrap().name();
    assert_eq!(long_name.chars().count(), 50);
}

#[test]
fn test_built_order_serializes() {
    let order = OrderFactory::new("https://example.com/return").build(&request()).unwrap();
    let signer = HmacSigner::new("c2VjcmV0").unwrap();
    let json: Value = serde_json::from_str(&order.to_json(&signer).unwrap()).unwrap();

    assert_eq!(json["merchantOrderId"], "77");
    assert_eq!(json["orderItems"].as_array().unwrap().len(), 4);
    assert_eq!(json["orderItems"][0]["description"].as_str().unwrap().len(), 100);
    assert_eq!(json["orderItems"][0]["tax"]["amount"], 174);
    assert_eq!(json["customerInformation"]["dateOfBirth"], "07-03-1980");
    assert_eq!(json["billingDetail"]["houseNumberAddition"], "A");
    assert_eq!(json["paymentBrand"], "CARDS");
}

#[test]
fn test_invalid_host_data_fails() {
    let mut request = request();
    request.shipping_address.as_mut().unwrap().country_code = "NLD".to_string();

    let result = OrderFactory::new("https://example.com/return").build(&request);
    assert!(result.unwrap_err().is_format());
}

#[test]
fn test_without_method_no_brand() {
    let mut request = request();
    request.payment_method = None;
    request.lines.clear();

    let order = OrderFactory::new("https://example.com/return").build(&request).unwrap();

    assert_eq!(order.payment_brand(), None);
    assert!(order.order_items().is_none());
}
