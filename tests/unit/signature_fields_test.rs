// Signature field ordering
//
// The gateway recomputes the signature from the fields it receives, so the
// sequence must be identical for identical order state and must follow the
// gateway's fixed order.

use chrono::{FixedOffset, TimeZone};
use omnikassa::orders::{Address, CustomerInformation, Order, ProductCategory};
use omnikassa::{Currency, Money, SignatureFields};
use proptest::prelude::*;

fn base_order() -> Order {
    let mut order = Order::new(
        "ORD-1",
        Money::new(Currency::EUR, 4995),
        "https://example.com/return",
    )
    .unwrap();
    let offset = FixedOffset::east_opt(7200).unwrap();
    order.set_timestamp(offset.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap());
    order
}

fn address(first_name: &str) -> Address {
    Address::new(first_name, "Jansen", "Kerkstraat", "1234 AB", "Utrecht", "NL").unwrap()
}

#[test]
fn test_full_order_field_sequence() {
    let mut order = base_order();
    order.set_description(Some("Order ORD-1")).unwrap();
    order.set_language(Some("NL")).unwrap();
    order
        .new_items()
        .new_item("Shirt", 1, Money::new(Currency::EUR, 4995), ProductCategory::Physical)
        .unwrap();
    order.set_shipping_detail(Some(address("Ship")));
    order.set_billing_detail(Some(address("Bill")));
    order.set_payment_brand(Some("AFTERPAY")).unwrap();
    order.set_payment_brand_force(Some("FORCE_ALWAYS")).unwrap();

    let mut customer = CustomerInformation::new();
    customer.set_email_address(Some("jan@example.com")).unwrap();
    order.set_customer_information(Some(customer));

    let expected: Vec<&str> = vec![
        // timestamp, merchant order id, amount
        "2024-05-01T09:30:00+02:00",
        "ORD-1",
        "EUR",
        "4995",
        // language, description, return url
        "NL",
        "Order ORD-1",
        "https://example.com/return",
        // order item
        "Shirt",
        "",
        "1",
        "EUR",
        "4995",
        "",
        "PHYSICAL",
        // shipping detail
        "Ship",
        "",
        "Jansen",
        "Kerkstraat",
        "",
        "",
        "1234 AB",
        "Utrecht",
        "NL",
        // payment brand and force
        "AFTERPAY",
        "FORCE_ALWAYS",
        // customer information
        "jan@example.com",
        "",
        "",
        "",
        "",
        // billing detail
        "Bill",
        "",
        "Jansen",
        "Kerkstraat",
        "",
        "",
        "1234 AB",
        "Utrecht",
        "NL",
    ];

    assert_eq!(order.signature_fields(), expected);
}

#[test]
fn test_unset_optionals_do_not_add_fields() {
    let order = base_order();
    assert_eq!(order.signature_fields().len(), 7);
}

proptest! {
    #[test]
    fn test_field_order_is_stable(
        description in proptest::option::of("[a-zA-Z0-9 ]{1,35}"),
        language in proptest::option::of("[A-Z]{2}"),
        amount in 1i64..10_000_000,
    ) {
        let mut order = base_order();
        order.set_amount(Money::new(Currency::EUR, amount));
        order.set_description(description.as_deref()).unwrap();
        order.set_language(language.as_deref()).unwrap();

        let first = order.signature_fields();
        let second = order.signature_fields();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first[3].clone(), amount.to_string());
        prop_assert_eq!(first[4].clone(), language.unwrap_or_default());
        prop_assert_eq!(first[5].clone(), description.unwrap_or_default());
    }
}
