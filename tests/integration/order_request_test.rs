// Order announcement payloads
//
// Tests the serialized request body:
// - mandatory fields are always present
// - optional fields are omitted when unset, never sent as null
// - the trailing signature verifies against the order's signature fields

use omnikassa::gateways::{HmacSigner, Signer};
use omnikassa::orders::{Address, Order, ProductCategory, VatCategory};
use omnikassa::{Currency, Money, SignatureFields};
use serde_json::Value;

const SIGNING_KEY: &str = "c2VjcmV0";

fn signer() -> HmacSigner {
    HmacSigner::new(SIGNING_KEY).unwrap()
}

fn order() -> Order {
    Order::new(
        "1001",
        Money::new(Currency::EUR, 1299),
        "https://example.com/return",
    )
    .unwrap()
}

fn request_json(order: &Order) -> Value {
    serde_json::from_str(&order.to_json(&signer()).unwrap()).unwrap()
}

#[test]
fn test_minimal_order_omits_optional_fields() {
    let json = request_json(&order());
    let object = json.as_object().unwrap();

    for key in ["timestamp", "merchantOrderId", "amount", "merchantReturnURL", "signature"] {
        assert!(object.contains_key(key), "missing {}", key);
    }

    for key in [
        "description",
        "orderItems",
        "shippingDetail",
        "billingDetail",
        "customerInformation",
        "language",
        "paymentBrand",
        "paymentBrandForce",
    ] {
        assert!(!object.contains_key(key), "unexpected {}", key);
    }

    assert_eq!(json["amount"], serde_json::json!({"currency": "EUR", "amount": 1299}));
}

#[test]
fn test_full_order_payload() {
    let mut order = order();
    order.set_description(Some("Order 1001")).unwrap();
    order.set_language(Some("NL")).unwrap();
    order.set_payment_brand(Some("IDEAL")).unwrap();
    order.set_payment_brand_force(Some("FORCE_ONCE")).unwrap();
    order.set_shipping_detail(Some(
        Address::new("Jan", "Jansen", "Kerkstraat", "1234 AB", "Utrecht", "NL").unwrap(),
    ));

    let item = order
        .new_items()
        .new_item("Shirt", 1, Money::new(Currency::EUR, 1299), ProductCategory::Physical)
        .unwrap();
    item.set_vat_category(Some(VatCategory::High));

    let json = request_json(&order);

    assert_eq!(json["description"], "Order 1001");
    assert_eq!(json["language"], "NL");
    assert_eq!(json["paymentBrand"], "IDEAL");
    assert_eq!(json["paymentBrandForce"], "FORCE_ONCE");
    assert_eq!(json["shippingDetail"]["postalCode"], "1234 AB");
    assert_eq!(json["orderItems"][0]["category"], "PHYSICAL");
    assert_eq!(json["orderItems"][0]["vatCategory"], "1");
    assert!(json.get("billingDetail").is_none());
}

#[test]
fn test_billing_detail_payload() {
    let mut order = order();
    let mut billing =
        Address::new("Piet", "Pietersen", "Dorpsweg", "5678 CD", "Amersfoort", "NL").unwrap();
    billing.set_house_number(Some("3")).unwrap();
    order.set_billing_detail(Some(billing));

    let json = request_json(&order);

    assert_eq!(json["billingDetail"]["city"], "Amersfoort");
    assert_eq!(json["billingDetail"]["houseNumber"], "3");
    assert_eq!(json["billingDetail"]["countryCode"], "NL");
    assert!(json.get("shippingDetail").is_none());

    // billing fields close the signature sequence
    let fields = order.signature_fields();
    assert_eq!(fields.len(), 7 + 9);
    assert_eq!(fields[7], "Piet");
    assert_eq!(fields[15], "NL");
}

#[test]
fn test_signature_verifies() {
    let mut order = order();
    order.set_description(Some("Order 1001")).unwrap();

    let signer = signer();
    let request = order.to_request_object(&signer);

    assert_eq!(request.signature.len(), 128);
    assert!(signer.verify(&order.signature_fields(), &request.signature));

    order.set_description(Some("Order 1002")).unwrap();
    assert!(!signer.verify(&order.signature_fields(), &request.signature));
}

#[test]
fn test_request_is_reproducible() {
    let order = order();
    let signer = signer();

    assert_eq!(
        order.to_json(&signer).unwrap(),
        order.to_json(&signer).unwrap()
    );
}

#[test]
fn test_invalid_constructor_arguments() {
    let amount = Money::new(Currency::EUR, 100);

    assert!(Order::new("12345678901", amount, "https://example.com").unwrap_err().is_format());
    assert!(Order::new("", amount, "https://example.com").unwrap_err().is_format());

    let long_url = format!("https://example.com/{}", "a".repeat(1024));
    assert!(Order::new("1", amount, &long_url).unwrap_err().is_format());
}

#[test]
fn test_timestamp_is_iso8601_with_offset() {
    let json = request_json(&order());
    let timestamp = json["timestamp"].as_str().unwrap();

    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    assert!(!timestamp.ends_with('Z'));
}
