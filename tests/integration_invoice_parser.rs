//! Integration tests for the invoice parser against realistic file content

use invoice_processor::app::models::{Channel, MenuItem};
use invoice_processor::app::services::invoice_parser::{InvoiceError, InvoiceParser};

/// A realistic invoice as the till prints it: banner lines, blank lines,
/// unknown fields, and mixed key casing
const REALISTIC_INVOICE: &str = "\
=== Al Sham Restaurant ===
Date: 2024-06-11
Till: 3

orderType: out
Item: Falafel
Quantity: 4
PricePerItem: 2.25
TotalPrice: 9.00

Served-By: Rana
Note: extra tahini
";

#[test]
fn parses_realistic_invoice_with_noise() {
    let parser = InvoiceParser::new();
    let parsed = parser.parse(REALISTIC_INVOICE, "till3-0142.txt").unwrap();

    assert_eq!(parsed.order.channel, Channel::Takeaway);
    assert_eq!(parsed.order.item, MenuItem::Falafel);
    assert_eq!(parsed.order.quantity, 4);
    assert_eq!(parsed.order.price_per_item, 2.25);
    assert_eq!(parsed.order.total_price, 9.00);
    assert!(parsed.warnings.is_empty());
}

#[test]
fn parses_crlf_line_endings() {
    let text = "OrderType: IN\r\nItem: Cola\r\nQuantity: 2\r\nPricePerItem: 1.5\r\nTotalPrice: 3.0\r\n";
    let parsed = InvoiceParser::new().parse(text, "dos.txt").unwrap();

    assert_eq!(parsed.order.item, MenuItem::Cola);
    assert_eq!(parsed.order.quantity, 2);
}

#[test]
fn tolerance_boundary_behaviour() {
    let parser = InvoiceParser::new();

    // Exact total: no warning
    let exact = parser
        .parse(
            "OrderType: IN\nItem: Hummous\nQuantity: 2\nPricePerItem: 5.0\nTotalPrice: 10.0\n",
            "exact.txt",
        )
        .unwrap();
    assert!(exact.warnings.is_empty());

    // Off by exactly the tolerance: still no warning
    let boundary = parser
        .parse(
            "OrderType: IN\nItem: Hummous\nQuantity: 2\nPricePerItem: 5.0\nTotalPrice: 10.01\n",
            "boundary.txt",
        )
        .unwrap();
    assert!(boundary.warnings.is_empty());

    // Off by just over the tolerance: warning, order still accepted
    let over = parser
        .parse(
            "OrderType: IN\nItem: Hummous\nQuantity: 2\nPricePerItem: 5.0\nTotalPrice: 10.011\n",
            "over.txt",
        )
        .unwrap();
    assert_eq!(over.warnings.len(), 1);
    assert_eq!(over.order.total_price, 10.011);
}

#[test]
fn rejects_invoice_missing_item() {
    let text = "OrderType: IN\nQuantity: 2\nPricePerItem: 5.0\nTotalPrice: 10.0\n";
    let err = InvoiceParser::new().parse(text, "no-item.txt").unwrap_err();

    assert_eq!(err, InvoiceError::MissingField("item"));
    assert_eq!(err.to_string(), "missing field: item");
}

#[test]
fn rejects_unknown_order_type() {
    let text = "OrderType: Delivery\nItem: Tea\nQuantity: 1\nPricePerItem: 1.25\nTotalPrice: 1.25\n";
    let err = InvoiceParser::new().parse(text, "delivery.txt").unwrap_err();

    assert_eq!(err.to_string(), "invalid order type");
}

#[test]
fn duplicate_required_key_silently_takes_last_value() {
    let text = "\
OrderType: IN
Quantity: 1
Quantity: 3
Item: Water
PricePerItem: 0.5
TotalPrice: 1.5
";
    let parsed = InvoiceParser::new().parse(text, "dup.txt").unwrap();

    assert_eq!(parsed.order.quantity, 3);
    assert!(parsed.warnings.is_empty());
}
