//! Test utilities for invoice parser testing
//!
//! Provides helpers for building invoice file content used across the
//! parser test modules.


/// Build a minimal well-formed invoice from the given field values
pub fn sample_invoice(
    order_type: &str,
    item: &str,
    quantity: &str,
    price_per_item: &str,
    total_price: &str,
) -> String {
    format!(
        "OrderType: {}\nItem: {}\nQuantity: {}\nPricePerItem: {}\nTotalPrice: {}\n",
        order_type, item, quantity, price_per_item, total_price
    )
}

/// A consistent in-restaurant invoice: 2 Hummous at 5.00
pub fn well_formed_invoice() -> String {
    sample_invoice("IN", "Hummous", "2", "5.0", "10.0")
}
