//! Core invoice parser implementation
//!
//! Converts the text of one invoice file into a validated [`Order`], or an
//! [`InvoiceError`] naming the first problem found. Required fields are
//! checked for presence before any value is validated, so a file missing a
//! field is always reported as missing rather than as invalid.

use tracing::debug;

use super::fields::{
    InvoiceError, RawInvoice, parse_required_channel, parse_required_item,
    parse_required_price, parse_required_quantity,
};
use super::stats::ParsedInvoice;
use crate::app::models::Order;
use crate::constants::{REQUIRED_FIELDS, fields};

/// Parser for single-order invoice files
///
/// Stateless and side-effect free: the result depends only on the invoice
/// text and the source identifier carried into diagnostics.
#[derive(Debug, Default)]
pub struct InvoiceParser;

impl InvoiceParser {
    /// Create a new invoice parser
    pub fn new() -> Self {
        Self
    }

    /// Parse one invoice file into an order
    ///
    /// `source` identifies the file in diagnostics (typically its file
    /// name). A price discrepancy beyond the tolerance is attached as a
    /// warning on the accepted order, never a failure.
    pub fn parse(&self, text: &str, source: &str) -> Result<ParsedInvoice, InvoiceError> {
        let raw = RawInvoice::from_text(text);
        debug!("Extracted {} raw fields from '{}'", raw.len(), source);

        // Presence of every required field is checked up front, in canonical
        // order, before any value validation.
        for &key in REQUIRED_FIELDS {
            raw.require(key)?;
        }

        let channel = parse_required_channel(&raw)?;
        let item = parse_required_item(&raw)?;
        let quantity = parse_required_quantity(&raw)?;
        let price_per_item = parse_required_price(&raw, fields::PRICE_PER_ITEM)?;
        let total_price = parse_required_price(&raw, fields::TOTAL_PRICE)?;

        let order = Order {
            channel,
            item,
            quantity,
            price_per_item,
            total_price,
            source: source.to_string(),
        };

        let mut warnings = Vec::new();
        if !order.price_consistent() {
            warnings.push(format!(
                "price mismatch for {}: expected {:.2}, got {:.2}",
                source,
                order.expected_total(),
                order.total_price
            ));
        }

        Ok(ParsedInvoice { order, warnings })
    }
}
