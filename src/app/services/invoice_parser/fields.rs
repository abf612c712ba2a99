//! Field extraction and validation for invoice files
//!
//! This module handles the two layers of invoice field handling: extracting
//! raw `key: value` pairs from the file text, and converting the raw values
//! into their validated domain types.

use std::collections::HashMap;

use crate::app::models::{Channel, MenuItem};
use crate::constants::fields;

/// Reason an invoice file was rejected
///
/// The `Display` form of each variant is the reason string surfaced to the
/// user next to the offending file name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvoiceError {
    /// A required field is absent from the invoice
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// The `OrderType` value is neither `IN` nor `OUT`
    #[error("invalid order type")]
    InvalidOrderType,

    /// The `Item` value is not on the menu
    #[error("invalid item")]
    InvalidItem,

    /// A numeric field failed to parse or is negative
    #[error("invalid numeric field: {0}")]
    InvalidNumericField(&'static str),
}

/// Raw field mapping extracted from one invoice file
///
/// Keys are lowercased and whitespace-trimmed; values are trimmed but
/// otherwise untouched. Lines without a colon are skipped, and a key that
/// appears more than once keeps its last value.
#[derive(Debug, Clone, Default)]
pub struct RawInvoice {
    entries: HashMap<String, String>,
}

impl RawInvoice {
    /// Extract raw fields from invoice text
    pub fn from_text(text: &str) -> Self {
        let mut entries = HashMap::new();

        for line in text.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            entries.insert(
                key.trim().to_ascii_lowercase(),
                value.trim().to_string(),
            );
        }

        Self { entries }
    }

    /// Look up a field value by its lowercased key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up a required field value, failing if the key is absent
    pub fn require(&self, key: &'static str) -> Result<&str, InvoiceError> {
        self.get(key).ok_or(InvoiceError::MissingField(key))
    }

    /// Number of fields extracted from the file
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no fields were extracted at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse the required `OrderType` field into a sales channel
pub fn parse_required_channel(raw: &RawInvoice) -> Result<Channel, InvoiceError> {
    let value = raw.require(fields::ORDER_TYPE)?;
    Channel::from_invoice_value(value).ok_or(InvoiceError::InvalidOrderType)
}

/// Parse the required `Item` field into a menu item
pub fn parse_required_item(raw: &RawInvoice) -> Result<MenuItem, InvoiceError> {
    let value = raw.require(fields::ITEM)?;
    MenuItem::from_invoice_value(value).ok_or(InvoiceError::InvalidItem)
}

/// Parse the required `Quantity` field as a non-negative integer
pub fn parse_required_quantity(raw: &RawInvoice) -> Result<u32, InvoiceError> {
    let value = raw.require(fields::QUANTITY)?;

    value
        .parse::<u32>()
        .map_err(|_| InvoiceError::InvalidNumericField(fields::QUANTITY))
}

/// Parse a required price field as a non-negative finite decimal
pub fn parse_required_price(raw: &RawInvoice, key: &'static str) -> Result<f64, InvoiceError> {
    let value = raw.require(key)?;

    let price = value
        .parse::<f64>()
        .map_err(|_| InvoiceError::InvalidNumericField(key))?;

    if !price.is_finite() || price < 0.0 {
        return Err(InvoiceError::InvalidNumericField(key));
    }

    Ok(price)
}
