//! Parser for plain-text restaurant invoice files
//!
//! This module provides a tolerant parser for the `key: value` invoice
//! format. Each file describes exactly one order; lines that do not look
//! like a field are ignored, unknown keys are skipped, and a duplicated key
//! takes its last value. A file is rejected as a whole only when a required
//! field is missing or carries an invalid value.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core parsing orchestration per invoice file
//! - [`fields`] - Raw field extraction and typed field validation
//! - [`stats`] - Parse results and batch statistics
//!
//! ## Usage
//!
//! ```rust
//! use invoice_processor::app::services::invoice_parser::InvoiceParser;
//!
//! let text = "OrderType: IN\nItem: Tea\nQuantity: 2\nPricePerItem: 1.25\nTotalPrice: 2.50\n";
//! let parser = InvoiceParser::new();
//! let parsed = parser.parse(text, "0001.txt").expect("well-formed invoice");
//!
//! assert_eq!(parsed.order.quantity, 2);
//! assert!(parsed.warnings.is_empty());
//! ```

pub mod fields;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use fields::{InvoiceError, RawInvoice};
pub use parser::InvoiceParser;
pub use stats::{ParseStats, ParsedInvoice};
