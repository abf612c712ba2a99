//! Application constants for the invoice processor
//!
//! This module contains the invoice field keys, menu definitions, report
//! labels, and default values used throughout the application.

// =============================================================================
// Invoice Field Keys
// =============================================================================

/// Recognized invoice field keys (lowercased form, as stored after parsing)
pub mod fields {
    pub const ORDER_TYPE: &str = "ordertype";
    pub const ITEM: &str = "item";
    pub const QUANTITY: &str = "quantity";
    pub const PRICE_PER_ITEM: &str = "priceperitem";
    pub const TOTAL_PRICE: &str = "totalprice";
}

/// Required invoice fields in the order they are checked and reported
pub const REQUIRED_FIELDS: &[&str] = &[
    fields::ORDER_TYPE,
    fields::ITEM,
    fields::QUANTITY,
    fields::PRICE_PER_ITEM,
    fields::TOTAL_PRICE,
];

// =============================================================================
// Order Channel Values
// =============================================================================

/// Wire value for an in-restaurant order (matched case-insensitively)
pub const CHANNEL_IN: &str = "in";

/// Wire value for a takeaway order (matched case-insensitively)
pub const CHANNEL_OUT: &str = "out";

// =============================================================================
// Price Consistency
// =============================================================================

/// Maximum tolerated absolute difference between the stated total price and
/// `quantity * price_per_item`. A larger discrepancy produces a warning; the
/// order is still accepted.
pub const PRICE_TOLERANCE: f64 = 0.01;

// =============================================================================
// Report Layout
// =============================================================================

/// Title line of the daily sales summary report
pub const REPORT_TITLE: &str = "Daily Sales Summary:";

/// Rule printed under the report title
pub const REPORT_RULE: &str = "--------------------";

/// Section heading for in-restaurant orders
pub const SECTION_IN_RESTAURANT: &str = "Orders In-Restaurant";

/// Section heading for takeaway orders
pub const SECTION_TAKEAWAY: &str = "Orders Takeaway";

// =============================================================================
// File and Directory Defaults
// =============================================================================

/// File extension of invoice files within the invoices directory
pub const INVOICE_FILE_EXTENSION: &str = "txt";

/// Default invoices directory, relative to the working directory
pub const DEFAULT_INVOICES_DIR: &str = "invoices";

/// Default output path for the rendered summary
pub const DEFAULT_SUMMARY_FILE: &str = "summary.txt";

/// Configuration file name within the user config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name used for the default config location
pub const APP_DIR_NAME: &str = "invoice-processor";
