//! Parse results and batch statistics for invoice processing
//!
//! This module provides the per-file parse result and the running
//! statistics collected while parsing a directory of invoices.

use serde::{Deserialize, Serialize};

use super::fields::InvoiceError;
use crate::app::models::Order;

/// Result of parsing one invoice file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedInvoice {
    /// The validated order described by the invoice
    pub order: Order,

    /// Non-fatal diagnostics attached to the accepted order
    /// (currently only price mismatches)
    pub warnings: Vec<String>,
}

/// Statistics for one parsing run over a set of invoice files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseStats {
    /// Number of invoice files seen
    pub files_seen: usize,

    /// Number of orders successfully parsed
    pub orders_parsed: usize,

    /// Number of files skipped because they failed to parse
    pub files_skipped: usize,

    /// Skipped files with their rejection reasons, as `file: reason`
    pub failures: Vec<String>,

    /// Warnings attached to accepted orders
    pub warnings: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successfully parsed invoice
    pub fn record_order(&mut self, parsed: &ParsedInvoice) {
        self.files_seen += 1;
        self.orders_parsed += 1;
        self.warnings.extend(parsed.warnings.iter().cloned());
    }

    /// Record a rejected invoice file
    pub fn record_failure(&mut self, source: &str, error: &InvoiceError) {
        self.files_seen += 1;
        self.files_skipped += 1;
        self.failures.push(format!("{}: {}", source, error));
    }

    /// Fraction of files successfully parsed, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.files_seen == 0 {
            0.0
        } else {
            (self.orders_parsed as f64 / self.files_seen as f64) * 100.0
        }
    }

    /// Whether the run completed without skipped files or warnings
    pub fn is_clean(&self) -> bool {
        self.files_skipped == 0 && self.warnings.is_empty()
    }
}
