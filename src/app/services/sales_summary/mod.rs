//! Daily sales summary aggregation and reporting
//!
//! This module accumulates validated orders into per-channel and per-item
//! totals and renders the result as the flat-text daily summary report.
//!
//! ## Architecture
//!
//! - [`aggregator`] - Running totals and the frozen [`SalesSummary`]
//! - [`report`] - Report rendering and output file writing
//!
//! Aggregation is a pure accumulate-then-finalize pass: every operation is
//! a commutative sum, so the resulting summary is independent of the order
//! in which invoices are processed.

pub mod aggregator;
pub mod report;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use aggregator::{ItemTotals, SalesSummary, SummaryAggregator};
pub use report::{render_summary, write_summary};
