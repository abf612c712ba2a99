//! Rendering and writing of the daily sales summary report
//!
//! The report layout is fixed: a title and rule, the overall order count,
//! then one section per channel listing every menu item with its unit
//! label, whether or not anything was sold.

use std::fmt::Write as _;
use std::path::Path;

use tracing::info;

use super::aggregator::SalesSummary;
use crate::app::models::Channel;
use crate::constants::{REPORT_RULE, REPORT_TITLE, SECTION_IN_RESTAURANT, SECTION_TAKEAWAY};
use crate::{Error, Result};

/// Render a sales summary into its flat-text report form
pub fn render_summary(summary: &SalesSummary) -> String {
    let mut out = String::new();

    out.push_str(REPORT_TITLE);
    out.push('\n');
    out.push_str(REPORT_RULE);
    out.push('\n');
    let _ = writeln!(out, "Total orders: {}", summary.total_orders());

    out.push('\n');
    render_section(&mut out, summary, Channel::InRestaurant, SECTION_IN_RESTAURANT);

    out.push('\n');
    render_section(&mut out, summary, Channel::Takeaway, SECTION_TAKEAWAY);

    out
}

/// Render one channel section of the report
fn render_section(out: &mut String, summary: &SalesSummary, channel: Channel, title: &str) {
    let _ = writeln!(out, "{}: {}", title, summary.channel_orders(channel));

    for totals in summary.item_totals() {
        let _ = writeln!(
            out,
            "{} ({}): {}",
            totals.item.name(),
            totals.item.unit(),
            summary.quantity(channel, totals.item)
        );
    }
}

/// Write the rendered summary to the output file
///
/// Parent directories are created as needed.
pub fn write_summary(summary_text: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::io(
                    format!("Failed to create output directory '{}'", parent.display()),
                    e,
                )
            })?;
        }
    }

    std::fs::write(path, summary_text).map_err(|e| {
        Error::io(
            format!("Failed to write summary to '{}'", path.display()),
            e,
        )
    })?;

    info!("Summary written to: {}", path.display());
    Ok(())
}
