//! Check command implementation for the invoice processor CLI
//!
//! Runs the parser over the invoices directory and reports every failure
//! and price warning without producing a summary file. Useful for vetting
//! a day's invoices before the report run.

use std::time::Instant;

use colored::Colorize;
use tracing::{debug, info};

use super::shared::{
    RunStats, discover_invoice_files, load_configuration, parse_invoice_files, setup_logging,
};
use crate::Result;
use crate::cli::args::CheckArgs;

/// Check command runner
pub fn run_check(args: CheckArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), false)?;

    info!("Checking invoices");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(args.config_file.as_deref())?;
    let invoices_dir = args
        .invoices_dir
        .clone()
        .unwrap_or_else(|| config.processing.invoices_dir.clone());

    let files = discover_invoice_files(&invoices_dir, &config.processing.file_extension)?;
    info!(
        "Discovered {} invoice files in {}",
        files.len(),
        invoices_dir.display()
    );

    let (_, parse_stats) = parse_invoice_files(&files, None);

    for failure in &parse_stats.failures {
        println!("{} {}", "error:".red().bold(), failure);
    }
    for warning in &parse_stats.warnings {
        println!("{} {}", "warning:".yellow().bold(), warning);
    }

    let marker = if parse_stats.is_clean() {
        "✓".green().bold()
    } else {
        "!".yellow().bold()
    };
    println!(
        "{} {} of {} invoices parsed cleanly ({:.0}% success rate)",
        marker,
        parse_stats.orders_parsed,
        parse_stats.files_seen,
        parse_stats.success_rate()
    );

    Ok(RunStats {
        files_discovered: files.len(),
        orders_aggregated: parse_stats.orders_parsed,
        invoices_skipped: parse_stats.files_skipped,
        price_warnings: parse_stats.warnings.len(),
        processing_time: start_time.elapsed(),
        output_sizes: Vec::new(),
    })
}
