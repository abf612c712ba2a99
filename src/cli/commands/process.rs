//! Process command implementation for the invoice processor CLI
//!
//! This module contains the complete pipeline: configuration loading,
//! invoice discovery and parsing, aggregation, and summary output to both
//! the output file and the console.

use std::path::{Path, PathBuf};
use std::time::Instant;

use colored::Colorize;
use indicatif::HumanDuration;
use tracing::{debug, info, warn};

use super::shared::{
    RunStats, create_progress_bar, discover_invoice_files, load_configuration,
    parse_invoice_files, setup_logging,
};
use crate::app::services::invoice_parser::ParseStats;
use crate::app::services::sales_summary::{
    SalesSummary, SummaryAggregator, render_summary, write_summary,
};
use crate::cli::args::{OutputFormat, ProcessArgs};
use crate::cli::input;
use crate::{Error, Result};

/// Process command runner
///
/// Orchestrates the whole workflow:
/// 1. Set up logging and configuration
/// 2. Discover and parse invoice files
/// 3. Aggregate accepted orders into the daily summary
/// 4. Write the summary file and echo the report to the console
pub fn run_process(args: ProcessArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting invoice processor");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(args.config_file.as_deref())?;

    // CLI arguments override configuration
    let invoices_dir = args
        .invoices_dir
        .clone()
        .unwrap_or_else(|| config.processing.invoices_dir.clone());
    let output_file = args
        .output_file
        .clone()
        .unwrap_or_else(|| config.processing.summary_file.clone());

    let files = discover_invoice_files(&invoices_dir, &config.processing.file_extension)?;
    info!(
        "Discovered {} invoice files in {}",
        files.len(),
        invoices_dir.display()
    );

    if args.dry_run {
        return run_dry_run(&files, &output_file, start_time);
    }

    // An existing summary file is only replaced with consent
    if output_file.exists() && !args.force_overwrite {
        if args.quiet {
            return Err(Error::configuration(format!(
                "Summary file '{}' already exists (use --force to overwrite)",
                output_file.display()
            )));
        }

        if !input::confirm_overwrite(&output_file)? {
            info!("Overwrite declined, nothing written");
            return Ok(RunStats {
                files_discovered: files.len(),
                processing_time: start_time.elapsed(),
                ..Default::default()
            });
        }
    }

    if files.is_empty() {
        warn!("No invoice files found in {}", invoices_dir.display());
    }

    let progress_bar = if args.show_progress() && !files.is_empty() {
        Some(create_progress_bar(
            files.len() as u64,
            "Parsing invoices...",
        ))
    } else {
        None
    };

    let (invoices, parse_stats) = parse_invoice_files(&files, progress_bar.as_ref());

    if let Some(pb) = &progress_bar {
        pb.finish_and_clear();
    }

    let mut aggregator = SummaryAggregator::new();
    for parsed in &invoices {
        aggregator.accumulate(&parsed.order);
    }
    let summary = aggregator.finalize();

    let summary_text = render_summary(&summary);
    write_summary(&summary_text, &output_file)?;

    let output_size = std::fs::metadata(&output_file).map(|m| m.len()).unwrap_or(0);

    let stats = RunStats {
        files_discovered: files.len(),
        orders_aggregated: parse_stats.orders_parsed,
        invoices_skipped: parse_stats.files_skipped,
        price_warnings: parse_stats.warnings.len(),
        processing_time: start_time.elapsed(),
        output_sizes: vec![(output_file.display().to_string(), output_size)],
    };

    match args.output_format {
        OutputFormat::Human => {
            if !args.quiet {
                println!("{}", summary_text);
                print_diagnostics(&parse_stats);
                print_final_report(&stats, &output_file);
            }
        }
        OutputFormat::Json => {
            println!("{}", render_json_report(&summary, &parse_stats)?);
        }
    }

    info!(
        "Processing complete: {} of {} invoices aggregated",
        stats.orders_aggregated, stats.files_discovered
    );

    Ok(stats)
}

/// Perform a dry run showing what would be processed
fn run_dry_run(files: &[PathBuf], output_file: &Path, start_time: Instant) -> Result<RunStats> {
    info!("Performing dry run - nothing will be written");

    for file in files {
        info!("Would process invoice: {}", file.display());
    }

    info!(
        "Dry run complete: {} invoices would be processed, summary would be written to {}",
        files.len(),
        output_file.display()
    );

    Ok(RunStats {
        files_discovered: files.len(),
        processing_time: start_time.elapsed(),
        ..Default::default()
    })
}

/// Render the machine-readable report for `--output-format json`
fn render_json_report(summary: &SalesSummary, parse_stats: &ParseStats) -> Result<String> {
    let report = serde_json::json!({
        "summary": summary,
        "warnings": parse_stats.warnings,
        "failures": parse_stats.failures,
    });

    Ok(serde_json::to_string_pretty(&report)?)
}

/// Print collected warnings and skipped files to the console
fn print_diagnostics(parse_stats: &ParseStats) {
    for warning in &parse_stats.warnings {
        println!("{} {}", "warning:".yellow().bold(), warning);
    }

    for failure in &parse_stats.failures {
        println!("{} skipped {}", "error:".red().bold(), failure);
    }

    if !parse_stats.is_clean() {
        println!();
    }
}

/// Print the closing status line for the run
fn print_final_report(stats: &RunStats, output_file: &Path) {
    println!(
        "{} Processing complete in {}",
        "✓".green().bold(),
        HumanDuration(stats.processing_time)
    );
    println!(
        "  Invoices aggregated: {} of {} discovered",
        stats.orders_aggregated, stats.files_discovered
    );
    if stats.invoices_skipped > 0 {
        println!("  Invoices skipped: {}", stats.invoices_skipped);
    }
    println!(
        "  Summary written to: {} ({})",
        output_file.display(),
        RunStats::format_size(stats.total_output_size())
    );
}
