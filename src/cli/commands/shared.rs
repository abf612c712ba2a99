//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! the command implementations: logging setup, configuration loading,
//! invoice discovery, and the parse loop itself.

use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::app::services::invoice_parser::{InvoiceParser, ParseStats, ParsedInvoice};
use crate::config::Config;
use crate::{Error, Result};

/// Run statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of invoice files discovered
    pub files_discovered: usize,
    /// Number of orders folded into the summary
    pub orders_aggregated: usize,
    /// Number of invoice files skipped as malformed or unreadable
    pub invoices_skipped: usize,
    /// Number of price mismatch warnings on accepted orders
    pub price_warnings: usize,
    /// Total processing time
    pub processing_time: Duration,
    /// Output file sizes in bytes
    pub output_sizes: Vec<(String, u64)>,
}

impl RunStats {
    /// Calculate total output size in bytes
    pub fn total_output_size(&self) -> u64 {
        self.output_sizes.iter().map(|(_, size)| size).sum()
    }

    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("invoice_processor={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration from an optional config file over defaults
pub fn load_configuration(config_file: Option<&Path>) -> Result<Config> {
    info!("Loading configuration");

    let config = Config::load(config_file)?;
    debug!("Loaded configuration: {:?}", config);

    Ok(config)
}

/// Discover invoice files under the invoices directory
///
/// Walks the directory recursively, keeping files with the configured
/// extension. The listing is sorted so diagnostics are stable; the summary
/// itself does not depend on processing order.
pub fn discover_invoice_files(invoices_dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !invoices_dir.is_dir() {
        return Err(Error::invoices_dir_not_found(
            invoices_dir.display().to_string(),
        ));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(invoices_dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension));
        if matches {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    debug!(
        "Discovered {} invoice files in {}",
        files.len(),
        invoices_dir.display()
    );

    Ok(files)
}

/// Identifier used for one invoice file in diagnostics
pub fn invoice_source_id(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string()
}

/// Parse every discovered invoice file, collecting results and statistics
///
/// Malformed or unreadable files are recorded and skipped; nothing here
/// aborts the run.
pub fn parse_invoice_files(
    files: &[PathBuf],
    progress_bar: Option<&ProgressBar>,
) -> (Vec<ParsedInvoice>, ParseStats) {
    let parser = InvoiceParser::new();
    let mut invoices = Vec::new();
    let mut stats = ParseStats::new();

    for file in files {
        let source = invoice_source_id(file);

        match std::fs::read_to_string(file) {
            Ok(text) => match parser.parse(&text, &source) {
                Ok(parsed) => {
                    for warning in &parsed.warnings {
                        warn!("{}", warning);
                    }
                    stats.record_order(&parsed);
                    invoices.push(parsed);
                }
                Err(e) => {
                    warn!("Skipping invoice '{}': {}", source, e);
                    stats.record_failure(&source, &e);
                }
            },
            Err(e) => {
                warn!("Skipping unreadable invoice '{}': {}", source, e);
                stats.files_seen += 1;
                stats.files_skipped += 1;
                stats.failures.push(format!("{}: unreadable file ({})", source, e));
            }
        }

        if let Some(pb) = progress_bar {
            pb.inc(1);
        }
    }

    (invoices, stats)
}

/// Create a progress bar for invoice processing
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_stats_default() {
        let stats = RunStats::default();
        assert_eq!(stats.files_discovered, 0);
        assert_eq!(stats.total_output_size(), 0);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(RunStats::format_size(0), "0 B");
        assert_eq!(RunStats::format_size(512), "512 B");
        assert_eq!(RunStats::format_size(2048), "2.00 KB");
        assert_eq!(RunStats::format_size(5 * 1024 * 1024), "5.00 MB");
    }

    #[test]
    fn test_discover_invoice_files_filters_and_sorts() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("b.txt"), "x").unwrap();
        std::fs::write(temp_dir.path().join("a.txt"), "x").unwrap();
        std::fs::write(temp_dir.path().join("notes.md"), "x").unwrap();

        let nested = temp_dir.path().join("archive");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join("c.TXT"), "x").unwrap();

        let files = discover_invoice_files(temp_dir.path(), "txt").unwrap();
        let names: Vec<String> = files.iter().map(|p| invoice_source_id(p)).collect();

        // Sorted by full path, so the nested archive/ entry lands between
        // the two top-level files
        assert_eq!(names, vec!["a.txt", "c.TXT", "b.txt"]);
    }

    #[test]
    fn test_discover_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("absent");

        let result = discover_invoice_files(&missing, "txt");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_invoice_files_mixed_batch() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("good.txt"),
            "OrderType: IN\nItem: Tea\nQuantity: 1\nPricePerItem: 1.25\nTotalPrice: 1.25\n",
        )
        .unwrap();
        std::fs::write(temp_dir.path().join("bad.txt"), "Item: Tea\n").unwrap();

        let files = discover_invoice_files(temp_dir.path(), "txt").unwrap();
        let (invoices, stats) = parse_invoice_files(&files, None);

        assert_eq!(invoices.len(), 1);
        assert_eq!(stats.files_seen, 2);
        assert_eq!(stats.orders_parsed, 1);
        assert_eq!(stats.files_skipped, 1);
        assert_eq!(
            stats.failures,
            vec!["bad.txt: missing field: ordertype".to_string()]
        );
    }
}
