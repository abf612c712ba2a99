//! Command-line argument definitions for the invoice processor
//!
//! This module defines the complete CLI interface using the clap derive
//! API, along with argument validation shared by the command
//! implementations.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::{Error, Result};

/// CLI arguments for the invoice processor
///
/// Aggregates a directory of plain-text restaurant invoice files into a
/// daily sales summary report.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "invoice-processor",
    version,
    about = "Aggregate restaurant invoice files into a daily sales summary",
    long_about = "Reads a directory of plain-text invoice files, one order per file, and \
                  produces a daily sales summary with order counts per channel and \
                  per-item quantities. Malformed invoices are reported and skipped \
                  without aborting the run."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the invoice processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse invoices and write the daily sales summary (main command)
    Process(ProcessArgs),
    /// Validate invoices and report problems without writing a summary
    Check(CheckArgs),
}

/// Arguments for the process command (main summary generation)
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Directory containing invoice files
    ///
    /// Each file describes one order in `key: value` lines.
    /// If not specified, defaults to ./invoices
    #[arg(
        short = 'i',
        long = "invoices-dir",
        value_name = "PATH",
        help = "Directory containing invoice files"
    )]
    pub invoices_dir: Option<PathBuf>,

    /// Output path for the daily summary file
    ///
    /// Parent directories are created if needed.
    /// If not specified, defaults to ./summary.txt
    #[arg(
        short = 'o',
        long = "out",
        value_name = "FILE",
        help = "Path to write the daily summary file"
    )]
    pub output_file: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML configuration file for default paths and logging. If not
    /// specified, looks for ~/.config/invoice-processor/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Overwrite an existing summary file
    ///
    /// Without this flag an existing output file triggers an interactive
    /// confirmation, or an error in quiet mode.
    #[arg(long = "force", help = "Overwrite an existing summary file without prompting")]
    pub force_overwrite: bool,

    /// Perform a dry run without writing anything
    ///
    /// Shows which invoice files would be processed and where the summary
    /// would be written.
    #[arg(
        long = "dry-run",
        help = "Show what would be processed without writing the summary"
    )]
    pub dry_run: bool,

    /// Output format for the console report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Console output format for the summary"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the check command (validation without output)
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Directory containing invoice files to validate
    #[arg(
        short = 'i',
        long = "invoices-dir",
        value_name = "PATH",
        help = "Directory containing invoice files"
    )]
    pub invoices_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for the console report
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Human,
    /// JSON report for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ProcessArgs {
    /// Validate the process command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // Validate invoices directory exists (only if explicitly provided)
        if let Some(invoices_dir) = &self.invoices_dir {
            if !invoices_dir.exists() {
                return Err(Error::configuration(format!(
                    "Invoices directory does not exist: {}",
                    invoices_dir.display()
                )));
            }

            if !invoices_dir.is_dir() {
                return Err(Error::configuration(format!(
                    "Invoices path is not a directory: {}",
                    invoices_dir.display()
                )));
            }
        }

        // Validate config file exists if specified
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl CheckArgs {
    /// Validate the check command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(invoices_dir) = &self.invoices_dir {
            if !invoices_dir.exists() {
                return Err(Error::configuration(format!(
                    "Invoices directory does not exist: {}",
                    invoices_dir.display()
                )));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for ProcessArgs {
    fn default() -> Self {
        Self {
            invoices_dir: None,
            output_file: None,
            config_file: None,
            force_overwrite: false,
            dry_run: false,
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_process_args_validation() {
        let temp_dir = TempDir::new().unwrap();

        // Valid: existing directory
        let args = ProcessArgs {
            invoices_dir: Some(temp_dir.path().to_path_buf()),
            ..Default::default()
        };
        assert!(args.validate().is_ok());

        // Invalid: missing directory
        let args = ProcessArgs {
            invoices_dir: Some(temp_dir.path().join("missing")),
            ..Default::default()
        };
        assert!(args.validate().is_err());

        // Invalid: invoices path is a file
        let file_path = temp_dir.path().join("not-a-dir.txt");
        std::fs::write(&file_path, "x").unwrap();
        let args = ProcessArgs {
            invoices_dir: Some(file_path),
            ..Default::default()
        };
        assert!(args.validate().is_err());

        // Invalid: missing config file
        let args = ProcessArgs {
            config_file: Some(temp_dir.path().join("missing.toml")),
            ..Default::default()
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level_mapping() {
        let mut args = ProcessArgs::default();
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 5;
        assert_eq!(args.get_log_level(), "trace");

        let quiet = ProcessArgs {
            quiet: true,
            ..Default::default()
        };
        assert_eq!(quiet.get_log_level(), "error");
        assert!(!quiet.show_progress());
    }

    #[test]
    fn test_cli_parsing_round_trip() {
        let args = Args::try_parse_from([
            "invoice-processor",
            "process",
            "--invoices-dir",
            "/tmp/invoices",
            "--out",
            "/tmp/summary.txt",
            "--force",
        ])
        .unwrap();

        match args.get_command() {
            Commands::Process(process_args) => {
                assert_eq!(
                    process_args.invoices_dir,
                    Some(PathBuf::from("/tmp/invoices"))
                );
                assert_eq!(
                    process_args.output_file,
                    Some(PathBuf::from("/tmp/summary.txt"))
                );
                assert!(process_args.force_overwrite);
                assert_eq!(process_args.output_format, OutputFormat::Human);
            }
            _ => panic!("expected process command"),
        }
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["invoice-processor", "process", "-q", "-v"]);
        assert!(result.is_err());
    }
}
