//! Command implementations for the invoice processor CLI
//!
//! This module contains the main command execution logic, progress
//! reporting, and error handling for the CLI interface. Each command is
//! implemented in its own module:
//! - `process`: full pipeline producing the daily summary file
//! - `check`: validation-only pass over the invoices directory

pub mod check;
pub mod process;
pub mod shared;

// Re-export the main types for convenient access
pub use shared::RunStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the invoice processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub fn run(args: Args) -> Result<RunStats> {
    match args.get_command() {
        Commands::Process(process_args) => process::run_process(process_args),
        Commands::Check(check_args) => check::run_check(check_args),
    }
}
