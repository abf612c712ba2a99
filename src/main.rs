use clap::Parser;
use invoice_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Invoice Processor - Restaurant Daily Sales Summary");
    println!("==================================================");
    println!();
    println!("Read a directory of plain-text invoice files, one order per file,");
    println!("and produce a daily sales summary by channel and menu item.");
    println!();
    println!("USAGE:");
    println!("    invoice-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Parse invoices and write the daily summary (main command)");
    println!("    check       Validate invoices without writing a summary");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Process the default invoices/ directory:");
    println!("    invoice-processor process");
    println!();
    println!("    # Process a specific directory with a custom output path:");
    println!("    invoice-processor process --invoices-dir /srv/invoices --out reports/today.txt");
    println!();
    println!("    # Validate invoices before the report run:");
    println!("    invoice-processor check --invoices-dir /srv/invoices");
    println!();
    println!("For detailed help on any command, use:");
    println!("    invoice-processor <COMMAND> --help");
}
