use anyhow::Context;
use clap::Parser;
use feed_record::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let result = commands::run(args).context("feed-record failed");

    match result {
        Ok(()) => process::exit(0),
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Feed Record - IoT Telemetry Record Codec");
    println!("========================================");
    println!();
    println!("Encode typed readings into value,lat,lon,ele records and decode them back.");
    println!();
    println!("USAGE:");
    println!("    feed-record <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    encode      Encode a typed reading into a CSV record");
    println!("    decode      Decode a CSV record and show its typed interpretations");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config     Path to configuration file (TOML format)");
    println!("    -v, --verbose    Increase logging verbosity");
    println!("    -q, --quiet      Suppress log output except errors");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Encode a temperature with its location:");
    println!("    feed-record encode 21.5 --kind double --lat 52.37 --lon 4.89 --ele 2");
    println!();
    println!("    # Encode in the AVR scientific style:");
    println!("    feed-record encode 21.5 --kind float --style scientific");
    println!();
    println!("    # Decode a record as JSON:");
    println!("    feed-record decode 'on,40.7267,-74.0049,12.50' --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    feed-record <COMMAND> --help");
}
