use clap::Parser;
use ghg_trends::cli::{args::Args, commands};
use std::process;
use tokio_util::sync::CancellationToken;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        // Cancellation token for coordinating graceful shutdown
        let cancellation_token = CancellationToken::new();

        let shutdown_signal = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");

            // Cancel any in-flight fetch when Ctrl+C is received
            cancellation_token.cancel();
        };

        tokio::select! {
            result = commands::run(args, cancellation_token.clone()) => {
                result
            }
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down gracefully...");
                Err(ghg_trends::Error::cancelled(
                    "Interrupted by user".to_string()
                ))
            }
        }
    });

    match result {
        Ok(_stats) => {
            // Success - the command has already reported its summary
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Greenhouse-Gas Trends - NOAA Flask Feed Fetcher");
    println!("===============================================");
    println!();
    println!("Fetch NOAA GML greenhouse-gas flask feeds through a CORS relay and");
    println!("project them into chart-ready (year, concentration) series.");
    println!();
    println!("USAGE:");
    println!("    ghg_trends <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    fetch       Fetch and parse one gas series (main command)");
    println!("    gases       List the gas catalog");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Fetch the CO2 series and print it as a table:");
    println!("    ghg_trends fetch co2");
    println!();
    println!("    # Export the last 50 N2O records as JSON:");
    println!("    ghg_trends fetch n2o --limit 50 --format json --output n2o.json");
    println!();
    println!("    # Drop rows with non-numeric values instead of marking gaps:");
    println!("    ghg_trends fetch co2 --drop-missing");
    println!();
    println!("    # List known gases with their sources:");
    println!("    ghg_trends gases --detailed");
    println!();
    println!("For detailed help on any command, use:");
    println!("    ghg_trends <COMMAND> --help");
}
