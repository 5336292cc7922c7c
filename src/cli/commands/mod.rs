//! Command implementations for the greenhouse-gas trends CLI
//!
//! This module contains the command execution logic and shared reporting
//! types. Each command is implemented in its own module:
//! - `fetch`: retrieve, parse and project one gas series
//! - `gases`: list the gas catalog

pub mod fetch;
pub mod gases;
pub mod shared;

// Re-export the main reporting type
pub use shared::FetchStats;

use tokio_util::sync::CancellationToken;

use crate::{Error, Result};
use crate::cli::args::{Args, Commands};

/// Main command runner
///
/// Dispatches to the appropriate subcommand handler. The cancellation token
/// is honoured by any in-flight relay fetch; the listing command completes
/// without I/O and ignores it.
pub async fn run(args: Args, token: CancellationToken) -> Result<FetchStats> {
    match args.command {
        Some(Commands::Fetch(fetch_args)) => fetch::run_fetch(fetch_args, token).await,
        Some(Commands::Gases(gases_args)) => gases::run_gases(gases_args).await,
        None => Err(Error::configuration("No subcommand provided")),
    }
}
