//! Command-line argument definitions for the greenhouse-gas trends tool
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::app::models::MissingValuePolicy;
use crate::config::FetchConfig;
use crate::constants::{DEFAULT_GAS, relay};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the greenhouse-gas trends tool
///
/// Fetches NOAA GML greenhouse-gas flask observation feeds through a CORS
/// relay, parses them into year-indexed series, and emits chart-ready data.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ghg_trends",
    version,
    about = "Fetch NOAA greenhouse-gas feeds and project them into chart-ready series",
    long_about = "Retrieves NOAA GML flask observation feeds through a CORS relay, parses the \
                  whitespace-delimited text into (year, concentration) series, and projects them \
                  into the parallel label/value sequences a line-chart consumer expects. Gases \
                  without a public feed fall back to embedded sample series from the gas catalog."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Fetch and parse one gas series, then emit its chart projection
    Fetch(FetchArgs),
    /// List the gas catalog
    Gases(GasesArgs),
}

/// Arguments for the fetch command
#[derive(Debug, Clone, Parser)]
pub struct FetchArgs {
    /// Catalog id of the gas to fetch (e.g. co2, n2o, ch4, sf6)
    #[arg(value_name = "GAS", default_value = DEFAULT_GAS)]
    pub gas: String,

    /// Base URL of the CORS relay
    ///
    /// The feed URL is passed to the relay's /get endpoint as an encoded
    /// query parameter. Defaults to the public allorigins relay.
    #[arg(
        long = "relay",
        value_name = "URL",
        help = "Base URL of the CORS relay"
    )]
    pub relay: Option<String>,

    /// Request timeout in seconds
    #[arg(
        long = "timeout",
        value_name = "SECS",
        help = "Request timeout in seconds"
    )]
    pub timeout_secs: Option<u64>,

    /// Drop records whose value token is non-numeric
    ///
    /// By default such records are kept with a missing-value marker so the
    /// chart shows a gap. This flag removes them from the series entirely.
    #[arg(
        long = "drop-missing",
        help = "Drop records with non-numeric values instead of marking them missing"
    )]
    pub drop_missing: bool,

    /// TOML file replacing the built-in gas catalog
    #[arg(
        long = "catalog",
        value_name = "PATH",
        help = "TOML file replacing the built-in gas catalog"
    )]
    pub catalog: Option<PathBuf>,

    /// Keep only the most recent N records
    #[arg(
        long = "limit",
        value_name = "N",
        help = "Keep only the most recent N records"
    )]
    pub limit: Option<usize>,

    /// Output format for the chart projection
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Output format"
    )]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Logging verbosity
    #[arg(
        long = "log-level",
        value_enum,
        default_value_t = LogLevel::Info,
        help = "Logging verbosity"
    )]
    pub log_level: LogLevel,

    /// Suppress progress output and compact the logs
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl FetchArgs {
    /// Validate argument combinations before running
    pub fn validate(&self) -> Result<()> {
        if self.gas.trim().is_empty() {
            return Err(Error::configuration("Gas id must not be empty"));
        }

        if let Some(0) = self.limit {
            return Err(Error::configuration("--limit must be at least 1"));
        }

        Ok(())
    }

    /// Build the fetch configuration, layering CLI overrides on defaults
    pub fn to_config(&self) -> FetchConfig {
        let defaults = FetchConfig::default();

        FetchConfig {
            relay_base: self
                .relay
                .clone()
                .unwrap_or_else(|| relay::DEFAULT_BASE.to_string()),
            timeout_secs: self.timeout_secs.unwrap_or(defaults.timeout_secs),
            missing_value_policy: if self.drop_missing {
                MissingValuePolicy::DropRecord
            } else {
                MissingValuePolicy::MarkMissing
            },
            catalog_path: self.catalog.clone(),
        }
    }

    /// Effective log level as a tracing filter directive
    pub fn get_log_level(&self) -> &'static str {
        self.log_level.as_filter()
    }
}

/// Arguments for the gases command
#[derive(Debug, Clone, Parser)]
pub struct GasesArgs {
    /// Show descriptions, units and series sources
    #[arg(long = "detailed", help = "Show descriptions, units and sources")]
    pub detailed: bool,

    /// Output format for the listing
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value_t = ListFormat::Text,
        help = "Listing format"
    )]
    pub format: ListFormat,

    /// TOML file replacing the built-in gas catalog
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Logging verbosity
    #[arg(
        long = "log-level",
        value_enum,
        default_value_t = LogLevel::Warn,
        help = "Logging verbosity"
    )]
    pub log_level: LogLevel,
}

impl GasesArgs {
    /// Effective log level as a tracing filter directive
    pub fn get_log_level(&self) -> &'static str {
        self.log_level.as_filter()
    }
}

/// Chart output formats for the fetch command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON document with stats and the chart projection
    Json,
    /// Two-column CSV (period,value)
    Csv,
}

/// Listing formats for the gases command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Text,
    Json,
}

/// Logging verbosity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
