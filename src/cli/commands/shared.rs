//! Shared components for CLI commands
//!
//! Common reporting types, logging setup and progress helpers used across
//! the command implementations.

use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::Result;
use crate::app::services::feed_parser::ParseStats;

/// Fetch statistics for reporting across commands
#[derive(Debug, Clone, Default)]
pub struct FetchStats {
    /// Gas id that was fetched or listed
    pub gas_id: String,

    /// Whether the series came from a live feed (vs. embedded sample)
    pub from_feed: bool,

    /// Parser bookkeeping for the payload
    pub parse: ParseStats,

    /// Records emitted after limiting
    pub records_emitted: usize,

    /// When the fetch completed
    pub fetched_at: Option<DateTime<Utc>>,

    /// Total command time
    pub elapsed: Duration,
}

impl FetchStats {
    /// One-line human summary for the end of a run
    pub fn summary(&self) -> String {
        let source = if self.from_feed { "feed" } else { "sample" };
        format!(
            "{}: {} records from {} ({} missing, {} malformed lines skipped) in {:.2}s",
            self.gas_id,
            self.records_emitted,
            source,
            self.parse.missing_values,
            self.parse.malformed_lines,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ghg_trends={}", log_level)));

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

    Ok(())
}

/// Spinner shown while a relay fetch is outstanding
pub fn fetch_spinner(gas_id: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Fetching {} feed through relay...", gas_id));
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_names_the_source() {
        let feed_stats = FetchStats {
            gas_id: "co2".to_string(),
            from_feed: true,
            records_emitted: 12,
            ..Default::default()
        };
        assert!(feed_stats.summary().contains("from feed"));

        let sample_stats = FetchStats {
            gas_id: "sf6".to_string(),
            from_feed: false,
            ..Default::default()
        };
        assert!(sample_stats.summary().contains("from sample"));
    }
}
