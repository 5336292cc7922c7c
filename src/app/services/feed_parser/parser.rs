//! Core flask feed parser implementation
//!
//! This module provides the line-oriented extraction of (period, value)
//! records from the raw feed text. Parsing is pure and synchronous; the
//! text is assumed to have been retrieved already by the fetch collaborator.

use tracing::{debug, trace};

use super::stats::{ParseResult, ParseStats};
use crate::app::models::{MissingValuePolicy, ObservationRecord};
use crate::constants::feed_format::{COMMENT_MARKER, MIN_TOKENS, PERIOD_WIDTH};

/// Parser for whitespace-delimited flask observation feeds
///
/// The parser focuses on essential behaviour:
/// - Comment (`#`) and blank lines never yield records
/// - Rows with fewer than two whitespace-separated tokens are skipped
/// - The period is the leading four characters of the first token
/// - Non-numeric value tokens follow the configured missing-value policy
///
/// There is no fatal path for malformed input; every failure degrades to
/// fewer records in the output series.
#[derive(Debug, Clone, Default)]
pub struct FeedParser {
    policy: MissingValuePolicy,
}

impl FeedParser {
    /// Create a parser with the default policy (mark missing values)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with an explicit missing-value policy
    pub fn with_policy(policy: MissingValuePolicy) -> Self {
        Self { policy }
    }

    /// The active missing-value policy
    pub fn policy(&self) -> MissingValuePolicy {
        self.policy
    }

    /// Parse a complete feed payload into an ordered series
    ///
    /// Records are appended in source line order. The same text always
    /// produces the same result; the parser holds no state between calls.
    pub fn parse(&self, text: &str) -> ParseResult {
        let mut stats = ParseStats::new();
        let mut records = Vec::new();

        for line in text.split('\n') {
            stats.total_lines += 1;

            if line.starts_with(COMMENT_MARKER) {
                stats.comment_lines += 1;
                continue;
            }

            if line.trim().is_empty() {
                stats.blank_lines += 1;
                continue;
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() < MIN_TOKENS {
                stats.malformed_lines += 1;
                trace!("Skipped malformed line: '{}'", line);
                continue;
            }

            // The first token packs a compact timestamp; its leading four
            // characters are the calendar year. Shorter tokens pass through
            // whole.
            let period: String = tokens[0].chars().take(PERIOD_WIDTH).collect();

            match tokens[1].parse::<f64>() {
                Ok(value) => {
                    records.push(ObservationRecord::new(period, Some(value)));
                    stats.records_parsed += 1;
                }
                Err(_) => {
                    stats.missing_values += 1;
                    match self.policy {
                        MissingValuePolicy::MarkMissing => {
                            records.push(ObservationRecord::new(period, None));
                            stats.records_parsed += 1;
                        }
                        MissingValuePolicy::DropRecord => {
                            trace!("Dropped row with non-numeric value: '{}'", tokens[1]);
                        }
                    }
                }
            }
        }

        debug!(
            "Parsed {} records from {} lines ({} comments, {} blank, {} malformed, {} missing)",
            stats.records_parsed,
            stats.total_lines,
            stats.comment_lines,
            stats.blank_lines,
            stats.malformed_lines,
            stats.missing_values
        );

        ParseResult { records, stats }
    }
}
