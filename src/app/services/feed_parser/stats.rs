//! Parsing statistics and result structures for flask feed processing
//!
//! This module provides types for tracking how much of a feed survived
//! parsing and organizing the extracted series for downstream projection.

use crate::app::models::ObservationRecord;

/// Parsing result with the extracted series and basic statistics
///
/// Records appear in source line order. The parser neither sorts nor
/// verifies chronology; the upstream feeds are time-ordered in practice.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    /// Successfully extracted observation records
    pub records: Vec<ObservationRecord>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

impl ParseResult {
    /// Result representing an absent or empty payload
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            stats: ParseStats::new(),
        }
    }
}

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of lines in the payload
    pub total_lines: usize,

    /// Lines skipped as comments
    pub comment_lines: usize,

    /// Lines skipped as blank or all-whitespace
    pub blank_lines: usize,

    /// Data lines skipped for having fewer than two tokens
    pub malformed_lines: usize,

    /// Records whose value token was non-numeric (marked or dropped
    /// depending on policy)
    pub missing_values: usize,

    /// Number of records emitted into the series
    pub records_parsed: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_lines: 0,
            comment_lines: 0,
            blank_lines: 0,
            malformed_lines: 0,
            missing_values: 0,
            records_parsed: 0,
        }
    }

    /// Lines that were candidates for record extraction
    pub fn data_lines(&self) -> usize {
        self.total_lines - self.comment_lines - self.blank_lines
    }

    /// Calculate success rate over data lines as a percentage
    pub fn success_rate(&self) -> f64 {
        let data_lines = self.data_lines();
        if data_lines == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / data_lines as f64) * 100.0
        }
    }

    /// Check if parsing was mostly successful (>90% of data lines)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
