//! Flask feed parser for NOAA greenhouse-gas observation text
//!
//! This module provides a permissive line-oriented parser for the
//! whitespace-delimited flask feeds. The feeds intermix `#` comment lines,
//! blank lines and fixed-token data rows with no in-band schema, so the
//! parser trades strict validation for availability: malformed rows are
//! counted and skipped, never fatal.
//!
//! ## Architecture
//!
//! - [`parser`] - Line classification, tokenization and record extraction
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use ghg_trends::app::services::feed_parser::FeedParser;
//!
//! let parser = FeedParser::new();
//! let result = parser.parse("# header\n2020 414.2\n2021 416.5\n");
//!
//! assert_eq!(result.records.len(), 2);
//! assert_eq!(result.stats.records_parsed, 2);
//! ```

pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::FeedParser;
pub use stats::{ParseResult, ParseStats};
