//! Test fixtures and helpers for flask feed parser testing
//!
//! Provides synthetic feed documents shaped like the NOAA GML surface-flask
//! event files: a `#` comment preamble followed by whitespace-delimited rows
//! whose first token is a compact timestamp and second token the measured
//! concentration.

// Test modules
mod parser_tests;

/// A realistic feed excerpt with a comment header, data rows, a sentinel
/// value row and interleaved blank lines
pub fn create_test_feed() -> String {
    r#"# number_of_header_lines: 4
# data_fields: sample_datetime analysis_value site flag
# units: ppm
# contact: NOAA GML Carbon Cycle Group

2019-03-02T11:40 410.02 MLO ...
2019-09-14T12:05 408.54 MLO ...

2020-01-21T11:55 413.37 MLO ...
2020-06-30T12:10 416.92 MLO ...
2021-04-08T11:45 419.05 MLO ...
"#
    .to_string()
}

/// A feed with one row whose value token is a non-numeric sentinel
pub fn create_feed_with_bad_value() -> String {
    "2019-03-02T11:40 410.02 MLO\n2020-01-21T11:55 **** MLO\n2021-04-08T11:45 419.05 MLO\n"
        .to_string()
}

/// A feed containing only comments and blank lines
pub fn create_commentary_only_feed() -> String {
    "# nothing here\n\n   \n# still nothing\n".to_string()
}
