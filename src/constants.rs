//! Application constants for the greenhouse-gas trends tool
//!
//! This module contains feed locations, relay settings, and parser
//! constants used throughout the application.

// =============================================================================
// Gas Identifiers
// =============================================================================

/// Catalog identifiers for the built-in gases, in display order
pub const GAS_IDS: &[&str] = &["co2", "n2o", "ch4", "hfcs", "pfcs", "sf6"];

/// Default gas fetched when none is specified
pub const DEFAULT_GAS: &str = "co2";

// =============================================================================
// Feed Locations
// =============================================================================

/// NOAA GML Mauna Loa surface flask feed for CO2
pub const CO2_FEED_URL: &str =
    "https://gml.noaa.gov/aftp/data/trace_gases/co2/flask/surface/txt/co2_mlo_surface-flask_1_ccgg_event.txt";

/// NOAA GML Mauna Loa surface flask feed for N2O
pub const N2O_FEED_URL: &str =
    "https://gml.noaa.gov/aftp/data/trace_gases/n2o/flask/surface/txt/n2o_mlo_surface-flask_1_ccgg_event.txt";

// =============================================================================
// CORS Relay
// =============================================================================

/// Relay settings for reaching the NOAA feeds from environments that
/// cannot issue cross-origin requests directly
pub mod relay {
    /// Default relay base URL (allorigins JSON envelope endpoint lives
    /// under `{base}/get?url=...`)
    pub const DEFAULT_BASE: &str = "https://api.allorigins.win";

    /// Envelope endpoint path on the relay
    pub const GET_PATH: &str = "/get";

    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
}

// =============================================================================
// Feed Format
// =============================================================================

/// Text layout of the flask feeds: whitespace-delimited rows interleaved
/// with `#` comment lines, no in-band schema
pub mod feed_format {
    /// Comment marker opening non-data lines
    pub const COMMENT_MARKER: char = '#';

    /// Minimum token count for a line to yield a record
    pub const MIN_TOKENS: usize = 2;

    /// Leading characters of the first token that encode the calendar year
    pub const PERIOD_WIDTH: usize = 4;
}
