//! Greenhouse-gas trends library
//!
//! A Rust library for retrieving NOAA GML greenhouse-gas flask observation
//! feeds through a CORS-relay proxy and turning them into chart-ready series.
//!
//! This library provides tools for:
//! - Parsing whitespace-delimited flask feed text with comment/blank handling
//! - Fetching feeds through a CORS relay with timeout and cancellation
//! - Maintaining a gas catalog with live feeds and embedded sample series
//! - Projecting parsed series into parallel label/value chart sequences
//! - Graceful degradation on malformed rows and failed fetches

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod chart_data;
        pub mod feed_fetcher;
        pub mod feed_parser;
        pub mod gas_catalog;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{GasInfo, GasSource, MissingValuePolicy, ObservationRecord};
pub use app::services::chart_data::ChartSeries;
pub use app::services::feed_fetcher::FeedFetcher;
pub use app::services::feed_parser::{FeedParser, ParseResult, ParseStats};
pub use app::services::gas_catalog::GasCatalog;
pub use config::FetchConfig;

/// Result type alias for greenhouse-gas trend operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for feed retrieval, catalog handling and output
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP fetch through the relay failed
    #[error("Fetch error for '{url}': {message}")]
    Fetch {
        url: String,
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The relay answered but its JSON envelope could not be decoded
    #[error("Relay envelope error: {message}")]
    RelayEnvelope {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The relay reported a non-success status from the upstream feed
    #[error("Upstream feed '{url}' returned HTTP {status} via relay")]
    RelayUpstreamStatus { url: String, status: u16 },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Gas catalog error
    #[error("Catalog error: {message}")]
    Catalog {
        message: String,
        #[source]
        source: Option<toml::de::Error>,
    },

    /// Requested gas is not present in the catalog
    #[error("Unknown gas: '{gas_id}' (run `ghg_trends gases` to list known gases)")]
    GasNotFound { gas_id: String },

    /// Output serialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// An in-flight operation was cancelled
    #[error("Operation cancelled: {reason}")]
    Cancelled { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a fetch error with context
    pub fn fetch(
        url: impl Into<String>,
        message: impl Into<String>,
        source: Option<reqwest::Error>,
    ) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a relay envelope error
    pub fn relay_envelope(message: impl Into<String>, source: Option<serde_json::Error>) -> Self {
        Self::RelayEnvelope {
            message: message.into(),
            source,
        }
    }

    /// Create a relay upstream status error
    pub fn relay_upstream_status(url: impl Into<String>, status: u16) -> Self {
        Self::RelayUpstreamStatus {
            url: url.into(),
            status,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a catalog error
    pub fn catalog(message: impl Into<String>, source: Option<toml::de::Error>) -> Self {
        Self::Catalog {
            message: message.into(),
            source,
        }
    }

    /// Create an unknown-gas error
    pub fn gas_not_found(gas_id: impl Into<String>) -> Self {
        Self::GasNotFound {
            gas_id: gas_id.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a cancellation error
    pub fn cancelled(reason: impl Into<String>) -> Self {
        Self::Cancelled {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        let url = error
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        Self::Fetch {
            url,
            message: "HTTP request failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::RelayEnvelope {
            message: "Relay envelope decoding failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Catalog {
            message: "Catalog file parsing failed".to_string(),
            source: Some(error),
        }
    }
}
