//! Configuration for feed fetching and parsing.
//!
//! Provides the runtime settings the fetch pipeline needs: relay location,
//! request timeout, missing-value policy, and an optional catalog override
//! file. Defaults mirror the public allorigins relay the original consumer
//! used.

use crate::app::models::MissingValuePolicy;
use crate::constants::relay;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Global configuration for feed fetching
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Base URL of the CORS relay (the `/get` envelope endpoint is appended)
    pub relay_base: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Handling of rows whose value token is non-numeric
    pub missing_value_policy: MissingValuePolicy,

    /// Optional TOML file replacing the built-in gas catalog
    pub catalog_path: Option<PathBuf>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            relay_base: relay::DEFAULT_BASE.to_string(),
            timeout_secs: relay::DEFAULT_TIMEOUT_SECS,
            missing_value_policy: MissingValuePolicy::default(),
            catalog_path: None,
        }
    }
}

impl FetchConfig {
    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration before use
    pub fn validate(&self) -> Result<()> {
        if self.relay_base.trim().is_empty() {
            return Err(Error::configuration("Relay base URL must not be empty"));
        }

        if !self.relay_base.starts_with("http://") && !self.relay_base.starts_with("https://") {
            return Err(Error::configuration(format!(
                "Relay base URL must be an http(s) URL, got '{}'",
                self.relay_base
            )));
        }

        if self.timeout_secs == 0 {
            return Err(Error::configuration("Timeout must be at least 1 second"));
        }

        if let Some(path) = &self.catalog_path {
            if !path.exists() {
                return Err(Error::configuration(format!(
                    "Catalog file not found: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }
}
