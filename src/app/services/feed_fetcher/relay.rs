//! CORS relay URL construction and envelope decoding
//!
//! The allorigins-style relay exposes `/get?url=<encoded>` and answers with
//! a JSON envelope carrying the upstream body as text plus fetch metadata.

use crate::constants::relay::GET_PATH;
use crate::{Error, Result};
use serde::Deserialize;

/// Build the relay request URL for a feed
///
/// The feed URL is percent-encoded in full, as a query parameter value.
pub fn build_relay_url(relay_base: &str, feed_url: &str) -> String {
    format!(
        "{}{}?url={}",
        relay_base.trim_end_matches('/'),
        GET_PATH,
        urlencoding::encode(feed_url)
    )
}

/// JSON envelope returned by the relay's `/get` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RelayEnvelope {
    /// Upstream response body as text
    pub contents: String,

    /// Upstream fetch metadata, when the relay provides it
    #[serde(default)]
    pub status: Option<RelayStatus>,
}

/// Upstream fetch metadata embedded in the envelope
#[derive(Debug, Clone, Deserialize)]
pub struct RelayStatus {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub http_code: Option<u16>,

    #[serde(default)]
    pub content_type: Option<String>,
}

impl RelayEnvelope {
    /// Decode an envelope from the relay response body
    pub fn decode(body: &str) -> Result<Self> {
        serde_json::from_str(body)
            .map_err(|e| Error::relay_envelope("Relay response is not a valid envelope", Some(e)))
    }

    /// Extract the upstream payload, rejecting relayed upstream failures
    ///
    /// The relay answers 200 even when the upstream fetch failed; the real
    /// outcome is in `status.http_code`.
    pub fn into_contents(self, feed_url: &str) -> Result<String> {
        if let Some(status) = &self.status {
            if let Some(code) = status.http_code {
                if !(200..300).contains(&code) {
                    return Err(Error::relay_upstream_status(feed_url, code));
                }
            }
        }
        Ok(self.contents)
    }
}
