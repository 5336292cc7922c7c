//! Async feed fetcher with timeout and cancellation
//!
//! Retrieval and parsing are deliberately decoupled: this client only turns
//! a feed URL into raw text, and the caller hands that text to the pure
//! parser. A failed fetch therefore degrades to an empty series at the call
//! site rather than a crash inside the transformation.

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::relay::{RelayEnvelope, build_relay_url};
use crate::config::FetchConfig;
use crate::{Error, Result};

/// HTTP client for feed retrieval through the CORS relay
#[derive(Debug, Clone)]
pub struct FeedFetcher {
    client: reqwest::Client,
    relay_base: String,
}

impl FeedFetcher {
    /// Create a fetcher from configuration
    pub fn new(config: &FetchConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::fetch(&config.relay_base, "Failed to build HTTP client", Some(e)))?;

        Ok(Self {
            client,
            relay_base: config.relay_base.clone(),
        })
    }

    /// Fetch a feed's raw text through the relay
    ///
    /// The request is tied to the caller's lifetime via the cancellation
    /// token: if the token fires while the request is outstanding, the
    /// in-flight work is abandoned and a [`Error::Cancelled`] is returned.
    /// Repeated calls are independent; nothing is cached between fetches.
    pub async fn fetch_feed(&self, feed_url: &str, token: &CancellationToken) -> Result<String> {
        let relay_url = build_relay_url(&self.relay_base, feed_url);
        info!("Fetching feed through relay: {}", feed_url);
        debug!("Relay request URL: {}", relay_url);

        let contents = tokio::select! {
            result = self.request_envelope(&relay_url, feed_url) => {
                result?.into_contents(feed_url)?
            }
            _ = token.cancelled() => {
                warn!("Fetch of {} cancelled", feed_url);
                return Err(Error::cancelled(format!("fetch of {} abandoned", feed_url)));
            }
        };

        debug!("Feed payload: {} bytes", contents.len());
        Ok(contents)
    }

    async fn request_envelope(&self, relay_url: &str, feed_url: &str) -> Result<RelayEnvelope> {
        let response = self
            .client
            .get(relay_url)
            .send()
            .await
            .map_err(|e| Error::fetch(feed_url, "Relay request failed", Some(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::fetch(
                feed_url,
                format!("Relay answered HTTP {}", status.as_u16()),
                None,
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::fetch(feed_url, "Failed to read relay response body", Some(e)))?;

        RelayEnvelope::decode(&body)
    }
}
