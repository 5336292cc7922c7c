//! Feed retrieval through a CORS relay
//!
//! The NOAA feeds sit behind plain HTTPS with no CORS headers, so browser
//! consumers reach them through a public relay that wraps the payload in a
//! JSON envelope. This module keeps the same wire path so the tool observes
//! exactly what the dashboard observed.
//!
//! - [`relay`] - Relay URL construction and envelope decoding
//! - [`client`] - The async fetcher with timeout and cancellation

pub mod client;
pub mod relay;

pub use client::FeedFetcher;
pub use relay::{RelayEnvelope, RelayStatus};
