//! Data models for greenhouse-gas trend processing
//!
//! This module contains the core data structures representing parsed feed
//! observations and the gas catalog entries that describe where each gas
//! series comes from.

use serde::{Deserialize, Serialize};

// =============================================================================
// Observation Series
// =============================================================================

/// One parsed (period, value) pair from a flask feed
///
/// `period` is the calendar year taken from the leading characters of the
/// first token on a data line. `value` is the concentration measurement from
/// the second token; `None` marks a row whose value token did not parse as a
/// number (see [`MissingValuePolicy`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRecord {
    /// Year identifier, normally four characters (e.g. "2020")
    pub period: String,

    /// Concentration measurement, `None` when the source value was
    /// non-numeric and the parser is marking rather than dropping
    pub value: Option<f64>,
}

impl ObservationRecord {
    pub fn new(period: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            period: period.into(),
            value,
        }
    }

    /// Whether this record carries a missing-value marker
    pub fn is_missing(&self) -> bool {
        self.value.is_none()
    }
}

/// Policy for rows whose value token fails numeric parsing
///
/// The upstream feeds embed sentinel and free-text values in otherwise
/// well-formed rows. The parser never aborts on these; it either keeps the
/// row with a missing marker or drops it entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingValuePolicy {
    /// Keep the record with `value = None` (default)
    #[default]
    MarkMissing,

    /// Drop the record entirely
    DropRecord,
}

// =============================================================================
// Gas Catalog Entries
// =============================================================================

/// Where a gas series comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum GasSource {
    /// Live feed fetched through the CORS relay
    Feed { url: String },

    /// Embedded sample series used when no public feed is wired up
    Sample { series: Vec<SamplePoint> },
}

/// One point of an embedded sample series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub year: u16,
    pub value: f64,
}

impl SamplePoint {
    pub fn to_record(&self) -> ObservationRecord {
        ObservationRecord::new(self.year.to_string(), Some(self.value))
    }
}

/// Catalog entry describing one greenhouse gas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasInfo {
    /// Short catalog identifier (e.g. "co2")
    pub id: String,

    /// Human-readable name (e.g. "Carbon dioxide (CO2)")
    pub name: String,

    /// One-sentence description shown in listings
    pub description: String,

    /// Measurement units (e.g. "ppm", "ppb")
    pub units: String,

    /// Series source
    pub source: GasSource,
}

impl GasInfo {
    /// Whether this gas is backed by a live feed
    pub fn has_feed(&self) -> bool {
        matches!(self.source, GasSource::Feed { .. })
    }

    /// Feed URL, if this gas has one
    pub fn feed_url(&self) -> Option<&str> {
        match &self.source {
            GasSource::Feed { url } => Some(url),
            GasSource::Sample { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_record_detection() {
        assert!(ObservationRecord::new("2020", None).is_missing());
        assert!(!ObservationRecord::new("2020", Some(414.2)).is_missing());
    }

    #[test]
    fn test_sample_point_conversion() {
        let point = SamplePoint {
            year: 2016,
            value: 429.0,
        };
        let record = point.to_record();
        assert_eq!(record.period, "2016");
        assert_eq!(record.value, Some(429.0));
    }

    #[test]
    fn test_default_policy_marks_missing() {
        assert_eq!(MissingValuePolicy::default(), MissingValuePolicy::MarkMissing);
    }
}
