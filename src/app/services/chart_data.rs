//! Chart projection of a parsed series
//!
//! The charting consumer expects two parallel sequences: category labels
//! (years) and numeric values, plus a dataset label naming the gas and its
//! units. This module performs that projection and nothing else; plotting
//! correctness is the consumer's concern.

use serde::Serialize;

use crate::app::models::ObservationRecord;

/// Parallel label/value sequences ready for a line chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    /// Dataset label, e.g. "Carbon dioxide (CO2) (ppm)"
    pub label: String,

    /// Category labels, one per record, in series order
    pub labels: Vec<String>,

    /// Values, one per record; `null` where the source value was missing
    pub values: Vec<Option<f64>>,
}

impl ChartSeries {
    /// Project a series into chart form
    ///
    /// Labels and values stay index-aligned: a record with a missing value
    /// keeps its slot so the chart shows a gap rather than shifting the
    /// x-axis.
    pub fn project(name: &str, units: &str, records: &[ObservationRecord]) -> Self {
        Self {
            label: format!("{} ({})", name, units),
            labels: records.iter().map(|r| r.period.clone()).collect(),
            values: records.iter().map(|r| r.value).collect(),
        }
    }

    /// Number of plotted points (including gaps)
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// First and last period covered, when any points exist
    pub fn span(&self) -> Option<(&str, &str)> {
        match (self.labels.first(), self.labels.last()) {
            (Some(first), Some(last)) => Some((first, last)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::ObservationRecord;

    fn records() -> Vec<ObservationRecord> {
        vec![
            ObservationRecord::new("2019", Some(410.0)),
            ObservationRecord::new("2020", None),
            ObservationRecord::new("2021", Some(416.5)),
        ]
    }

    #[test]
    fn test_projection_is_parallel_and_ordered() {
        let chart = ChartSeries::project("Carbon dioxide (CO2)", "ppm", &records());

        assert_eq!(chart.label, "Carbon dioxide (CO2) (ppm)");
        assert_eq!(chart.labels, vec!["2019", "2020", "2021"]);
        assert_eq!(chart.values, vec![Some(410.0), None, Some(416.5)]);
        assert_eq!(chart.len(), 3);
    }

    #[test]
    fn test_missing_values_keep_their_slot() {
        let chart = ChartSeries::project("x", "ppm", &records());
        assert_eq!(chart.labels.len(), chart.values.len());
        assert!(chart.values[1].is_none());
    }

    #[test]
    fn test_span() {
        let chart = ChartSeries::project("x", "ppm", &records());
        assert_eq!(chart.span(), Some(("2019", "2021")));

        let empty = ChartSeries::project("x", "ppm", &[]);
        assert!(empty.is_empty());
        assert_eq!(empty.span(), None);
    }

    #[test]
    fn test_missing_serializes_as_null() {
        let chart = ChartSeries::project("x", "ppm", &records());
        let json = serde_json::to_value(&chart).unwrap();
        assert!(json["values"][1].is_null());
        assert_eq!(json["values"][0], 410.0);
    }
}
