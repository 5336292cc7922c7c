//! Integration tests for the feed-to-chart pipeline
//!
//! These tests run a realistic flask feed document through the full path a
//! fetch takes after the relay hands back text: parse, limit, project, and
//! verify the parallel sequences a chart consumer receives.

use ghg_trends::app::models::MissingValuePolicy;
use ghg_trends::app::services::chart_data::ChartSeries;
use ghg_trends::app::services::feed_parser::FeedParser;
use ghg_trends::app::services::gas_catalog::GasCatalog;

/// A document shaped like the NOAA GML surface-flask event files: a long
/// comment preamble, compact-timestamp data rows, sentinel values, and
/// trailing human commentary
fn realistic_feed() -> String {
    let mut feed = String::new();
    feed.push_str("# header_lines: 32\n");
    feed.push_str("# data_fields: sample_datetime value site flag\n");
    feed.push_str("# units: ppm\n");
    feed.push_str("# description: surface flask event data, Mauna Loa\n");
    feed.push('\n');

    for (i, year) in (1969..=2023).enumerate() {
        let value = 324.0 + i as f64 * 1.8;
        feed.push_str(&format!("{}-05-17T12:00 {:.2} MLO ..\n", year, value));
    }

    // Sentinel row and a short trailing note, as real feeds carry
    feed.push_str("2024-01-03T11:50 **** MLO ..\n");
    feed.push_str("# end of file\n");
    feed
}

#[test]
fn test_full_pipeline_to_chart_projection() {
    let parser = FeedParser::new();
    let result = parser.parse(&realistic_feed());

    // 55 numeric rows plus the marked sentinel row
    assert_eq!(result.records.len(), 56);
    assert_eq!(result.stats.missing_values, 1);
    assert!(result.stats.is_successful());

    let chart = ChartSeries::project("Carbon dioxide (CO2)", "ppm", &result.records);
    assert_eq!(chart.len(), 56);
    assert_eq!(chart.span(), Some(("1969", "2024")));
    assert!(chart.values.last().unwrap().is_none());

    // Parallel sequences stay index-aligned
    assert_eq!(chart.labels.len(), chart.values.len());
}

#[test]
fn test_drop_policy_end_to_end() {
    let parser = FeedParser::with_policy(MissingValuePolicy::DropRecord);
    let result = parser.parse(&realistic_feed());

    assert_eq!(result.records.len(), 55);
    assert!(result.records.iter().all(|r| !r.is_missing()));

    let chart = ChartSeries::project("Carbon dioxide (CO2)", "ppm", &result.records);
    assert_eq!(chart.span(), Some(("1969", "2023")));
}

#[test]
fn test_reparse_is_structurally_equal() {
    let text = realistic_feed();
    let parser = FeedParser::new();

    assert_eq!(parser.parse(&text), parser.parse(&text));
}

#[test]
fn test_sample_gas_reaches_chart_without_fetching() {
    // Gases without a live feed flow through the same projection
    let catalog = GasCatalog::builtin();
    let gas = catalog.get("sf6").unwrap();
    let records = catalog.sample_series("sf6").unwrap().unwrap();

    let chart = ChartSeries::project(&gas.name, &gas.units, &records);
    assert_eq!(chart.label, "Sulfur hexafluoride (SF6) (ppt)");
    assert_eq!(chart.span(), Some(("2010", "2020")));
    assert!(chart.values.iter().all(|v| v.is_some()));
}

#[test]
fn test_absent_payload_degrades_to_empty_chart() {
    // A failed fetch hands the caller no text; the chart shows no data
    let result = FeedParser::new().parse("");
    let chart = ChartSeries::project("Carbon dioxide (CO2)", "ppm", &result.records);

    assert!(chart.is_empty());
    assert_eq!(chart.span(), None);
}
