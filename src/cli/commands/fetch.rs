//! Fetch command implementation
//!
//! Retrieves one gas series (live feed through the relay, or the catalog's
//! embedded sample), parses it, and emits the chart projection in the
//! requested format. A failed fetch degrades to an empty series with a
//! warning; only cancellation propagates as an error.

use std::time::Instant;

use chrono::Utc;
use colored::Colorize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::shared::{FetchStats, fetch_spinner, setup_logging};
use crate::app::models::{GasInfo, GasSource};
use crate::app::services::chart_data::ChartSeries;
use crate::app::services::feed_fetcher::FeedFetcher;
use crate::app::services::feed_parser::{FeedParser, ParseResult, ParseStats};
use crate::app::services::gas_catalog::GasCatalog;
use crate::cli::args::{FetchArgs, OutputFormat};
use crate::{Error, Result};

/// Fetch command runner
pub async fn run_fetch(args: FetchArgs, token: CancellationToken) -> Result<FetchStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;
    info!("Starting fetch for gas '{}'", args.gas);
    debug!("Fetch arguments: {:?}", args);

    args.validate()?;
    let config = args.to_config();
    config.validate()?;

    let catalog = match &config.catalog_path {
        Some(path) => GasCatalog::load_from_file(path)?,
        None => GasCatalog::builtin(),
    };
    let gas = catalog.get(&args.gas)?.clone();

    let parser = FeedParser::with_policy(config.missing_value_policy);

    let (result, from_feed, fetched_at) = match &gas.source {
        GasSource::Feed { url } => {
            let fetcher = FeedFetcher::new(&config)?;
            let spinner = (!args.quiet).then(|| fetch_spinner(&gas.id));

            let fetched = fetcher.fetch_feed(url, &token).await;
            if let Some(spinner) = &spinner {
                spinner.finish_and_clear();
            }

            match fetched {
                Ok(text) => (parser.parse(&text), true, Some(Utc::now())),
                Err(error @ Error::Cancelled { .. }) => return Err(error),
                Err(error) => {
                    // Fetch failure is the collaborator's domain: surface it
                    // as an absence of input, not a crash.
                    warn!("Fetch failed for {}, showing no data: {:#}", gas.id, error);
                    (ParseResult::empty(), true, None)
                }
            }
        }
        GasSource::Sample { series } => {
            info!("No live feed for '{}', using embedded sample series", gas.id);
            let records: Vec<_> = series.iter().map(|p| p.to_record()).collect();
            let mut stats = ParseStats::new();
            stats.total_lines = records.len();
            stats.records_parsed = records.len();
            (ParseResult { records, stats }, false, None)
        }
    };

    let mut records = result.records;
    if let Some(limit) = args.limit {
        if records.len() > limit {
            records.drain(..records.len() - limit);
        }
    }

    let chart = ChartSeries::project(&gas.name, &gas.units, &records);
    let rendered = render_output(args.format, &gas, &chart, &result.stats)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;
            info!("Wrote {} output to {}", gas.id, path.display());
        }
        None => println!("{}", rendered),
    }

    let stats = FetchStats {
        gas_id: gas.id.clone(),
        from_feed,
        parse: result.stats,
        records_emitted: records.len(),
        fetched_at,
        elapsed: start_time.elapsed(),
    };

    if !args.quiet {
        eprintln!("{}", stats.summary().green());
    }

    Ok(stats)
}

/// Render the chart projection in the requested format
fn render_output(
    format: OutputFormat,
    gas: &GasInfo,
    chart: &ChartSeries,
    stats: &ParseStats,
) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(gas, chart, stats)),
        OutputFormat::Json => render_json(gas, chart, stats),
        OutputFormat::Csv => Ok(render_csv(chart)),
    }
}

fn render_table(gas: &GasInfo, chart: &ChartSeries, stats: &ParseStats) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", chart.label.bold()));
    out.push_str(&format!("{}\n\n", gas.description.dimmed()));

    if chart.is_empty() {
        out.push_str("  (no data)\n");
        return out;
    }

    out.push_str(&format!("  {:<8} {:>12}\n", "period", "value"));
    for (label, value) in chart.labels.iter().zip(chart.values.iter()) {
        match value {
            Some(v) => out.push_str(&format!("  {:<8} {:>12.2}\n", label, v)),
            None => out.push_str(&format!("  {:<8} {:>12}\n", label, "missing")),
        }
    }

    if let Some((first, last)) = chart.span() {
        out.push_str(&format!(
            "\n  {} points, {} to {}, {:.1}% of data lines parsed\n",
            chart.len(),
            first,
            last,
            stats.success_rate()
        ));
    }

    out
}

fn render_json(gas: &GasInfo, chart: &ChartSeries, stats: &ParseStats) -> Result<String> {
    let document = serde_json::json!({
        "gas": {
            "id": gas.id,
            "name": gas.name,
            "units": gas.units,
        },
        "stats": stats,
        "chart": chart,
    });

    serde_json::to_string_pretty(&document)
        .map_err(|e| Error::serialization("Failed to encode chart document", e))
}

fn render_csv(chart: &ChartSeries) -> String {
    let mut out = String::from("period,value\n");
    for (label, value) in chart.labels.iter().zip(chart.values.iter()) {
        match value {
            Some(v) => out.push_str(&format!("{},{}\n", label, v)),
            None => out.push_str(&format!("{},\n", label)),
        }
    }
    out
}
