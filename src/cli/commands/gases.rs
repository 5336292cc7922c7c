//! Gases command implementation
//!
//! Lists the gas catalog so the user can see which ids the fetch command
//! accepts and where each series comes from.

use colored::Colorize;
use tracing::debug;

use super::shared::{FetchStats, setup_logging};
use crate::app::models::GasSource;
use crate::app::services::gas_catalog::GasCatalog;
use crate::cli::args::{GasesArgs, ListFormat};
use crate::{Error, Result};

/// Gases command runner
pub async fn run_gases(args: GasesArgs) -> Result<FetchStats> {
    setup_logging(args.get_log_level(), false)?;
    debug!("Gases arguments: {:?}", args);

    let catalog = match &args.catalog {
        Some(path) => GasCatalog::load_from_file(path)?,
        None => GasCatalog::builtin(),
    };

    match args.format {
        ListFormat::Text => print_text_listing(&catalog, args.detailed),
        ListFormat::Json => print_json_listing(&catalog)?,
    }

    Ok(FetchStats {
        gas_id: "catalog".to_string(),
        records_emitted: catalog.len(),
        ..Default::default()
    })
}

fn print_text_listing(catalog: &GasCatalog, detailed: bool) {
    println!("{}", "Known greenhouse gases:".bold());

    for gas in catalog.iter() {
        let source = match &gas.source {
            GasSource::Feed { .. } => "live feed".green(),
            GasSource::Sample { .. } => "sample series".yellow(),
        };
        println!("  {:<6} {} [{}]", gas.id.cyan(), gas.name, source);

        if detailed {
            println!("         {}", gas.description.dimmed());
            match &gas.source {
                GasSource::Feed { url } => println!("         units: {}, feed: {}", gas.units, url),
                GasSource::Sample { series } => println!(
                    "         units: {}, {} sample points",
                    gas.units,
                    series.len()
                ),
            }
        }
    }
}

fn print_json_listing(catalog: &GasCatalog) -> Result<()> {
    let gases: Vec<_> = catalog.iter().collect();
    let json = serde_json::to_string_pretty(&gases)
        .map_err(|e| Error::serialization("Failed to encode gas listing", e))?;
    println!("{}", json);
    Ok(())
}
