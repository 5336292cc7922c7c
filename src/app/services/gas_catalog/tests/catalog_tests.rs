//! Tests for catalog lookup, built-in entries and TOML loading

use std::io::Write;

use tempfile::NamedTempFile;

use super::create_test_catalog_toml;
use crate::app::models::GasSource;
use crate::app::services::gas_catalog::GasCatalog;
use crate::constants::GAS_IDS;

#[test]
fn test_builtin_catalog_covers_canonical_gases() {
    let catalog = GasCatalog::builtin();
    assert_eq!(catalog.len(), GAS_IDS.len());

    for id in GAS_IDS {
        assert!(catalog.get(id).is_ok(), "missing builtin gas {}", id);
    }
}

#[test]
fn test_builtin_feed_and_sample_split() {
    let catalog = GasCatalog::builtin();

    assert!(catalog.get("co2").unwrap().has_feed());
    assert!(catalog.get("n2o").unwrap().has_feed());
    assert!(!catalog.get("ch4").unwrap().has_feed());
    assert!(!catalog.get("sf6").unwrap().has_feed());
}

#[test]
fn test_lookup_is_case_insensitive() {
    let catalog = GasCatalog::builtin();
    assert_eq!(catalog.get("CO2").unwrap().id, "co2");
    assert_eq!(catalog.get("Sf6").unwrap().id, "sf6");
}

#[test]
fn test_unknown_gas_is_typed_error() {
    let catalog = GasCatalog::builtin();
    let err = catalog.get("xenon").unwrap_err();
    assert!(matches!(err, crate::Error::GasNotFound { .. }));
}

#[test]
fn test_sample_series_materialization() {
    let catalog = GasCatalog::builtin();

    let sf6 = catalog.sample_series("sf6").unwrap().unwrap();
    assert_eq!(sf6.first().unwrap().period, "2010");
    assert_eq!(sf6.last().unwrap().value, Some(10.0));

    // Feed-backed gases have no embedded series
    assert!(catalog.sample_series("co2").unwrap().is_none());
}

#[test]
fn test_sample_series_are_year_ordered() {
    let catalog = GasCatalog::builtin();

    for gas in catalog.iter() {
        if let GasSource::Sample { series } = &gas.source {
            let years: Vec<u16> = series.iter().map(|p| p.year).collect();
            let mut sorted = years.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(years, sorted, "unsorted sample series for {}", gas.id);
        }
    }
}

#[test]
fn test_toml_catalog_replaces_builtin() {
    let catalog = GasCatalog::from_toml_str(&create_test_catalog_toml()).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.get("co2").unwrap().feed_url(),
        Some("https://feed.example/co2.txt")
    );
    assert!(catalog.get("ch4").is_err());
}

#[test]
fn test_load_catalog_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", create_test_catalog_toml()).unwrap();

    let catalog = GasCatalog::load_from_file(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);
}

#[test]
fn test_empty_catalog_file_rejected() {
    assert!(GasCatalog::from_toml_str("gases = []").is_err());
}

#[test]
fn test_malformed_catalog_file_rejected() {
    assert!(GasCatalog::from_toml_str("this is not toml = = =").is_err());
}
