//! Test fixtures for gas catalog testing

mod catalog_tests;

/// A small but complete catalog override file
pub fn create_test_catalog_toml() -> String {
    r#"
[[gases]]
id = "co2"
name = "Carbon dioxide (CO2)"
description = "Test feed entry."
units = "ppm"
source = { kind = "feed", url = "https://feed.example/co2.txt" }

[[gases]]
id = "sf6"
name = "Sulfur hexafluoride (SF6)"
description = "Test sample entry."
units = "ppt"
source = { kind = "sample", series = [
    { year = 2010, value = 5.0 },
    { year = 2020, value = 10.0 },
] }
"#
    .to_string()
}
