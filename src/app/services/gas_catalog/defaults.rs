//! Built-in catalog entries
//!
//! CO2 and N2O point at the NOAA GML Mauna Loa surface-flask feeds; CH4,
//! HFCs, PFCs and SF6 carry illustrative sample series taken from the
//! dashboard this tool replaces (repeated literals deduplicated, entries in
//! year order).

use crate::app::models::{GasInfo, GasSource, SamplePoint};
use crate::constants::{CO2_FEED_URL, N2O_FEED_URL};

fn points(data: &[(u16, f64)]) -> Vec<SamplePoint> {
    data.iter()
        .map(|&(year, value)| SamplePoint { year, value })
        .collect()
}

/// The six canonical gases in display order
pub fn builtin_gases() -> Vec<GasInfo> {
    vec![
        GasInfo {
            id: "co2".to_string(),
            name: "Carbon dioxide (CO2)".to_string(),
            description: "CO2 is a significant greenhouse gas that contributes to global warming."
                .to_string(),
            units: "ppm".to_string(),
            source: GasSource::Feed {
                url: CO2_FEED_URL.to_string(),
            },
        },
        GasInfo {
            id: "n2o".to_string(),
            name: "Nitrous oxide (N2O)".to_string(),
            description: "N2O is released from agriculture and industrial activities and has a potent warming effect."
                .to_string(),
            units: "ppb".to_string(),
            source: GasSource::Feed {
                url: N2O_FEED_URL.to_string(),
            },
        },
        GasInfo {
            id: "ch4".to_string(),
            name: "Methane (CH4)".to_string(),
            description: "CH4 is emitted during the production and transport of coal, oil, and natural gas."
                .to_string(),
            units: "ppb".to_string(),
            source: GasSource::Sample {
                series: points(&[
                    (1920, 800.0),
                    (1925, 835.0),
                    (1930, 850.0),
                    (1935, 845.0),
                    (1940, 900.0),
                    (1945, 925.0),
                    (1950, 950.0),
                    (1955, 975.0),
                    (1960, 1000.0),
                    (1961, 1010.0),
                    (1962, 1020.0),
                    (2018, 1000.0),
                    (2019, 1010.0),
                    (2020, 1020.0),
                ]),
            },
        },
        GasInfo {
            id: "hfcs".to_string(),
            name: "Hydrofluorocarbons (HFCs)".to_string(),
            description: "HFCs are synthetic greenhouse gases used in cooling and refrigeration."
                .to_string(),
            units: "ppt".to_string(),
            source: GasSource::Sample {
                series: points(&[
                    (2010, 100.0),
                    (2012, 150.0),
                    (2014, 200.0),
                    (2016, 250.0),
                    (2018, 300.0),
                    (2020, 350.0),
                ]),
            },
        },
        GasInfo {
            id: "pfcs".to_string(),
            name: "Perfluorocarbons (PFCs)".to_string(),
            description: "PFCs are long-lasting greenhouse gases used in electronics and refrigeration."
                .to_string(),
            units: "ppt".to_string(),
            source: GasSource::Sample {
                series: points(&[
                    (2010, 10.0),
                    (2012, 15.0),
                    (2014, 20.0),
                    (2016, 25.0),
                    (2018, 30.0),
                    (2020, 35.0),
                ]),
            },
        },
        GasInfo {
            id: "sf6".to_string(),
            name: "Sulfur hexafluoride (SF6)".to_string(),
            description: "SF6 is used in electrical insulation and has an extremely high global warming potential."
                .to_string(),
            units: "ppt".to_string(),
            source: GasSource::Sample {
                series: points(&[
                    (2010, 5.0),
                    (2011, 6.0),
                    (2014, 7.0),
                    (2015, 8.0),
                    (2018, 9.0),
                    (2020, 10.0),
                ]),
            },
        },
    ]
}
