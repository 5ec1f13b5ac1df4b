// crates/regiondb-core/src/resolver.rs

//! # Country resolution
//!
//! Maps a UN numeric code to a canonical country identity. The trait is the
//! seam: the builder only needs `resolve`, and tests plug in their own
//! tables. The default implementation is backed by an ISO 3166-1 table
//! bundled with the crate.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::model::Country;

/// Resolves a numeric country/region code to a country identity.
///
/// Absence is a normal, expected outcome: most region codes (continents,
/// sub-regions, economic groupings) are not countries.
pub trait CountryResolver {
    fn resolve(&self, numeric: &str) -> Option<Country>;
}

static ISO_TABLE: Lazy<HashMap<String, Country>> = Lazy::new(|| {
    let raw = include_str!("../data/iso3166_numeric.csv");
    let mut reader = csv::Reader::from_reader(raw.as_bytes());
    let mut table = HashMap::new();
    for record in reader.records() {
        let record = record.expect("bundled ISO 3166 table is well-formed");
        let country = Country {
            alpha2: record[0].to_string(),
            numeric: record[1].to_string(),
            name: record[2].to_string(),
        };
        table.insert(country.numeric.clone(), country);
    }
    table
});

/// Normalizes a raw code field to the 3-digit zero-padded form used as the
/// table key. Non-numeric input yields `None`.
fn normalize_numeric(code: &str) -> Option<String> {
    let n: u32 = code.trim().parse().ok()?;
    Some(format!("{n:03}"))
}

/// The bundled ISO 3166-1 reference table.
///
/// Parsed once on first use and shared for the lifetime of the process.
#[derive(Clone, Copy, Debug, Default)]
pub struct IsoCountryTable;

impl CountryResolver for IsoCountryTable {
    fn resolve(&self, numeric: &str) -> Option<Country> {
        let key = normalize_numeric(numeric)?;
        ISO_TABLE.get(&key).cloned()
    }
}
