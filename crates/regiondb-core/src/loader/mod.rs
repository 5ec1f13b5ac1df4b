// crates/regiondb-core/src/loader/mod.rs

//! # Row loader
//!
//! Handles the physical layer (I/O, decompression) and decodes source
//! records into typed rows, then delegates tree construction to the
//! [`HierarchyBuilder`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::error::{RegionError, Result};
use crate::model::RegionDb;

mod builder;

pub use builder::HierarchyBuilder;

/// One record of the source outline table.
///
/// Field names follow the UN world-regions sheet. The level cell is often
/// blank for country rows; blank parses as 0.
#[derive(Clone, Debug, Deserialize)]
pub struct RegionRow {
    #[serde(rename = "Level", default, deserialize_with = "level_from_cell")]
    pub level: i32,
    #[serde(rename = "Numerical_code", default)]
    pub numeric_code: String,
    #[serde(rename = "name", default)]
    pub name: String,
}

impl RegionRow {
    pub fn new(level: i32, numeric_code: impl Into<String>, name: impl Into<String>) -> Self {
        RegionRow {
            level,
            numeric_code: numeric_code.into(),
            name: name.into(),
        }
    }
}

fn level_from_cell<'de, D>(deserializer: D) -> std::result::Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let cell = raw.unwrap_or_default();
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(0);
    }
    cell.parse::<i32>()
        .map_err(|_| serde::de::Error::custom(format!("invalid level value {cell:?}")))
}

// -----------------------------------------------------------------------------
// TRANSPORT
// -----------------------------------------------------------------------------

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the
/// extension asks for one. Returns a generic reader so the caller doesn't
/// care about the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        RegionError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if path.extension().is_some_and(|ext| ext == "gz") {
        #[cfg(feature = "compact")]
        {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(RegionError::InvalidData(
                "gzip input requires the 'compact' feature".into(),
            ));
        }
    }

    Ok(Box::new(reader))
}

/// Reads every row from a CSV stream. Cell whitespace is trimmed so the
/// loosely formatted source sheets parse cleanly.
pub fn read_rows_from_reader<R: Read>(reader: R) -> Result<Vec<RegionRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();
    for record in csv_reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

pub fn read_rows(path: impl AsRef<Path>) -> Result<Vec<RegionRow>> {
    let stream = open_stream(path.as_ref())?;
    read_rows_from_reader(stream)
}

impl RegionDb {
    /// Reads the outline table at `path` (plain or `.csv.gz`) and builds the
    /// full hierarchy with the bundled country table.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let rows = read_rows(path)?;
        let mut builder = HierarchyBuilder::new();
        builder.ingest(rows)?;
        Ok(builder.finish())
    }
}
