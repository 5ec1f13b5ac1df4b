// crates/regiondb-core/src/export.rs

//! # Artifact writers
//!
//! Per-region country lists and the flattened master table go out as CSV;
//! the schema descriptor goes out as JSON next to the table it describes.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::algebra::CountrySet;
use crate::config::RegionProfile;
use crate::error::Result;
use crate::flatten::{ColumnSpec, FlatTable};
use crate::model::RegionDb;

/// Writes one `Countries_in_<name>.csv` list with columns `cc, code, name`.
pub fn write_region_list(dir: &Path, name: &str, set: &CountrySet) -> Result<PathBuf> {
    let path = dir.join(format!("Countries_in_{name}.csv"));
    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(["cc", "code", "name"])?;
    for country in set.iter() {
        writer.write_record([&country.alpha2, &country.numeric, &country.name])?;
    }
    writer.flush()?;
    Ok(path)
}

/// Dumps a country list for every region at the profile's export levels and
/// for every synthetic region. Returns the written paths.
pub fn export_region_lists(
    db: &RegionDb,
    profile: &RegionProfile,
    dir: &Path,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for &level in &profile.export_levels {
        for &id in db.level_regions(level) {
            let node = db.node(id);
            let set: CountrySet = db.countries_under(id).into_iter().cloned().collect();
            written.push(write_region_list(dir, &node.name, &set)?);
        }
    }

    for synth in &profile.synthetic {
        match synth.evaluate(db) {
            Ok(set) => written.push(write_region_list(dir, &synth.name, &set)?),
            // A reduced dataset may not contain every recipe ingredient;
            // the remaining lists still go out.
            Err(e) => warn!(region = %synth.name, error = %e, "skipping synthetic region"),
        }
    }

    info!(files = written.len(), dir = %dir.display(), "wrote region lists");
    Ok(written)
}

/// Writes the flattened master table. Countries without a membership in some
/// grouping get an empty cell for that column.
pub fn write_master_table(path: &Path, table: &FlatTable) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&table.columns)?;
    for row in table.rows() {
        let mut record = Vec::with_capacity(table.columns.len());
        record.push(row.cc.as_str());
        record.push(row.code.as_str());
        record.push(row.name.as_str());
        for column in &table.columns[3..] {
            record.push(row.label(column).unwrap_or(""));
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;
    info!(rows = table.len(), path = %path.display(), "wrote master table");
    Ok(())
}

/// Writes the JSON schema descriptor paired to the master table.
pub fn write_schema(path: &Path, schema: &[ColumnSpec]) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), schema)?;
    Ok(())
}

/// Conventional schema path for a master table: `<stem>-schema.json`.
pub fn schema_path_for(table_path: &Path) -> PathBuf {
    let stem = table_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "table".to_string());
    table_path.with_file_name(format!("{stem}-schema.json"))
}
