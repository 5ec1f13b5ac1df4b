//! regiondb-cli — Command-line interface for regiondb-core
//!
//! This binary builds the region hierarchy from a level-annotated outline
//! CSV and inspects or exports it from your terminal. It supports printing
//! basic statistics, listing the countries under a region, membership
//! checks, per-level reports, per-region country-list exports, and the
//! flattened per-country classification table.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ regiondb-cli -i un_world_geographic_regions.csv stats
//!
//! - List the countries under a region
//!   $ regiondb-cli -i regions.csv region "Eastern Africa"
//!
//! - Membership check
//!   $ regiondb-cli -i regions.csv contains Africa KE
//!
//! - Write every per-region country list plus the synthetic regions
//!   $ regiondb-cli -i regions.csv export --out-dir data
//!
//! - Write the master table and its schema descriptor
//!   $ regiondb-cli -i regions.csv flatten --out geographic_regions_by_country.csv
//!
//! By default the built-in UN M49 grouping profile drives export and
//! flatten; use `--profile <path>` to supply a JSON profile of your own.
//! Warnings (unresolved country codes, grouping collisions) go to stderr
//! through `tracing`; tune them with RUST_LOG.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use regiondb_core::export;
use regiondb_core::flatten;
use regiondb_core::{Flattener, RegionDb, RegionProfile};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    // Default input matches the UN world-regions sheet filename.
    let input_path = args
        .input
        .unwrap_or_else(|| "un_world_geographic_regions.csv".to_string());

    let db = RegionDb::load_from_path(&input_path)?;

    let profile = match args.profile.as_deref() {
        Some(path) => RegionProfile::from_json_path(path)?,
        None => RegionProfile::un_defaults(),
    };

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Hierarchy statistics:");
            println!("  Regions: {}", stats.regions);
            println!("  Countries: {}", stats.countries);
            println!("  Levels: {}", stats.levels);
        }

        Commands::Region { name } => match db.find_id(&name) {
            Some(id) => {
                for country in db.countries_under(id) {
                    println!("{} ({})", country.name, country.alpha2);
                }
            }
            None => {
                eprintln!("No region found for: {name}");
            }
        },

        Commands::Contains { region, cc } => match db.find_id(&region) {
            Some(id) => {
                if db.includes_country(id, &cc) {
                    println!("{cc} is in {region}");
                } else {
                    println!("{cc} is not in {region}");
                }
            }
            None => eprintln!("Region {region} not found"),
        },

        Commands::Levels => {
            for level in db.levels().rev() {
                let ids = db.level_regions(level);
                println!("Level {level}: {} regions", ids.len());
                for &id in ids {
                    let node = db.node(id);
                    println!("  {} ({} countries)", node.name, db.countries_under(id).len());
                }
            }
        }

        Commands::Export { out_dir } => {
            let dir = std::path::Path::new(&out_dir);
            std::fs::create_dir_all(dir)?;
            let written = export::export_region_lists(&db, &profile, dir)?;
            println!("Wrote {} region lists to {}", written.len(), dir.display());
        }

        Commands::Flatten { out } => {
            let mut flattener = Flattener::new(&db);
            for synth in &profile.synthetic {
                match synth.evaluate(&db) {
                    Ok(set) => flattener.add_synthetic(&synth.name, set),
                    Err(e) => tracing::warn!(region = %synth.name, error = %e, "skipping synthetic region"),
                }
            }
            let table = flattener.flatten(&profile.groupings);

            let table_path = std::path::Path::new(&out);
            export::write_master_table(table_path, &table)?;
            let schema_path = export::schema_path_for(table_path);
            export::write_schema(&schema_path, &flatten::schema(&profile.groupings))?;

            println!("Wrote {} rows to {}", table.len(), table_path.display());
            println!("Wrote schema to {}", schema_path.display());
            if !table.collisions.is_empty() {
                println!(
                    "{} grouping collisions reported (later label kept)",
                    table.collisions.len()
                );
            }
        }
    }

    Ok(())
}
