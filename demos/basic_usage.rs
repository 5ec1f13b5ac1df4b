//! Basic usage example for regiondb-rs
//!
//! This example demonstrates how to:
//! - Build the region hierarchy from outline rows
//! - Look up regions and their countries
//! - Run membership checks
//! - Inspect per-level buckets

use regiondb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== RegionDB-RS Basic Usage Example ===\n");

    // A miniature outline: row order plus the level column encode the tree.
    let rows = [
        RegionRow::new(2, "002", "Africa"),
        RegionRow::new(1, "015", "Northern Africa"),
        RegionRow::new(0, "012", "Algeria"),
        RegionRow::new(1, "014", "Eastern Africa"),
        RegionRow::new(0, "404", "Kenya"),
        RegionRow::new(0, "800", "Uganda"),
        RegionRow::new(2, "142", "Asia"),
        RegionRow::new(0, "392", "Japan"),
    ];

    let mut builder = HierarchyBuilder::new();
    builder.ingest(rows)?;
    let db = builder.finish();
    println!("✓ Hierarchy built successfully\n");

    // Example 1: Overall statistics
    println!("--- Example 1: Statistics ---");
    let stats = db.stats();
    println!("Regions: {}", stats.regions);
    println!("Countries: {}", stats.countries);
    println!("Levels: {}\n", stats.levels);

    // Example 2: Countries under a region
    println!("--- Example 2: Countries under Africa ---");
    if let Some(africa) = db.find_id("Africa") {
        for country in db.countries_under(africa) {
            println!("- {} ({})", country.name, country.alpha2);
        }
    }
    println!();

    // Example 3: Membership checks
    println!("--- Example 3: Membership checks ---");
    let asia = db.find_id("Asia").expect("Asia was ingested");
    println!("JP in Asia: {}", db.includes_country(asia, "JP"));
    println!("KE in Asia: {}", db.includes_country(asia, "KE"));
    println!();

    // Example 4: Name lookup is accent- and case-insensitive
    println!("--- Example 4: Folded name lookup ---");
    println!("'eastern africa' found: {}", db.find("eastern africa").is_some());
    println!();

    // Example 5: Per-level report
    println!("--- Example 5: Regions by level ---");
    for level in db.levels().rev() {
        let names: Vec<&str> = db
            .level_regions(level)
            .iter()
            .map(|&id| db.node(id).name.as_str())
            .collect();
        println!("Level {level}: {}", names.join(", "));
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
