//! Set algebra example for regiondb-rs
//!
//! Derives a synthetic "Developing_Nations" region from a built hierarchy
//! and flattens grouping membership into per-country rows.

use regiondb_core::algebra::{SetOp, SyntheticRegion};
use regiondb_core::{CountrySet, Flattener, Grouping, HierarchyBuilder, RegionRow, Result};

fn main() -> Result<()> {
    let rows = [
        RegionRow::new(2, "002", "Africa"),
        RegionRow::new(0, "404", "Kenya"),
        RegionRow::new(0, "800", "Uganda"),
        RegionRow::new(2, "019", "Americas"),
        RegionRow::new(1, "021", "Northern America"),
        RegionRow::new(0, "840", "United States of America"),
        RegionRow::new(1, "419", "Latin America and the Caribbean"),
        RegionRow::new(0, "332", "Haiti"),
        RegionRow::new(2, "142", "Asia"),
        RegionRow::new(0, "392", "Japan"),
    ];

    let mut builder = HierarchyBuilder::new();
    builder.ingest(rows)?;
    let db = builder.finish();

    // Union over continents, then carve out the developed members.
    let developing = SyntheticRegion {
        name: "Developing_Nations".to_string(),
        steps: vec![
            SetOp::Union(vec!["Africa".into(), "Americas".into(), "Asia".into()]),
            SetOp::Difference(vec!["Northern America".into(), "Japan".into()]),
        ],
    };
    let set = developing.evaluate(&db)?;
    println!("Developing nations ({}):", set.len());
    for country in set.iter() {
        println!("- {} ({})", country.name, country.alpha2);
    }

    // Plain set operations compose the same way.
    let americas = CountrySet::from_region(&db, "Americas")?;
    let northern = CountrySet::from_region(&db, "Northern America")?;
    let latin = americas.difference(&northern);
    println!("\nAmericas minus Northern America: {} countries", latin.len());

    // Flatten the memberships into one row per country.
    let mut flattener = Flattener::new(&db);
    flattener.add_synthetic(&developing.name, set);
    let table = flattener.flatten(&[
        Grouping {
            column: "continent".into(),
            description: "UN defined Continents".into(),
            regions: vec!["Africa".into(), "Americas".into(), "Asia".into()],
        },
        Grouping {
            column: "econ_group".into(),
            description: "Economic grouping".into(),
            regions: vec!["Developing_Nations".into()],
        },
    ]);

    println!("\nFlattened table ({} rows):", table.len());
    for row in table.rows() {
        println!(
            "{},{},{},{},{}",
            row.cc,
            row.code,
            row.name,
            row.label("continent").unwrap_or(""),
            row.label("econ_group").unwrap_or("")
        );
    }

    Ok(())
}
