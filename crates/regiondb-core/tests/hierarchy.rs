//! End-to-end: ingest a region outline CSV, query the tree, derive a
//! synthetic region, flatten and export.

use std::fs;

use regiondb_core::algebra::{SetOp, SyntheticRegion};
use regiondb_core::config::RegionProfile;
use regiondb_core::export;
use regiondb_core::flatten::{self, Flattener, Grouping};
use regiondb_core::RegionDb;

const OUTLINE: &str = "\
Level,Numerical_code,name
2,002,Africa
1,015,Northern Africa
0,012,Algeria
0,729,Sudan
1,014,Eastern Africa
0,404,Kenya
0,800,Uganda
2,019,Americas
1,021,Northern America
0,840,United States of America
1,419,Latin America and the Caribbean
0,332,Haiti
2,142,Asia
0,392,Japan
2,150,Europe
0,250,France
2,009,Oceania
0,036,Australia
0,554,New Zealand
";

fn grouping(column: &str, regions: &[&str]) -> Grouping {
    Grouping {
        column: column.into(),
        description: format!("{column} grouping"),
        regions: regions.iter().map(|r| r.to_string()).collect(),
    }
}

fn load_outline() -> RegionDb {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("regions.csv");
    fs::write(&path, OUTLINE).unwrap();
    RegionDb::load_from_path(&path).unwrap()
}

#[test]
fn builds_tree_from_csv_file() {
    let db = load_outline();

    let stats = db.stats();
    assert_eq!(stats.countries, 10);
    // Levels seen: 0, 1, 2 and the synthetic root's 5.
    assert_eq!(stats.levels, 4);

    // Continents hang off the root in input order.
    let continents: Vec<&str> = db
        .level_regions(2)
        .iter()
        .map(|&id| db.node(id).name.as_str())
        .collect();
    assert_eq!(
        continents,
        vec!["Africa", "Americas", "Asia", "Europe", "Oceania"]
    );
    for &id in db.level_regions(2) {
        assert_eq!(db.node(id).parent, Some(db.root()));
    }

    // The synthetic root is the unique parentless node.
    let parentless: Vec<_> = db.iter().filter(|n| n.parent.is_none()).collect();
    assert_eq!(parentless.len(), 1);
    assert_eq!(parentless[0].id, db.root());

    // Root aggregation covers every resolved leaf exactly once.
    let world = db.countries_under(db.root());
    assert_eq!(world.len(), 10);
    for country in &world {
        assert!(db.includes_country(db.root(), &country.alpha2));
    }
    assert!(!db.includes_country(db.root(), "DE"));
}

#[test]
fn synthetic_region_and_flatten_match_expected_membership() {
    let db = load_outline();

    let developing = SyntheticRegion {
        name: "Developing_Nations".into(),
        steps: vec![
            SetOp::Union(vec![
                "Africa".into(),
                "Americas".into(),
                "Asia".into(),
                "Oceania".into(),
            ]),
            SetOp::Difference(vec![
                "Northern America".into(),
                "Japan".into(),
                "Australia".into(),
                "New Zealand".into(),
            ]),
        ],
    };
    let set = developing.evaluate(&db).unwrap();
    let ccs: Vec<&str> = set.iter().map(|c| c.alpha2.as_str()).collect();
    assert_eq!(ccs, vec!["DZ", "HT", "KE", "SD", "UG"]);

    let sub_saharan = SyntheticRegion {
        name: "Sub-Saharan-Africa".into(),
        steps: vec![
            SetOp::Union(vec!["Africa".into()]),
            SetOp::Difference(vec!["Northern Africa".into()]),
            SetOp::Union(vec!["Sudan".into()]),
        ],
    };
    let ssa = sub_saharan.evaluate(&db).unwrap();
    assert!(ssa.contains("SD"));
    assert!(!ssa.contains("DZ"));

    let mut flattener = Flattener::new(&db);
    flattener.add_synthetic("Developing_Nations", set);
    let groupings = vec![
        grouping("continent", &["Africa", "Americas", "Asia", "Europe", "Oceania"]),
        grouping("econ_group", &["Developing_Nations"]),
    ];
    let table = flattener.flatten(&groupings);

    assert_eq!(table.len(), 10);
    let kenya = table.get("KE").unwrap();
    assert_eq!(kenya.label("continent"), Some("Africa"));
    assert_eq!(kenya.label("econ_group"), Some("Developing_Nations"));
    let france = table.get("FR").unwrap();
    assert_eq!(france.label("continent"), Some("Europe"));
    assert_eq!(france.label("econ_group"), None);
    assert!(table.collisions.is_empty());
}

#[test]
fn export_writes_lists_table_and_schema() {
    let db = load_outline();
    let dir = tempfile::tempdir().unwrap();

    let profile = RegionProfile {
        groupings: vec![grouping("continent", &["Africa", "Asia"])],
        synthetic: vec![SyntheticRegion {
            name: "Sub-Saharan-Africa".into(),
            steps: vec![
                SetOp::Union(vec!["Africa".into()]),
                SetOp::Difference(vec!["Northern Africa".into()]),
                SetOp::Union(vec!["Sudan".into()]),
            ],
        }],
        export_levels: vec![2, 1],
    };

    let written = export::export_region_lists(&db, &profile, dir.path()).unwrap();
    // 5 continents + 4 sub-regions + 1 synthetic.
    assert_eq!(written.len(), 10);
    let africa = fs::read_to_string(dir.path().join("Countries_in_Africa.csv")).unwrap();
    assert!(africa.starts_with("cc,code,name\n"));
    assert!(africa.contains("KE,404,Kenya\n"));
    assert!(africa.contains("SD,729,Sudan\n"));

    let flattener = Flattener::new(&db);
    let table = flattener.flatten(&profile.groupings);
    let table_path = dir.path().join("geographic_regions_by_country.csv");
    export::write_master_table(&table_path, &table).unwrap();
    let body = fs::read_to_string(&table_path).unwrap();
    let mut lines = body.lines();
    assert_eq!(lines.next(), Some("cc,code,name,continent"));
    assert!(body.contains("JP,392,Japan,Asia"));
    // France is in no configured grouping, so it never entered the table.
    assert!(!body.contains("FR"));

    let schema_path = export::schema_path_for(&table_path);
    export::write_schema(&schema_path, &flatten::schema(&profile.groupings)).unwrap();
    let schema_json = fs::read_to_string(&schema_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&schema_json).unwrap();
    assert_eq!(parsed[0]["name"], "cc");
    assert_eq!(parsed[1]["type"], "INTEGER");
    assert_eq!(parsed[3]["name"], "continent");
}

#[cfg(feature = "compact")]
#[test]
fn loads_gzip_compressed_outline() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("regions.csv.gz");
    let file = fs::File::create(&path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(OUTLINE.as_bytes()).unwrap();
    encoder.finish().unwrap();

    let db = RegionDb::load_from_path(&path).unwrap();
    assert_eq!(db.stats().countries, 10);
}
