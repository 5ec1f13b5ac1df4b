// crates/regiondb-core/src/flatten.rs

//! # Table flattening
//!
//! Joins per-region country membership back onto one row per country. Each
//! grouping maps a set of mutually-exclusive region labels to a single
//! output column; a country receiving a second label for the same column is
//! a data error that is reported and then overwritten, never a reason to
//! abort the batch.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::algebra::CountrySet;
use crate::model::RegionDb;
use crate::text::fold_key;

/// Base output fields present for every country row.
pub const BASE_FIELDS: [&str; 3] = ["cc", "code", "name"];

/// One output column fed by a list of region labels.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Grouping {
    /// Output column name, e.g. "continent".
    pub column: String,
    /// Human description carried into the schema descriptor.
    pub description: String,
    /// Region names belonging to this grouping. Each doubles as the label
    /// value written for its member countries.
    pub regions: Vec<String>,
}

/// Schema descriptor entry for one output column.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ColumnSpec {
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
    pub description: String,
}

/// A reported label collision within one grouping column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collision {
    pub column: String,
    pub region: String,
    pub alpha2: String,
    pub previous: String,
    pub replacement: String,
}

/// One row of the flattened master table.
#[derive(Clone, Debug, Default)]
pub struct FlatRow {
    pub cc: String,
    pub code: String,
    pub name: String,
    labels: HashMap<String, String>,
}

impl FlatRow {
    /// Label assigned for a grouping column, if any.
    pub fn label(&self, column: &str) -> Option<&str> {
        self.labels.get(column).map(String::as_str)
    }
}

/// The flattened master table plus everything reported while building it.
#[derive(Clone, Debug, Default)]
pub struct FlatTable {
    /// Output column order: base fields, then one column per grouping.
    pub columns: Vec<String>,
    rows: BTreeMap<String, FlatRow>,
    pub collisions: Vec<Collision>,
}

impl FlatTable {
    /// Rows in alpha2 order.
    pub fn rows(&self) -> impl Iterator<Item = &FlatRow> {
        self.rows.values()
    }

    pub fn get(&self, alpha2: &str) -> Option<&FlatRow> {
        self.rows.get(alpha2)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Flattens grouping membership over a built hierarchy.
///
/// Synthetic regions are registered up front so grouping lists can mix
/// source regions and derived ones freely.
pub struct Flattener<'a> {
    db: &'a RegionDb,
    synthetic: HashMap<String, CountrySet>,
}

impl<'a> Flattener<'a> {
    pub fn new(db: &'a RegionDb) -> Self {
        Flattener {
            db,
            synthetic: HashMap::new(),
        }
    }

    /// Registers a derived country set under a region name.
    pub fn add_synthetic(&mut self, name: &str, set: CountrySet) {
        self.synthetic.insert(fold_key(name), set);
    }

    /// Country set behind a region label: synthetic registrations take
    /// precedence over the source hierarchy.
    pub fn region_set(&self, name: &str) -> Option<CountrySet> {
        if let Some(set) = self.synthetic.get(&fold_key(name)) {
            return Some(set.clone());
        }
        let id = self.db.find_id(name)?;
        Some(self.db.countries_under(id).into_iter().cloned().collect())
    }

    /// Builds the master table for the given groupings, in order.
    pub fn flatten(&self, groupings: &[Grouping]) -> FlatTable {
        let mut table = FlatTable {
            columns: BASE_FIELDS.iter().map(|f| f.to_string()).collect(),
            ..FlatTable::default()
        };

        for grouping in groupings {
            table.columns.push(grouping.column.clone());
            for region in &grouping.regions {
                let Some(set) = self.region_set(region) else {
                    warn!(region = %region, column = %grouping.column, "grouping lists an unknown region, skipping");
                    continue;
                };
                for country in set.iter() {
                    let row = table
                        .rows
                        .entry(country.alpha2.clone())
                        .or_insert_with(|| FlatRow {
                            cc: country.alpha2.clone(),
                            code: country.numeric.clone(),
                            name: country.name.clone(),
                            labels: HashMap::new(),
                        });
                    if let Some(previous) = row.labels.get(&grouping.column) {
                        warn!(
                            column = %grouping.column,
                            region = %region,
                            cc = %country.alpha2,
                            previous = %previous,
                            "collision: country already labeled for this grouping"
                        );
                        table.collisions.push(Collision {
                            column: grouping.column.clone(),
                            region: region.clone(),
                            alpha2: country.alpha2.clone(),
                            previous: previous.clone(),
                            replacement: region.clone(),
                        });
                    }
                    // Later assignment wins.
                    row.labels.insert(grouping.column.clone(), region.clone());
                }
            }
        }
        table
    }
}

/// Schema descriptor paired with the master table.
///
/// Base fields first, then one STRING column per grouping. Short region
/// lists are appended to the description so the schema stays self-describing
/// without ballooning on the 21-entry sub-region grouping.
pub fn schema(groupings: &[Grouping]) -> Vec<ColumnSpec> {
    let mut out = vec![
        ColumnSpec {
            ty: "STRING".into(),
            name: "cc".into(),
            description: "ISO two-letter country code".into(),
        },
        ColumnSpec {
            ty: "INTEGER".into(),
            name: "code".into(),
            description: "UN country code number".into(),
        },
        ColumnSpec {
            ty: "STRING".into(),
            name: "name".into(),
            description: "UN designated country full name".into(),
        },
    ];
    for grouping in groupings {
        let mut description = grouping.description.clone();
        if grouping.regions.len() < 8 {
            description.push_str(&format!(" regions: {}", grouping.regions.join(",")));
        }
        out.push(ColumnSpec {
            ty: "STRING".into(),
            name: grouping.column.clone(),
            description,
        });
    }
    out
}
