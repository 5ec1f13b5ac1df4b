// crates/regiondb-core/src/algebra.rs

//! # Region set algebra
//!
//! Synthetic categories ("Developing_Nations", "Sub-Saharan-Africa") are not
//! present in the source rows. They are derived here by union and difference
//! over the country sets of regions that are, keyed strictly by alpha2
//! identity so a country reachable through several branches collapses to one
//! member.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{RegionError, Result};
use crate::model::{Country, RegionDb};

/// A set of countries keyed by alpha2 code.
///
/// `BTreeMap` keeps iteration deterministic, which keeps every exported
/// artifact stable across runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountrySet {
    members: BTreeMap<String, Country>,
}

impl CountrySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, country: Country) {
        self.members.insert(country.alpha2.clone(), country);
    }

    /// Country set of one named region.
    pub fn from_region(db: &RegionDb, name: &str) -> Result<Self> {
        let id = db
            .find_id(name)
            .ok_or_else(|| RegionError::RegionNotFound(name.to_string()))?;
        let mut set = CountrySet::new();
        for country in db.countries_under(id) {
            set.insert(country.clone());
        }
        Ok(set)
    }

    /// Union over several named regions.
    pub fn from_regions<S: AsRef<str>>(db: &RegionDb, names: &[S]) -> Result<Self> {
        let mut set = CountrySet::new();
        for name in names {
            set = set.union(&CountrySet::from_region(db, name.as_ref())?);
        }
        Ok(set)
    }

    pub fn union(&self, other: &Self) -> Self {
        let mut members = self.members.clone();
        for (cc, country) in &other.members {
            members.entry(cc.clone()).or_insert_with(|| country.clone());
        }
        CountrySet { members }
    }

    /// Removes by identity, regardless of which branch contributed the
    /// country.
    pub fn difference(&self, other: &Self) -> Self {
        let members = self
            .members
            .iter()
            .filter(|(cc, _)| !other.members.contains_key(*cc))
            .map(|(cc, c)| (cc.clone(), c.clone()))
            .collect();
        CountrySet { members }
    }

    pub fn contains(&self, alpha2: &str) -> bool {
        self.members.contains_key(alpha2)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in alpha2 order.
    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.members.values()
    }
}

impl FromIterator<Country> for CountrySet {
    fn from_iter<I: IntoIterator<Item = Country>>(iter: I) -> Self {
        let mut set = CountrySet::new();
        for country in iter {
            set.insert(country);
        }
        set
    }
}

// -----------------------------------------------------------------------------
// SYNTHETIC REGIONS
// -----------------------------------------------------------------------------

/// One step of a synthetic-region recipe.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "op", content = "regions")]
pub enum SetOp {
    /// Add every country of the listed regions.
    Union(Vec<String>),
    /// Remove every country of the listed regions.
    Difference(Vec<String>),
}

/// A region derived by set algebra instead of source rows.
///
/// Steps apply in order, so "Africa minus Northern Africa plus Sudan" keeps
/// Sudan even though Sudan sits inside Northern Africa.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyntheticRegion {
    pub name: String,
    pub steps: Vec<SetOp>,
}

impl SyntheticRegion {
    pub fn evaluate(&self, db: &RegionDb) -> Result<CountrySet> {
        let mut set = CountrySet::new();
        for step in &self.steps {
            match step {
                SetOp::Union(names) => set = set.union(&CountrySet::from_regions(db, names)?),
                SetOp::Difference(names) => {
                    set = set.difference(&CountrySet::from_regions(db, names)?)
                }
            }
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{HierarchyBuilder, RegionRow};

    fn db() -> RegionDb {
        let rows = [
            (2, "002", "Africa"),
            (1, "015", "Northern Africa"),
            (0, "012", "Algeria"),
            (0, "729", "Sudan"),
            (1, "014", "Eastern Africa"),
            (0, "404", "Kenya"),
            (0, "800", "Uganda"),
            (2, "142", "Asia"),
            (0, "392", "Japan"),
        ];
        let mut builder = HierarchyBuilder::new();
        for (level, code, name) in rows {
            builder.push_row(&RegionRow::new(level, code, name)).unwrap();
        }
        builder.finish()
    }

    fn ccs(set: &CountrySet) -> Vec<&str> {
        set.iter().map(|c| c.alpha2.as_str()).collect()
    }

    #[test]
    fn union_deduplicates() {
        let db = db();
        let a = CountrySet::from_region(&db, "Africa").unwrap();
        let e = CountrySet::from_region(&db, "Eastern Africa").unwrap();
        let u = a.union(&e);
        // Eastern Africa is already inside Africa.
        assert_eq!(u.len(), a.len());
        assert_eq!(ccs(&u), vec!["DZ", "KE", "SD", "UG"]);
    }

    #[test]
    fn union_is_commutative_and_difference_removes_by_identity() {
        let db = db();
        let a = CountrySet::from_region(&db, "Africa").unwrap();
        let b = CountrySet::from_region(&db, "Asia").unwrap();
        assert_eq!(a.union(&b), b.union(&a));
        // union(A,B) \ A == B \ A
        assert_eq!(a.union(&b).difference(&a), b.difference(&a));
    }

    #[test]
    fn unknown_region_is_an_error() {
        let db = db();
        let err = CountrySet::from_region(&db, "Atlantis").unwrap_err();
        assert!(matches!(err, RegionError::RegionNotFound(_)));
    }

    #[test]
    fn synthetic_steps_apply_in_order() {
        let db = db();
        // Africa minus Northern Africa, then Sudan added back.
        let synth = SyntheticRegion {
            name: "Sub-Saharan-Africa".into(),
            steps: vec![
                SetOp::Union(vec!["Africa".into()]),
                SetOp::Difference(vec!["Northern Africa".into()]),
                SetOp::Union(vec!["Sudan".into()]),
            ],
        };
        let set = synth.evaluate(&db).unwrap();
        assert_eq!(ccs(&set), vec!["KE", "SD", "UG"]);
    }

    #[test]
    fn country_names_resolve_as_regions() {
        // A country node is registered in the index like any region, so it
        // can appear in a recipe directly.
        let db = db();
        let set = CountrySet::from_region(&db, "Japan").unwrap();
        assert_eq!(ccs(&set), vec!["JP"]);
    }
}
