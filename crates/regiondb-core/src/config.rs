// crates/regiondb-core/src/config.rs

//! # Grouping profiles
//!
//! A profile names the output groupings, the synthetic regions derived by
//! set algebra, and the levels whose regions get individual country-list
//! exports. Profiles load from JSON; [`RegionProfile::un_defaults`] carries
//! the UN M49 configuration the batch was originally written for.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::algebra::{SetOp, SyntheticRegion};
use crate::error::Result;
use crate::flatten::Grouping;

fn default_export_levels() -> Vec<i32> {
    vec![4, 3, 2, 1]
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegionProfile {
    pub groupings: Vec<Grouping>,
    #[serde(default)]
    pub synthetic: Vec<SyntheticRegion>,
    /// Levels whose regions get per-region country lists, top first.
    #[serde(default = "default_export_levels")]
    pub export_levels: Vec<i32>,
}

impl RegionProfile {
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let profile = serde_json::from_reader(BufReader::new(file))?;
        Ok(profile)
    }

    /// The UN M49 profile: continents, sub-continent regions, economic
    /// groups, developing-nation groups and the special set, plus the two
    /// derived regions they reference.
    ///
    /// Note that a country can be in multiple regional units, so each
    /// grouping column is chosen to be a dichotomy within itself.
    pub fn un_defaults() -> Self {
        let grouping = |column: &str, description: &str, regions: &[&str]| Grouping {
            column: column.to_string(),
            description: description.to_string(),
            regions: regions.iter().map(|r| r.to_string()).collect(),
        };
        let names = |list: &[&str]| list.iter().map(|n| n.to_string()).collect::<Vec<_>>();

        RegionProfile {
            groupings: vec![
                grouping(
                    "continent",
                    "UN defined Continents",
                    &["Africa", "Americas", "Asia", "Europe", "Oceania"],
                ),
                grouping(
                    "un_region",
                    "UN defined sub-continent major geographic regions",
                    &[
                        "Caribbean",
                        "Central America",
                        "Central Asia",
                        "Eastern Africa",
                        "Eastern Asia",
                        "Eastern Europe",
                        "Melanesia",
                        "Micronesia",
                        "Middle Africa",
                        "Northern Africa",
                        "Northern America",
                        "Northern Europe",
                        "Polynesia",
                        "South America",
                        "South-Eastern Asia",
                        "Southern Africa",
                        "Southern Asia",
                        "Southern Europe",
                        "Western Africa",
                        "Western Asia",
                        "Western Europe",
                    ],
                ),
                grouping(
                    "econ_group",
                    "UN defined major geographical economic groups (developing and developed nations)",
                    &["Developed regions", "Developing_Nations"],
                ),
                grouping(
                    "developing_nation",
                    "UN defined developing nation groups",
                    &["Least developed countries"],
                ),
                grouping(
                    "special_region1",
                    "Special Regions Set 1",
                    &["Latin America and the Caribbean", "Sub-Saharan-Africa"],
                ),
            ],
            synthetic: vec![
                SyntheticRegion {
                    name: "Developing_Nations".to_string(),
                    steps: vec![
                        SetOp::Union(names(&[
                            "Africa",
                            "Americas",
                            "Caribbean",
                            "Central America",
                            "South America",
                            "Asia",
                            "Oceania",
                        ])),
                        SetOp::Difference(names(&[
                            "Northern America",
                            "Japan",
                            "Australia",
                            "New Zealand",
                        ])),
                    ],
                },
                // Sudan is filed under Northern Africa in the source sheet,
                // so it must come back after the subtraction.
                SyntheticRegion {
                    name: "Sub-Saharan-Africa".to_string(),
                    steps: vec![
                        SetOp::Union(names(&["Africa"])),
                        SetOp::Difference(names(&["Northern Africa"])),
                        SetOp::Union(names(&["Sudan"])),
                    ],
                },
            ],
            export_levels: default_export_levels(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn un_defaults_shape() {
        let profile = RegionProfile::un_defaults();
        let columns: Vec<&str> = profile.groupings.iter().map(|g| g.column.as_str()).collect();
        assert_eq!(
            columns,
            vec![
                "continent",
                "un_region",
                "econ_group",
                "developing_nation",
                "special_region1"
            ]
        );
        assert_eq!(profile.groupings[1].regions.len(), 21);
        assert_eq!(profile.synthetic.len(), 2);
        assert_eq!(profile.export_levels, vec![4, 3, 2, 1]);
    }

    #[test]
    fn profile_loads_from_json() {
        let json = r#"{
            "groupings": [
                {"column": "continent", "description": "Continents", "regions": ["Africa"]}
            ],
            "synthetic": [
                {"name": "Custom", "steps": [{"op": "union", "regions": ["Africa"]}]}
            ]
        }"#;
        let profile: RegionProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.groupings.len(), 1);
        assert_eq!(profile.synthetic[0].steps.len(), 1);
        // Omitted levels fall back to the default report range.
        assert_eq!(profile.export_levels, vec![4, 3, 2, 1]);
    }
}
