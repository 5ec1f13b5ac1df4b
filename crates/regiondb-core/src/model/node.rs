// crates/regiondb-core/src/model/node.rs
use serde::{Deserialize, Serialize};

/// Index of a node in the [`super::RegionDb`] arena.
///
/// Nodes reference each other by id instead of owning pointers. A node can
/// legally appear in the child list of more than one region (a country may
/// belong to a continent and to an economic grouping at the same time), so
/// the arena is the single owner and everything else is an index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegionId(pub u32);

impl RegionId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Resolved country identity, as produced by a
/// [`crate::resolver::CountryResolver`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 two-letter code, e.g. "KE".
    pub alpha2: String,
    /// Zero-padded UN numeric code, e.g. "404".
    pub numeric: String,
    /// Canonical country name.
    pub name: String,
}

/// A node of the region tree.
///
/// `level` is an inverted depth marker: the root carries the highest level,
/// countries carry level 0. `parent` is a back-reference only and is set at
/// most once; the first writer wins and later placements never re-parent.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegionNode {
    pub id: RegionId,
    pub name: String,
    pub numeric_code: Option<String>,
    pub level: i32,
    pub parent: Option<RegionId>,
    pub children: Vec<RegionId>,
    /// Present only for level-0 nodes whose numeric code resolved. A level-0
    /// node without it is a countryless leaf and contributes nothing to
    /// country aggregation.
    pub country: Option<Country>,
}

impl RegionNode {
    /// True for resolved country leaves.
    #[inline]
    pub fn is_country(&self) -> bool {
        self.country.is_some()
    }
}
