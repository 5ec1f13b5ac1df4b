// crates/regiondb-core/src/lib.rs

pub mod algebra; // Set algebra over country sets
pub mod common;
pub mod config; // Grouping profiles (UN M49 defaults + JSON)
pub mod error;
pub mod export; // CSV/JSON artifact writers
pub mod flatten;
pub mod loader; // Row ingestion + the hierarchy builder
pub mod model;
pub mod resolver; // Numeric code -> country identity
pub mod text;

// Re-exports
pub use crate::error::{RegionError, Result};
pub use crate::algebra::{CountrySet, SetOp, SyntheticRegion};
pub use crate::common::DbStats;
pub use crate::config::RegionProfile;
pub use crate::flatten::{ColumnSpec, Collision, FlatTable, Flattener, Grouping};
pub use crate::loader::{HierarchyBuilder, RegionRow};
pub use crate::model::{Country, RegionDb, RegionId, RegionNode};
pub use crate::resolver::{CountryResolver, IsoCountryTable};
pub use crate::text::{equals_folded, fold_key};
