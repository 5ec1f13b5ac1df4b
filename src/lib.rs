// src/lib.rs

//! regiondb-rs — workspace facade over `regiondb-core`.
//!
//! Hosts the demos and re-exports the core API so examples can pull
//! everything through one prelude.

pub use regiondb_core;

/// One-stop imports for demos and quick scripts.
pub mod prelude {
    pub use regiondb_core::{
        Country, CountrySet, DbStats, FlatTable, Flattener, Grouping, HierarchyBuilder,
        IsoCountryTable, RegionDb, RegionError, RegionProfile, RegionRow, Result,
    };
}
