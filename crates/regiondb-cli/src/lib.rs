//! regiondb-cli
//! ============
//!
//! Command-line interface for the `regiondb-core` region hierarchy builder.
//!
//! This crate primarily provides a binary (`regiondb-cli`). We include a
//! small library target so that docs.rs renders a documentation page and
//! shows this overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! ```text
//! regiondb-cli --help
//! regiondb-cli -i un_world_geographic_regions.csv stats
//! regiondb-cli -i un_world_geographic_regions.csv region Africa
//! regiondb-cli -i un_world_geographic_regions.csv flatten
//! ```
//!
//! For programmatic access to the hierarchy and its queries, use the
//! [`regiondb-core`] crate directly.
//!
//! Links
//! -----
//! - Core crate: <https://docs.rs/regiondb-core>

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
