use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a built hierarchy.
///
/// Returned by [`crate::model::RegionDb::stats`]; the counts reflect the
/// materialized in-memory database after construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DbStats {
    /// Every node in the arena, the synthetic root included.
    pub regions: usize,
    /// Leaves whose numeric code resolved to a known country.
    pub countries: usize,
    /// Distinct level values seen in the input.
    pub levels: usize,
}
