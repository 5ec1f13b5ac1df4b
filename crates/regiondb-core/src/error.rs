// crates/regiondb-core/src/error.rs
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RegionError>;

/// Errors produced while ingesting rows, building the hierarchy or writing
/// artifacts.
///
/// Only [`RegionError::MalformedHierarchy`] aborts a batch; everything the
/// builder and flattener can recover from is reported through `tracing`
/// warnings instead of this enum.
#[derive(Debug, Error)]
pub enum RegionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The ascending search ran out of ancestors. The input ordering is
    /// broken and no tree built past this point can be trusted.
    #[error("malformed hierarchy: no ancestor above level {level} while placing {name:?}")]
    MalformedHierarchy { name: String, level: i32 },

    #[error("dataset not found: {0}")]
    NotFound(String),

    #[error("region not found: {0}")]
    RegionNotFound(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
