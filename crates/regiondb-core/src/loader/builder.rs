// crates/regiondb-core/src/loader/builder.rs

//! # Hierarchy construction
//!
//! Region sheets are authored as an outline: row order plus a level column
//! encode the tree shape, there are no parent pointers. This builder
//! reconstructs the tree in a single pass over the rows, tracking only the
//! current insertion point and a stack of ancestors.

use tracing::warn;

use super::RegionRow;
use crate::error::{RegionError, Result};
use crate::model::{RegionDb, RegionId, WORLD_CODE, WORLD_LEVEL, WORLD_NAME};
use crate::resolver::{CountryResolver, IsoCountryTable};

/// Streaming tree builder over `(level, code, name)` rows.
///
/// Levels are inverted depth: the synthetic root sits at [`WORLD_LEVEL`],
/// countries at 0. Three row shapes move the insertion point:
///
/// * a row below the current level descends into a new child,
/// * a row at or above the current level walks the ancestor stack back up
///   until a region that outranks it is found, then descends,
/// * a negative row level is a lateral add: the node lands beside the
///   current position and the insertion point does not move.
///
/// Country rows (level 0) always attach to the current region without
/// moving it.
pub struct HierarchyBuilder<R = IsoCountryTable> {
    db: RegionDb,
    current: RegionId,
    stack: Vec<RegionId>,
    resolver: R,
}

impl HierarchyBuilder<IsoCountryTable> {
    pub fn new() -> Self {
        Self::with_resolver(IsoCountryTable)
    }
}

impl Default for HierarchyBuilder<IsoCountryTable> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CountryResolver> HierarchyBuilder<R> {
    pub fn with_resolver(resolver: R) -> Self {
        let db = RegionDb::new(WORLD_NAME, WORLD_CODE, WORLD_LEVEL);
        let current = db.root();
        HierarchyBuilder {
            db,
            current,
            stack: Vec::new(),
            resolver,
        }
    }

    /// Feeds one row into the tree. Rows with a blank name are skipped.
    pub fn push_row(&mut self, row: &RegionRow) -> Result<()> {
        let name = row.name.trim();
        if name.is_empty() {
            return Ok(());
        }

        let id = match self.db.find_id(name) {
            Some(id) => id,
            None => {
                let code = row.numeric_code.trim();
                let country = if row.level == 0 {
                    let resolved = self.resolver.resolve(code);
                    if resolved.is_none() {
                        warn!(code, name, "numeric code did not resolve to a country");
                    }
                    resolved
                } else {
                    None
                };
                let numeric_code = (!code.is_empty()).then(|| code.to_string());
                self.db.insert(name, numeric_code, row.level, country)
            }
        };
        // The first occurrence of a name is authoritative; a repeated row's
        // level cell is ignored.
        let level = self.db.node(id).level;

        if level == 0 {
            // Country: always attach to the current region.
            self.db.add_child(self.current, id);
            self.db.adopt(self.current, id);
        } else if row.level < 0 {
            // Lateral add, insertion point stays put.
            self.db.add_child(self.current, id);
        } else if level < self.db.node(self.current).level {
            // Proper child of the current region: descend.
            self.db.add_child(self.current, id);
            self.db.adopt(self.current, id);
            self.stack.push(self.current);
            self.current = id;
        } else {
            // Walk back up until an ancestor outranks this row, then descend.
            while self.db.node(self.current).level <= level {
                self.current = self.stack.pop().ok_or_else(|| {
                    RegionError::MalformedHierarchy {
                        name: name.to_string(),
                        level,
                    }
                })?;
            }
            self.db.add_child(self.current, id);
            self.db.adopt(self.current, id);
            self.stack.push(self.current);
            self.current = id;
        }
        Ok(())
    }

    pub fn ingest<I>(&mut self, rows: I) -> Result<()>
    where
        I: IntoIterator<Item = RegionRow>,
    {
        for row in rows {
            self.push_row(&row)?;
        }
        Ok(())
    }

    /// Finalizes construction. The returned database is read-only from here.
    pub fn finish(self) -> RegionDb {
        self.db
    }
}
