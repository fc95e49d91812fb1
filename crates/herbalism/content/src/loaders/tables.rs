//! Experience and treasure tables loader.

use std::path::Path;

use crate::catalog::HerbalismTables;
use crate::loaders::{LoadResult, read_file};

/// Loader for herbalism tables from RON files.
pub struct TablesLoader;

impl TablesLoader {
    pub fn load(path: &Path) -> LoadResult<HerbalismTables> {
        let content = read_file(path)?;
        ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tables RON {}: {}", path.display(), e))
    }
}
