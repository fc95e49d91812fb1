//! Custom block registry loader.

use std::path::Path;

use crate::catalog::CustomBlockCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for custom block registrations from RON files.
pub struct CustomBlockLoader;

impl CustomBlockLoader {
    pub fn load(path: &Path) -> LoadResult<CustomBlockCatalog> {
        let content = read_file(path)?;
        ron::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse custom blocks RON {}: {}", path.display(), e)
        })
    }
}
