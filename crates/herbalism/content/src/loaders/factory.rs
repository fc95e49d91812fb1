//! Content factory for loading every herbalism data file at once.

use std::path::{Path, PathBuf};

use herbalism_core::HerbalismConfig;

use crate::catalog::{CustomBlockCatalog, HerbalismTables};
use crate::loaders::{ConfigLoader, CustomBlockLoader, LoadResult, TablesLoader};

/// Everything the runtime needs to build its oracles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentBundle {
    pub config: HerbalismConfig,
    pub tables: HerbalismTables,
    pub custom_blocks: CustomBlockCatalog,
}

impl ContentBundle {
    /// Default configuration with the stock tables and no custom blocks.
    pub fn classic() -> Self {
        Self {
            config: HerbalismConfig::default(),
            tables: HerbalismTables::classic(),
            custom_blocks: CustomBlockCatalog::default(),
        }
    }
}

/// Content factory that loads herbalism content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── tables.ron
/// └── custom_blocks.ron
/// ```
///
/// Absent files fall back to the defaults of [`ContentBundle::classic`].
/// Individual paths can be overridden.
pub struct ContentFactory {
    data_dir: PathBuf,
    config_path: Option<PathBuf>,
    tables_path: Option<PathBuf>,
    custom_blocks_path: Option<PathBuf>,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const TABLES_FILE: &'static str = "tables.ron";
    pub const CUSTOM_BLOCKS_FILE: &'static str = "custom_blocks.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            config_path: None,
            tables_path: None,
            custom_blocks_path: None,
        }
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn with_tables_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tables_path = Some(path.into());
        self
    }

    pub fn with_custom_blocks_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.custom_blocks_path = Some(path.into());
        self
    }

    fn resolve(&self, explicit: &Option<PathBuf>, file: &str) -> PathBuf {
        explicit.clone().unwrap_or_else(|| self.data_dir.join(file))
    }

    /// Load configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<HerbalismConfig> {
        let path = self.resolve(&self.config_path, Self::CONFIG_FILE);
        load_or(&path, ConfigLoader::load, HerbalismConfig::default)
    }

    /// Load experience and treasure tables from `tables.ron`.
    pub fn load_tables(&self) -> LoadResult<HerbalismTables> {
        let path = self.resolve(&self.tables_path, Self::TABLES_FILE);
        load_or(&path, TablesLoader::load, HerbalismTables::classic)
    }

    /// Load custom block registrations from `custom_blocks.ron`.
    pub fn load_custom_blocks(&self) -> LoadResult<CustomBlockCatalog> {
        let path = self.resolve(&self.custom_blocks_path, Self::CUSTOM_BLOCKS_FILE);
        load_or(&path, CustomBlockLoader::load, CustomBlockCatalog::default)
    }

    pub fn load_all(&self) -> LoadResult<ContentBundle> {
        Ok(ContentBundle {
            config: self.load_config()?,
            tables: self.load_tables()?,
            custom_blocks: self.load_custom_blocks()?,
        })
    }
}

fn load_or<T>(
    path: &Path,
    load: impl FnOnce(&Path) -> LoadResult<T>,
    fallback: impl FnOnce() -> T,
) -> LoadResult<T> {
    if path.exists() {
        load(path)
    } else {
        Ok(fallback())
    }
}
