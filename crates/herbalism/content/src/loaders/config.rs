//! Herbalism configuration loader.

use std::path::Path;

use herbalism_core::HerbalismConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for herbalism configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate config data from a TOML file.
    ///
    /// Missing keys fall back to [`HerbalismConfig::default`].
    pub fn load(path: &Path) -> LoadResult<HerbalismConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| e.context(format!("Invalid config {}", path.display())))
    }

    pub fn parse(content: &str) -> LoadResult<HerbalismConfig> {
        let config: HerbalismConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}
