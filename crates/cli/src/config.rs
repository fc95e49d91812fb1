//! CLI configuration read from the process environment.
use std::env;
use std::path::PathBuf;

use herbalism_content::ContentFactory;

/// Where content comes from and how the runtime is seeded.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub config_path: Option<PathBuf>,
    pub tables_path: Option<PathBuf>,
    pub custom_blocks_path: Option<PathBuf>,
    pub seed: u64,
    pub player_level: u32,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            config_path: None,
            tables_path: None,
            custom_blocks_path: None,
            seed: 0,
            player_level: 1000,
        }
    }
}

impl CliConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "crates/herbalism/content/data";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HERBALISM_DATA_DIR` - Directory holding the content files
    /// - `HERBALISM_CONFIG` - Skill configuration file (TOML)
    /// - `HERBALISM_TABLES` - Experience and treasure tables (RON)
    /// - `HERBALISM_CUSTOM_BLOCKS` - Custom block registry (RON)
    /// - `HERBALISM_SEED` - Base seed for every roll (default: 0)
    /// - `HERBALISM_PLAYER_LEVEL` - Skill level of the scripted player (default: 1000)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("HERBALISM_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        config.config_path = env::var("HERBALISM_CONFIG").ok().map(PathBuf::from);
        config.tables_path = env::var("HERBALISM_TABLES").ok().map(PathBuf::from);
        config.custom_blocks_path = env::var("HERBALISM_CUSTOM_BLOCKS").ok().map(PathBuf::from);

        if let Some(seed) = read_env::<u64>("HERBALISM_SEED") {
            config.seed = seed;
        }
        if let Some(level) = read_env::<u32>("HERBALISM_PLAYER_LEVEL") {
            config.player_level = level;
        }

        config
    }

    pub fn content_factory(&self) -> ContentFactory {
        let mut factory = ContentFactory::new(&self.data_dir);
        if let Some(path) = &self.config_path {
            factory = factory.with_config_path(path);
        }
        if let Some(path) = &self.tables_path {
            factory = factory.with_tables_path(path);
        }
        if let Some(path) = &self.custom_blocks_path {
            factory = factory.with_custom_blocks_path(path);
        }
        factory
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
