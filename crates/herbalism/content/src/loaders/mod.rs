//! Content loaders for reading herbalism data from files.
//!
//! Configuration is TOML; tables and custom block registrations are RON.

pub mod config;
pub mod custom;
pub mod factory;
pub mod tables;

pub use config::ConfigLoader;
pub use custom::CustomBlockLoader;
pub use factory::{ContentBundle, ContentFactory};
pub use tables::TablesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
