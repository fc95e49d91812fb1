//! Data-driven herbalism content and loaders.
//!
//! This crate houses the balance data the resolver reads through its oracles
//! and provides loaders for the files that carry it:
//! - Herbalism configuration (TOML)
//! - Experience values, double-drop switches and Hylian Luck treasures (RON)
//! - Custom block registrations (RON)
//!
//! Content is consumed by runtime oracles and never appears in player state.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{CustomBlockCatalog, CustomBlockEntry, HerbalismTables};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentBundle, ContentFactory, CustomBlockLoader, LoadResult, TablesLoader,
};
