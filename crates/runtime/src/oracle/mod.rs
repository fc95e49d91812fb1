//! Runtime wrappers around static herbalism content oracles.
//!
//! These implementations expose `herbalism-core` oracle traits and bundle
//! them into an [`OracleManager`] so the runtime can build
//! [`herbalism_core::HerbalismEnv`] snapshots on demand. Content data is
//! immutable at runtime; the mutable world lives in [`crate::world`].
mod custom;
mod permissions;
mod tables;

use std::sync::Arc;

use herbalism_content::ContentBundle;
use herbalism_core::{Env, HerbalismEnv, PcgRng};

pub use custom::CustomBlockOracleImpl;
pub use permissions::PermissionOracleImpl;
pub use tables::TablesOracleImpl;

use crate::world::WorldStore;

/// Manages all static oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) tables: Arc<TablesOracleImpl>,
    pub(crate) custom_blocks: Arc<CustomBlockOracleImpl>,
    pub(crate) permissions: Arc<PermissionOracleImpl>,
    pub(crate) rng: PcgRng,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(
        tables: Arc<TablesOracleImpl>,
        custom_blocks: Arc<CustomBlockOracleImpl>,
        permissions: Arc<PermissionOracleImpl>,
    ) -> Self {
        Self {
            tables,
            custom_blocks,
            permissions,
            rng: PcgRng,
        }
    }

    /// Builds oracles from loaded content with everyone holding every capability.
    pub fn from_content(content: &ContentBundle) -> Self {
        Self::new(
            Arc::new(TablesOracleImpl::new(content.tables.clone())),
            Arc::new(CustomBlockOracleImpl::new(&content.custom_blocks)),
            Arc::new(PermissionOracleImpl::new()),
        )
    }

    pub fn with_permissions(mut self, permissions: PermissionOracleImpl) -> Self {
        self.permissions = Arc::new(permissions);
        self
    }

    /// Combines the static oracles with the current world into a `HerbalismEnv`.
    pub fn as_herbalism_env<'a>(&'a self, world: &'a WorldStore) -> HerbalismEnv<'a> {
        Env::with_all(
            world,
            self.permissions.as_ref(),
            world,
            world,
            self.tables.as_ref(),
            self.custom_blocks.as_ref(),
            &self.rng,
        )
        .into_herbalism_env()
    }

    pub fn tables(&self) -> &TablesOracleImpl {
        &self.tables
    }

    pub fn custom_blocks(&self) -> &CustomBlockOracleImpl {
        &self.custom_blocks
    }
}
