//! High-level runtime orchestrator.
//!
//! The runtime owns the harvest worker, wires up command/event channels, and
//! exposes a builder-based API for clients to drive herbalism interactions.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

use herbalism_content::ContentBundle;
use herbalism_core::HerbalismConfig;

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::oracle::{OracleManager, PermissionOracleImpl};
use crate::players::{PlayerProfile, PlayerStore};
use crate::workers::{Command, HarvestWorker};
use crate::world::WorldStore;

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub herbalism: HerbalismConfig,
    /// Base seed mixed into every interaction seed.
    pub seed: u64,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            herbalism: HerbalismConfig::default(),
            seed: 0,
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// Main runtime that owns the harvest worker
///
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker stops once every outstanding handle has been dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);
        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    oracles: Option<OracleManager>,
    permissions: Option<PermissionOracleImpl>,
    world: WorldStore,
    players: PlayerStore,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            oracles: None,
            permissions: None,
            world: WorldStore::new(),
            players: PlayerStore::new(),
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Use loaded content for both the herbalism config and the oracles.
    pub fn content(mut self, content: &ContentBundle) -> Self {
        self.config.herbalism = content.config.clone();
        self.oracles = Some(OracleManager::from_content(content));
        self
    }

    /// Set the oracle manager directly
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Replace the default grant-everything permissions.
    pub fn permissions(mut self, permissions: PermissionOracleImpl) -> Self {
        self.permissions = Some(permissions);
        self
    }

    /// Provide the initial world
    pub fn world(mut self, world: WorldStore) -> Self {
        self.world = world;
        self
    }

    pub fn player(mut self, profile: PlayerProfile) -> Self {
        self.players.insert(profile);
        self
    }

    /// Build the runtime and spawn the harvest worker.
    ///
    /// Falls back to the classic content when no oracles were supplied.
    pub async fn build(self) -> Result<Runtime> {
        self.config.herbalism.validate()?;

        let mut oracles = self
            .oracles
            .unwrap_or_else(|| OracleManager::from_content(&ContentBundle::classic()));
        if let Some(permissions) = self.permissions {
            oracles = oracles.with_permissions(permissions);
        }

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);
        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let worker = HarvestWorker::new(
            self.config.herbalism,
            oracles,
            self.world,
            self.players,
            command_rx,
            event_bus,
            self.config.seed,
        );
        let worker_handle = tokio::spawn(worker.run());
        info!(seed = self.config.seed, "runtime started");

        Ok(Runtime {
            handle,
            worker_handle,
        })
    }
}
