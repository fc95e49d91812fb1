//! Runtime orchestration for herbalism interactions.
//!
//! This crate hosts the mutable state the deterministic resolver in
//! `herbalism-core` only reads: the world, player progression and the tick
//! clock for delayed replants. Consumers embed [`Runtime`] and interact with
//! it through the cloneable [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`oracle`] adapts loaded content to the resolver's oracle traits
//! - [`world`], [`players`] and [`scheduler`] hold the state the worker mutates
//! - [`applier`] turns resolver effects into state changes
//! - [`workers`] keeps background tasks internal to the crate
pub mod api;
pub mod applier;
pub mod events;
pub mod oracle;
pub mod players;
pub mod runtime;
pub mod scheduler;
pub mod world;

mod workers;

pub use api::{
    ConversionReport, HarvestReport, HarvestSummary, Result, RuntimeError, RuntimeHandle,
    TreasureReport,
};
pub use applier::{AppliedEffects, EffectApplier};
pub use events::{AbilityEvent, Event, EventBus, GrowthEvent, HarvestEvent, Topic};
pub use oracle::{CustomBlockOracleImpl, OracleManager, PermissionOracleImpl, TablesOracleImpl};
pub use players::{PlayerProfile, PlayerStore};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use scheduler::{ReplantResult, TickScheduler};
pub use world::{BrokenPlant, DroppedItem, WorldStore};
