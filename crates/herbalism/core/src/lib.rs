//! Deterministic herbalism outcome resolution.
//!
//! `herbalism-core` decides what harvesting a plant (or using a herbalism
//! ability on a block) yields: whether it counts, how much experience it
//! grants, bonus drops, Green Thumb replants, Hylian Luck treasure and block
//! conversions. It reads the world through the oracles in [`env`] and never
//! mutates anything; every operation on [`skill::HerbalismManager`] returns
//! the [`effect::Effect`]s the host should apply.
pub mod config;
pub mod effect;
pub mod env;
pub mod error;
pub mod skill;
pub mod state;

pub use config::{ConfigError, HerbalismConfig, SkillChance};
pub use effect::{Effect, EffectBatch, Message, StagedReplant, XpGainReason};
pub use env::{
    BreakPolicyOracle, Capability, CustomBlockConfig, CustomBlockOracle, Env, HerbalismEnv,
    HylianTreasure, OracleError, PcgRng, PermissionOracle, PlaceStoreOracle, RngOracle,
    RollContext, RollSeed, TablesOracle, WorldOracle, compute_seed,
};
pub use error::{ErrorSeverity, HerbalismError};
pub use skill::{
    ActivationRoll, ConversionOutcome, ConversionResult, GreenThumbOutcome, GrowthStage,
    HarvestOutcome, HerbalismManager, RollOutcome, ShroomThumbOutcome, TreasureOutcome,
    TreasureResult, YieldOutcome,
};
pub use state::{
    ActorFlags, ActorId, ActorState, BlockKind, BlockState, CropKind, HarvestableKind,
    InventoryState, ItemKind, ItemStack, Location, Point, StackedKind,
};
