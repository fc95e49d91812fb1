//! Herbalism resolvers.
//!
//! Every operation hangs off [`HerbalismManager`] and returns an outcome
//! carrying the effects the host should apply:
//! - [`gate`]: eligibility of an interaction
//! - [`yields`]: experience and bonus drops, plus the harvest entry point
//! - [`growth`]: Green Thumb replanting
//! - [`treasure`]: Hylian Luck
//! - [`convert`]: Shroom Thumb, Green Thumb blocks and Green Terra
//! - [`diet`]: Farmer's Diet
pub mod activation;
pub mod convert;
pub mod diet;
pub mod gate;
pub mod growth;
mod manager;
pub mod treasure;
pub mod yields;

pub use activation::{
    ActivationRoll, RollOutcome, roll_activation, roll_treasure_drop, success_probability,
};
pub use convert::{ConversionOutcome, ConversionResult, ShroomThumbOutcome};
pub use growth::{GreenThumbOutcome, GreenThumbResolution, GrowthStage, target_age};
pub use manager::HerbalismManager;
pub use treasure::{TreasureOutcome, TreasureResult};
pub use yields::{HarvestOutcome, YieldOutcome};
