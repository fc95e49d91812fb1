//! Worker tasks that back the runtime orchestration.
//!
//! The harvest worker owns the world and player state and executes every
//! herbalism command in arrival order.

mod harvest;

pub use harvest::{Command, HarvestWorker};
