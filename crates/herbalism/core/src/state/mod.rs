//! Per-interaction snapshots: the target block and the acting player.
//!
//! Everything here is transient. The host builds a fresh snapshot for every
//! interaction event and discards it after resolution.
mod actor;
mod block;
mod item;

pub use actor::{ActorFlags, ActorId, ActorState, InventoryState};
pub use block::{
    BlockKind, BlockState, CropKind, HarvestableKind, Location, Point, StackedKind,
};
pub use item::{ItemKind, ItemStack};
