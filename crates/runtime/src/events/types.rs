//! Event payloads published by the harvest worker.

use herbalism_core::{ActorId, BlockKind, BlockState, ItemStack, Location, Message, StagedReplant};
use serde::{Deserialize, Serialize};

/// Outcome of a harvest interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HarvestEvent {
    Harvested {
        actor: ActorId,
        block: BlockState,
        reward: u32,
        bonus_units: u32,
        cells: u32,
    },
    /// The eligibility gate rejected the interaction; the block still broke.
    Ignored { actor: ActorId, block: BlockState },
}

/// Sub-skill activations that changed the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AbilityEvent {
    TreasureDropped {
        actor: ActorId,
        location: Location,
        item: ItemStack,
    },
    BlockConverted {
        actor: ActorId,
        location: Location,
        from: BlockKind,
        to: BlockKind,
    },
    Notified { actor: ActorId, message: Message },
}

/// Green Thumb replant lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GrowthEvent {
    ReplantStaged {
        actor: ActorId,
        replant: StagedReplant,
    },
    Replanted { replant: StagedReplant },
    /// The cell was no longer empty when the replant came due.
    ReplantDropped { replant: StagedReplant },
}
