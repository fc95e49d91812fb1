//! Mutable world state owned by the harvest worker.
//!
//! [`WorldStore`] is the runtime's stand-in for the host world: block
//! snapshots, the player-placed marker store, protected cells that veto
//! breaks, items lying on the ground, pending bonus-drop marks and Green
//! Thumb replant stamps. It implements the world-facing oracles so resolvers
//! can read it directly.
use std::collections::{HashMap, HashSet};

use herbalism_core::{
    ActorId, BlockKind, BlockState, BreakPolicyOracle, ItemStack, Location, PlaceStoreOracle,
    Point, WorldOracle,
};
use serde::{Deserialize, Serialize};

/// An item spawned into the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DroppedItem {
    pub at: Point,
    pub item: ItemStack,
}

/// Cells removed by one break and the bonus drops they released.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrokenPlant {
    pub cells: Vec<BlockState>,
    pub bonus_drops: u32,
}

impl BrokenPlant {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct WorldStore {
    blocks: HashMap<Location, BlockState>,
    placed: HashSet<Location>,
    protected: HashSet<Location>,
    bonus_drops: HashMap<Location, u32>,
    replanted: HashMap<Location, u64>,
    dropped: Vec<DroppedItem>,
}

impl WorldStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block at `location`; unset cells read as air.
    pub fn block(&self, location: Location) -> BlockState {
        self.blocks
            .get(&location)
            .copied()
            .unwrap_or_else(|| BlockState::new(location, BlockKind::Air))
    }

    pub fn set_block(&mut self, block: BlockState) {
        if block.kind == BlockKind::Air {
            self.blocks.remove(&block.location);
        } else {
            self.blocks.insert(block.location, block);
        }
    }

    pub fn set_kind(&mut self, location: Location, kind: BlockKind) {
        let age = self.block(location).age;
        self.set_block(BlockState::new(location, kind).with_age(age));
    }

    /// Clears the cell with its placed marker, bonus marks and replant stamp.
    pub fn set_empty(&mut self, location: Location) {
        self.blocks.remove(&location);
        self.placed.remove(&location);
        self.bonus_drops.remove(&location);
        self.replanted.remove(&location);
    }

    /// Places a block as a player would, marking it as placed.
    pub fn place_block(&mut self, block: BlockState) {
        self.set_block(block);
        self.placed.insert(block.location);
    }

    pub fn is_empty(&self, location: Location) -> bool {
        !self.blocks.contains_key(&location)
    }

    pub fn protect(&mut self, location: Location) {
        self.protected.insert(location);
    }

    pub fn unprotect(&mut self, location: Location) {
        self.protected.remove(&location);
    }

    pub fn mark_bonus_drops(&mut self, location: Location, units: u32) {
        *self.bonus_drops.entry(location).or_default() += units;
    }

    /// Pending extra drop units at `location`.
    pub fn bonus_drops(&self, location: Location) -> u32 {
        self.bonus_drops.get(&location).copied().unwrap_or(0)
    }

    /// Removes and returns the pending bonus units at `location`.
    pub fn take_bonus_drops(&mut self, location: Location) -> u32 {
        self.bonus_drops.remove(&location).unwrap_or(0)
    }

    /// Stamps a Green Thumb replant with the time it was staged.
    pub fn mark_replanted(&mut self, location: Location, at: u64) {
        self.replanted.insert(location, at);
    }

    pub fn replanted_at(&self, location: Location) -> Option<u64> {
        self.replanted.get(&location).copied()
    }

    pub fn drop_item(&mut self, at: Point, item: ItemStack) {
        self.dropped.push(DroppedItem { at, item });
    }

    pub fn dropped_items(&self) -> &[DroppedItem] {
        &self.dropped
    }

    /// Breaks a harvested plant the way the host's physics would.
    ///
    /// Stacked plants lose every same-kind cell above the broken one; kelp
    /// loses every kelp cell above it, and a `Kelp` top takes the
    /// `KelpPlant` directly under it. Bonus marks on the removed cells are
    /// released into the result.
    pub fn break_plant(&mut self, location: Location) -> BrokenPlant {
        let origin = self.block(location);
        if origin.kind == BlockKind::Air {
            return BrokenPlant::default();
        }

        let mut broken = Vec::new();
        if origin.kind == BlockKind::Kelp {
            let below = self.block(location.down(1));
            if below.kind == BlockKind::KelpPlant {
                broken.push(below);
            }
        }
        broken.push(origin);
        let stacks = matches!(
            origin.kind,
            BlockKind::Cactus
                | BlockKind::ChorusPlant
                | BlockKind::SugarCane
                | BlockKind::TallGrass
                | BlockKind::TallSeagrass
        );
        if stacks || origin.kind.is_kelp() {
            let mut above = location.up(1);
            loop {
                let cell = self.block(above);
                let same = if origin.kind.is_kelp() {
                    cell.kind.is_kelp()
                } else {
                    cell.kind == origin.kind
                };
                if !same {
                    break;
                }
                broken.push(cell);
                above = above.up(1);
            }
        }

        let mut bonus_drops = 0;
        for cell in &broken {
            bonus_drops += self.take_bonus_drops(cell.location);
            self.set_empty(cell.location);
        }
        BrokenPlant {
            cells: broken,
            bonus_drops,
        }
    }
}

impl WorldOracle for WorldStore {
    fn block_at(&self, location: Location) -> Option<BlockState> {
        Some(self.block(location))
    }
}

impl PlaceStoreOracle for WorldStore {
    fn is_placed(&self, location: Location) -> bool {
        self.placed.contains(&location)
    }
}

impl BreakPolicyOracle for WorldStore {
    fn can_break(&self, _actor: ActorId, location: Location) -> bool {
        !self.protected.contains(&location)
    }
}
