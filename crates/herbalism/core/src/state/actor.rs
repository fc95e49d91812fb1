//! Read view of the interacting player.
//!
//! The host copies the player's skill level, ability flags and inventory
//! into an [`ActorState`] before resolution; the resolver never writes back.

use std::fmt;

use arrayvec::ArrayVec;
use bitflags::bitflags;

use crate::config::HerbalismConfig;
use crate::state::{ItemKind, ItemStack};

/// Unique identifier for a player known to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

bitflags! {
    /// Transient player conditions the rules branch on.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ActorFlags: u8 {
        /// Riding a vehicle or mount.
        const IN_VEHICLE = 1 << 0;
        /// Green Terra super ability is running.
        const GREEN_TERRA_ACTIVE = 1 << 1;
        /// Hoe readied for super ability activation.
        const HOE_PREPARED = 1 << 2;
        /// Holds the lucky perk (better activation odds).
        const LUCKY = 1 << 3;
    }
}

/// Player inventory as a bounded list of stacks.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryState {
    pub items: ArrayVec<ItemStack, { HerbalismConfig::MAX_INVENTORY_SLOTS }>,
}

impl InventoryState {
    pub fn new(items: ArrayVec<ItemStack, { HerbalismConfig::MAX_INVENTORY_SLOTS }>) -> Self {
        Self { items }
    }

    pub fn empty() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    /// Builds an inventory from stacks, ignoring anything past the slot limit.
    pub fn from_stacks(stacks: impl IntoIterator<Item = ItemStack>) -> Self {
        Self {
            items: stacks
                .into_iter()
                .take(HerbalismConfig::MAX_INVENTORY_SLOTS)
                .collect(),
        }
    }

    /// Total amount of `item` across all slots.
    pub fn count(&self, item: ItemKind) -> u32 {
        self.items
            .iter()
            .filter(|stack| stack.item == item)
            .map(|stack| u32::from(stack.amount))
            .sum()
    }

    pub fn contains(&self, item: ItemKind, min_amount: u32) -> bool {
        self.count(item) >= min_amount
    }
}

/// Snapshot of the interacting player.
///
/// `held` mirrors the selected hotbar stack, which is also one of the
/// inventory slots.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: ActorId,
    /// Herbalism skill level.
    pub level: u32,
    pub flags: ActorFlags,
    pub held: Option<ItemStack>,
    pub inventory: InventoryState,
}

impl ActorState {
    pub fn new(id: ActorId, level: u32) -> Self {
        Self {
            id,
            level,
            flags: ActorFlags::empty(),
            held: None,
            inventory: InventoryState::empty(),
        }
    }

    pub fn with_flags(mut self, flags: ActorFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_held(mut self, held: ItemStack) -> Self {
        self.held = Some(held);
        self
    }

    pub fn with_inventory(mut self, inventory: InventoryState) -> Self {
        self.inventory = inventory;
        self
    }

    pub fn in_vehicle(&self) -> bool {
        self.flags.contains(ActorFlags::IN_VEHICLE)
    }

    pub fn green_terra_active(&self) -> bool {
        self.flags.contains(ActorFlags::GREEN_TERRA_ACTIVE)
    }

    pub fn hoe_prepared(&self) -> bool {
        self.flags.contains(ActorFlags::HOE_PREPARED)
    }

    pub fn is_lucky(&self) -> bool {
        self.flags.contains(ActorFlags::LUCKY)
    }

    pub fn held_item(&self) -> Option<ItemKind> {
        self.held
            .filter(|stack| !stack.is_empty())
            .map(|stack| stack.item)
    }

    pub fn holds_hoe(&self) -> bool {
        self.held_item().is_some_and(ItemKind::is_hoe)
    }

    /// Hylian Luck only fires on a harvest swung with a sword.
    pub fn holds_sword(&self) -> bool {
        self.held_item().is_some_and(ItemKind::is_sword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_counts_across_slots() {
        let inventory = InventoryState::from_stacks([
            ItemStack::new(ItemKind::WheatSeeds, 3),
            ItemStack::new(ItemKind::Carrot, 1),
            ItemStack::new(ItemKind::WheatSeeds, 2),
        ]);

        assert_eq!(inventory.count(ItemKind::WheatSeeds), 5);
        assert!(inventory.contains(ItemKind::Carrot, 1));
        assert!(!inventory.contains(ItemKind::Potato, 1));
    }

    #[test]
    fn empty_held_stack_is_no_item() {
        let actor = ActorState::new(ActorId(1), 0).with_held(ItemStack::new(ItemKind::IronHoe, 0));
        assert_eq!(actor.held_item(), None);
        assert!(!actor.holds_hoe());
    }

    #[test]
    fn sword_is_not_a_hoe() {
        let actor =
            ActorState::new(ActorId(1), 0).with_held(ItemStack::single(ItemKind::IronSword));
        assert!(actor.holds_sword());
        assert!(!actor.holds_hoe());
    }
}
