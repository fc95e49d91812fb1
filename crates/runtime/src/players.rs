//! Player progression state owned by the harvest worker.
use std::collections::HashMap;

use herbalism_core::{
    ActorFlags, ActorId, ActorState, HerbalismConfig, InventoryState, ItemKind, ItemStack, Message,
};
use serde::{Deserialize, Serialize};

/// Mutable record of one player.
///
/// `held_slot` indexes into `inventory`, so the held stack is always one of
/// the inventory slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub id: ActorId,
    pub level: u32,
    pub experience: u64,
    pub flags: ActorFlags,
    pub inventory: Vec<ItemStack>,
    pub held_slot: Option<usize>,
    /// Messages delivered to the player, oldest first.
    pub messages: Vec<Message>,
}

impl PlayerProfile {
    pub fn new(id: ActorId, level: u32) -> Self {
        Self {
            id,
            level,
            experience: 0,
            flags: ActorFlags::empty(),
            inventory: Vec::new(),
            held_slot: None,
            messages: Vec::new(),
        }
    }

    pub fn with_flags(mut self, flags: ActorFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Adds a stack in a new slot.
    pub fn with_item(mut self, item: ItemKind, amount: u16) -> Self {
        self.give(ItemStack::new(item, amount));
        self
    }

    /// Adds a stack in a new slot and selects it.
    pub fn holding(mut self, item: ItemKind, amount: u16) -> Self {
        self.give(ItemStack::new(item, amount));
        self.held_slot = Some(self.inventory.len() - 1);
        self
    }

    pub fn give(&mut self, stack: ItemStack) {
        if self.inventory.len() < HerbalismConfig::MAX_INVENTORY_SLOTS {
            self.inventory.push(stack);
        }
    }

    pub fn held(&self) -> Option<ItemStack> {
        self.held_slot
            .and_then(|slot| self.inventory.get(slot))
            .copied()
    }

    pub fn count(&self, item: ItemKind) -> u32 {
        self.inventory
            .iter()
            .filter(|stack| stack.item == item)
            .map(|stack| u32::from(stack.amount))
            .sum()
    }

    /// Removes up to `amount` of `item`, held slot first. Returns the amount removed.
    pub fn remove_item(&mut self, item: ItemKind, amount: u16) -> u16 {
        let mut order: Vec<usize> = (0..self.inventory.len()).collect();
        if let Some(held) = self.held_slot.filter(|slot| *slot < self.inventory.len()) {
            order.retain(|slot| *slot != held);
            order.insert(0, held);
        }

        let mut remaining = amount;
        for slot in order {
            if remaining == 0 {
                break;
            }
            let stack = &mut self.inventory[slot];
            if stack.item != item {
                continue;
            }
            let taken = stack.amount.min(remaining);
            stack.amount -= taken;
            remaining -= taken;
        }
        amount - remaining
    }

    pub fn award_experience(&mut self, amount: u32) {
        self.experience += u64::from(amount);
    }

    /// Read-only view handed to the resolver.
    pub fn snapshot(&self) -> ActorState {
        let inventory = InventoryState::from_stacks(
            self.inventory
                .iter()
                .copied()
                .filter(|stack| !stack.is_empty()),
        );
        let state = ActorState::new(self.id, self.level)
            .with_flags(self.flags)
            .with_inventory(inventory);
        match self.held() {
            Some(stack) => state.with_held(stack),
            None => state,
        }
    }
}

/// All known players keyed by id.
#[derive(Debug, Clone, Default)]
pub struct PlayerStore {
    players: HashMap<ActorId, PlayerProfile>,
}

impl PlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, profile: PlayerProfile) {
        self.players.insert(profile.id, profile);
    }

    pub fn get(&self, id: ActorId) -> Option<&PlayerProfile> {
        self.players.get(&id)
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut PlayerProfile> {
        self.players.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removal_prefers_held_slot() {
        let mut player = PlayerProfile::new(ActorId(1), 0)
            .with_item(ItemKind::WheatSeeds, 5)
            .holding(ItemKind::WheatSeeds, 2);

        assert_eq!(player.remove_item(ItemKind::WheatSeeds, 3), 3);
        assert_eq!(player.inventory[1].amount, 0);
        assert_eq!(player.inventory[0].amount, 4);
        assert_eq!(player.count(ItemKind::WheatSeeds), 4);
    }

    #[test]
    fn removal_stops_at_available_amount() {
        let mut player = PlayerProfile::new(ActorId(1), 0).with_item(ItemKind::RedMushroom, 1);
        assert_eq!(player.remove_item(ItemKind::RedMushroom, 4), 1);
        assert_eq!(player.remove_item(ItemKind::BrownMushroom, 1), 0);
    }

    #[test]
    fn snapshot_mirrors_held_stack() {
        let player = PlayerProfile::new(ActorId(7), 300)
            .with_flags(ActorFlags::LUCKY)
            .holding(ItemKind::IronHoe, 1);

        let actor = player.snapshot();
        assert_eq!(actor.level, 300);
        assert!(actor.is_lucky());
        assert!(actor.holds_hoe());
        assert_eq!(actor.inventory.count(ItemKind::IronHoe), 1);
    }
}
