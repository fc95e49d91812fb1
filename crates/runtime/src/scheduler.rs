//! Tick scheduler for deferred Green Thumb replants.
//!
//! Replants are one-shot: when due they are applied if the cell is still
//! empty and dropped otherwise. Nothing is retried. An applied replant
//! leaves its Green Thumb stamp on the cell.
use herbalism_core::{BlockState, StagedReplant};

use crate::world::WorldStore;

/// What happened to a due replant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplantResult {
    Applied(StagedReplant),
    /// The cell was occupied when the replant came due.
    Dropped(StagedReplant),
}

#[derive(Debug, Clone, Default)]
pub struct TickScheduler {
    now: u64,
    pending: Vec<(u64, StagedReplant)>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current tick.
    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn schedule(&mut self, replant: StagedReplant) {
        let due = self.now + replant.delay_ticks.max(1);
        self.pending.push((due, replant));
    }

    /// Advances the clock and runs every replant that came due, in scheduling order.
    pub fn advance(&mut self, ticks: u64, world: &mut WorldStore) -> Vec<ReplantResult> {
        self.now += ticks;
        let now = self.now;

        let (due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|(at, _)| *at <= now);
        self.pending = waiting;

        due.into_iter()
            .map(|(_, replant)| {
                if world.is_empty(replant.location) {
                    world.set_block(
                        BlockState::new(replant.location, replant.kind).with_age(replant.age),
                    );
                    world.mark_replanted(replant.location, replant.marked_at);
                    ReplantResult::Applied(replant)
                } else {
                    tracing::trace!(location = %replant.location, "cell occupied, replant dropped");
                    ReplantResult::Dropped(replant)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use herbalism_core::{BlockKind, Location};

    use super::*;

    fn replant(location: Location) -> StagedReplant {
        StagedReplant {
            location,
            kind: BlockKind::Wheat,
            age: 2,
            marked_at: 1_700_000_000,
            delay_ticks: 1,
        }
    }

    #[test]
    fn replant_lands_after_delay() {
        let mut world = WorldStore::new();
        let mut scheduler = TickScheduler::new();
        let location = Location::new(0, 64, 0);
        scheduler.schedule(replant(location));

        assert!(scheduler.advance(0, &mut world).is_empty());
        let results = scheduler.advance(1, &mut world);
        assert_eq!(results, vec![ReplantResult::Applied(replant(location))]);
        assert_eq!(world.block(location), BlockState::new(location, BlockKind::Wheat).with_age(2));
        assert_eq!(world.replanted_at(location), Some(1_700_000_000));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn occupied_cell_drops_replant() {
        let mut world = WorldStore::new();
        let mut scheduler = TickScheduler::new();
        let location = Location::new(0, 64, 0);
        scheduler.schedule(replant(location));
        world.set_block(BlockState::new(location, BlockKind::Poppy));

        let results = scheduler.advance(5, &mut world);
        assert_eq!(results, vec![ReplantResult::Dropped(replant(location))]);
        assert_eq!(world.block(location).kind, BlockKind::Poppy);
        assert_eq!(world.replanted_at(location), None);
        assert!(scheduler.advance(5, &mut world).is_empty());
    }
}
