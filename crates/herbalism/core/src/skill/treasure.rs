//! Hylian Luck: rare item drops from harvested plants.

use crate::effect::{Effect, EffectBatch, Message};
use crate::env::{Capability, HylianTreasure, OracleError, RollContext};
use crate::skill::HerbalismManager;
use crate::skill::activation::roll_treasure_drop;
use crate::state::BlockState;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TreasureResult {
    /// The treasure dropped and the block was destroyed.
    Dropped(HylianTreasure),
    /// A treasure committed but the break was vetoed.
    Vetoed,
    /// No candidate qualified or won its roll.
    Missed,
    /// The actor lacks the entitlement or the activation roll failed.
    NotActivated,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TreasureOutcome {
    pub result: TreasureResult,
    pub effects: EffectBatch,
}

impl TreasureOutcome {
    fn quiet(result: TreasureResult) -> Self {
        Self {
            result,
            effects: EffectBatch::new(),
        }
    }

    pub fn succeeded(&self) -> bool {
        matches!(self.result, TreasureResult::Dropped(_))
    }
}

impl HerbalismManager<'_> {
    pub fn can_use_hylian_luck(&self) -> Result<bool, OracleError> {
        self.allows(Capability::HylianLuck, None)
    }

    /// Hylian Luck with its entitlement and activation roll.
    pub fn process_hylian_luck(&self, block: &BlockState) -> Result<TreasureOutcome, OracleError> {
        if !self.can_use_hylian_luck()? {
            return Ok(TreasureOutcome::quiet(TreasureResult::NotActivated));
        }
        let roll = self.roll(&self.config.hylian_luck, RollContext::HylianLuck)?;
        if !roll.succeeded() {
            return Ok(TreasureOutcome::quiet(TreasureResult::NotActivated));
        }
        self.roll_treasure(block)
    }

    /// Tries the treasure list for `block` in order; the first qualifying
    /// entry that wins its own roll commits.
    pub fn roll_treasure(&self, block: &BlockState) -> Result<TreasureOutcome, OracleError> {
        let key = block.canonical_key();
        let treasures = self.env.tables()?.hylian_treasures(&key);
        let rng = self.env.rng()?;

        let winner = treasures
            .iter()
            .enumerate()
            .filter(|(_, treasure)| self.actor.level >= treasure.drop_level)
            .find(|(index, treasure)| {
                let seed = self.seed.for_roll(RollContext::HylianTreasure {
                    index: *index as u32,
                });
                roll_treasure_drop(treasure.drop_chance, self.activation_chance(), rng, seed)
                    .succeeded()
            })
            .map(|(_, treasure)| *treasure);

        let Some(treasure) = winner else {
            return Ok(TreasureOutcome::quiet(TreasureResult::Missed));
        };

        if !self.env.break_policy()?.can_break(self.actor.id, block.location) {
            return Ok(TreasureOutcome::quiet(TreasureResult::Vetoed));
        }

        let mut effects = EffectBatch::new();
        effects.push(Effect::SetEmpty {
            location: block.location,
        });
        effects.push(Effect::DropItem {
            at: block.location.center(),
            item: treasure.drop,
        });
        effects.push(Effect::Notify(Message::HylianLuck));

        Ok(TreasureOutcome {
            result: TreasureResult::Dropped(treasure),
            effects,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::fixtures::{Fixture, TestRng, actor_with};
    use crate::state::{ActorFlags, BlockKind, ItemKind, ItemStack, Location};

    fn poppy() -> BlockState {
        BlockState::new(Location::new(2, 70, -4), BlockKind::Poppy)
    }

    #[test]
    fn empty_list_fails_without_effects() {
        let fixture = Fixture::new().with_rng(TestRng::ALWAYS);
        let actor = actor_with(1000, ActorFlags::empty(), &[]);

        let outcome = fixture.manager(&actor).roll_treasure(&poppy()).unwrap();
        assert_eq!(outcome.result, TreasureResult::Missed);
        assert!(outcome.effects.is_empty());
    }

    #[test]
    fn certain_entry_drops_at_block_center() {
        let mut fixture = Fixture::new().with_rng(TestRng::NEVER);
        let payload = ItemStack::new(ItemKind::Emerald, 1);
        fixture
            .tables
            .add_treasure("Poppy", HylianTreasure::new(0, 1.0, payload));
        let actor = actor_with(0, ActorFlags::empty(), &[]);
        let block = poppy();

        let outcome = fixture.manager(&actor).roll_treasure(&block).unwrap();
        assert!(outcome.succeeded());
        let effects = outcome.effects.into_vec();
        assert_eq!(
            effects,
            vec![
                Effect::SetEmpty {
                    location: block.location
                },
                Effect::DropItem {
                    at: block.location.center(),
                    item: payload
                },
                Effect::Notify(Message::HylianLuck),
            ]
        );
        let drops = effects
            .iter()
            .filter(|effect| matches!(effect, Effect::DropItem { .. }))
            .count();
        assert_eq!(drops, 1);
    }

    #[test]
    fn level_gate_skips_to_next_entry() {
        let mut fixture = Fixture::new().with_rng(TestRng::NEVER);
        let rare = ItemStack::new(ItemKind::Diamond, 1);
        let common = ItemStack::new(ItemKind::GoldNugget, 3);
        fixture
            .tables
            .add_treasure("Poppy", HylianTreasure::new(500, 1.0, rare));
        fixture
            .tables
            .add_treasure("Poppy", HylianTreasure::new(0, 1.0, common));
        let actor = actor_with(100, ActorFlags::empty(), &[]);

        let outcome = fixture.manager(&actor).roll_treasure(&poppy()).unwrap();
        assert_eq!(
            outcome.result,
            TreasureResult::Dropped(HylianTreasure::new(0, 1.0, common))
        );
    }

    #[test]
    fn unqualified_list_misses() {
        let mut fixture = Fixture::new().with_rng(TestRng::ALWAYS);
        fixture.tables.add_treasure(
            "Poppy",
            HylianTreasure::new(900, 1.0, ItemStack::single(ItemKind::Apple)),
        );
        let actor = actor_with(10, ActorFlags::empty(), &[]);

        let outcome = fixture.manager(&actor).roll_treasure(&poppy()).unwrap();
        assert_eq!(outcome.result, TreasureResult::Missed);
        assert!(outcome.effects.is_empty());
    }

    #[test]
    fn vetoed_break_has_no_effects() {
        let mut fixture = Fixture::new();
        let block = poppy();
        fixture.tables.add_treasure(
            "Poppy",
            HylianTreasure::new(0, 1.0, ItemStack::single(ItemKind::Apple)),
        );
        fixture.world.protect(block.location);
        let actor = actor_with(0, ActorFlags::empty(), &[]);

        let outcome = fixture.manager(&actor).roll_treasure(&block).unwrap();
        assert_eq!(outcome.result, TreasureResult::Vetoed);
        assert!(outcome.effects.is_empty());
    }

    #[test]
    fn hylian_luck_requires_entitlement_and_activation() {
        let mut fixture = Fixture::new().with_rng(TestRng::ALWAYS);
        fixture.tables.add_treasure(
            "Poppy",
            HylianTreasure::new(0, 1.0, ItemStack::single(ItemKind::Apple)),
        );
        let actor = actor_with(1000, ActorFlags::empty(), &[]);
        assert!(
            fixture
                .manager(&actor)
                .process_hylian_luck(&poppy())
                .unwrap()
                .succeeded()
        );

        let low = actor_with(0, ActorFlags::empty(), &[]);
        assert_eq!(
            fixture.manager(&low).process_hylian_luck(&poppy()).unwrap().result,
            TreasureResult::NotActivated
        );

        let denied = fixture.deny(Capability::HylianLuck);
        assert_eq!(
            denied.manager(&actor).process_hylian_luck(&poppy()).unwrap().result,
            TreasureResult::NotActivated
        );
    }
}
