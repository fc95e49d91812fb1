//! Block conversions: Shroom Thumb, Green Thumb on blocks and Green Terra.
//!
//! Reagents are consumed before the activation roll, so a failed roll still
//! costs them. A missing reagent aborts with a message and nothing else.

use crate::effect::{Effect, EffectBatch, Message};
use crate::env::{Capability, OracleError, RollContext};
use crate::skill::HerbalismManager;
use crate::skill::activation::ActivationRoll;
use crate::state::{BlockKind, BlockState, ItemKind};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConversionResult {
    Converted { from: BlockKind, to: BlockKind },
    /// Reagents were spent but the activation roll failed.
    ActivationFailed(ActivationRoll),
    MissingReagent(ItemKind),
    /// The block has no conversion, or the actor lacks the entitlement.
    NotApplicable,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConversionOutcome {
    pub result: ConversionResult,
    pub effects: EffectBatch,
}

pub type ShroomThumbOutcome = ConversionOutcome;

impl ConversionOutcome {
    fn quiet(result: ConversionResult) -> Self {
        Self {
            result,
            effects: EffectBatch::new(),
        }
    }

    fn missing(item: ItemKind, message: Message) -> Self {
        Self {
            result: ConversionResult::MissingReagent(item),
            effects: EffectBatch::one(Effect::Notify(message)),
        }
    }

    pub fn converted(&self) -> bool {
        matches!(self.result, ConversionResult::Converted { .. })
    }
}

fn convert(
    mut effects: EffectBatch,
    block: &BlockState,
    to: Option<BlockKind>,
) -> ConversionOutcome {
    let Some(to) = to else {
        return ConversionOutcome {
            result: ConversionResult::NotApplicable,
            effects,
        };
    };
    effects.push(Effect::SetKind {
        location: block.location,
        kind: to,
    });
    ConversionOutcome {
        result: ConversionResult::Converted {
            from: block.kind,
            to,
        },
        effects,
    }
}

impl HerbalismManager<'_> {
    /// Hoe readied and Green Terra entitlement held.
    pub fn can_activate_green_terra(&self) -> Result<bool, OracleError> {
        Ok(self.actor.hoe_prepared() && self.allows(Capability::GreenTerra, None)?)
    }

    /// Green Terra is running, so harvested crops replant without a roll.
    pub fn can_green_terra_plant(&self) -> bool {
        self.actor.green_terra_active()
    }

    pub fn can_green_terra_block(&self, block: &BlockState) -> bool {
        self.actor.green_terra_active() && block.kind.is_mossable()
    }

    /// Held wheat seeds, a mossable block and the entitlement for it.
    pub fn can_green_thumb_block(&self, block: &BlockState) -> Result<bool, OracleError> {
        let holds_seeds = self.actor.held_item() == Some(ItemKind::WheatSeeds);
        if !holds_seeds || !block.kind.is_mossable() {
            return Ok(false);
        }
        self.allows(Capability::GreenThumbBlock, Some(block.kind))
    }

    /// Held mushroom, both mushrooms in the inventory, a shroomable block and the entitlement.
    pub fn can_use_shroom_thumb(&self, block: &BlockState) -> Result<bool, OracleError> {
        let holds_mushroom = self.actor.held_item().is_some_and(ItemKind::is_mushroom);
        let inventory = &self.actor.inventory;
        if !holds_mushroom
            || !inventory.contains(ItemKind::BrownMushroom, 1)
            || !inventory.contains(ItemKind::RedMushroom, 1)
            || !block.kind.is_shroomable()
        {
            return Ok(false);
        }
        self.allows(Capability::ShroomThumb, Some(block.kind))
    }

    /// Spends one brown and one red mushroom, then rolls to turn the block into mycelium.
    pub fn process_shroom_thumb(&self, block: &BlockState) -> Result<ShroomThumbOutcome, OracleError> {
        for reagent in [ItemKind::BrownMushroom, ItemKind::RedMushroom] {
            if !self.actor.inventory.contains(reagent, 1) {
                return Ok(ConversionOutcome::missing(reagent, Message::NeedMore(reagent)));
            }
        }

        let mut effects = EffectBatch::new();
        for reagent in [ItemKind::BrownMushroom, ItemKind::RedMushroom] {
            effects.push(Effect::RemoveItem {
                item: reagent,
                amount: 1,
            });
        }

        let roll = self.roll(&self.config.shroom_thumb, RollContext::ShroomThumb)?;
        if !roll.succeeded() {
            effects.push(Effect::Notify(Message::ShroomThumbFail));
            return Ok(ConversionOutcome {
                result: ConversionResult::ActivationFailed(roll),
                effects,
            });
        }

        Ok(convert(effects, block, block.kind.shroom_form()))
    }

    /// Spends one held wheat seed, then rolls to make the block mossy.
    ///
    /// Callers check [`can_green_thumb_block`](Self::can_green_thumb_block) first.
    pub fn process_green_thumb_block(&self, block: &BlockState) -> Result<ConversionOutcome, OracleError> {
        if self.actor.held_item() != Some(ItemKind::WheatSeeds) {
            return Ok(ConversionOutcome::missing(
                ItemKind::WheatSeeds,
                Message::NeedMore(ItemKind::WheatSeeds),
            ));
        }

        let mut effects = EffectBatch::one(Effect::RemoveItem {
            item: ItemKind::WheatSeeds,
            amount: 1,
        });

        let roll = self.roll(&self.config.green_thumb, RollContext::GreenThumbBlock)?;
        if !roll.succeeded() {
            effects.push(Effect::Notify(Message::GreenThumbFail));
            return Ok(ConversionOutcome {
                result: ConversionResult::ActivationFailed(roll),
                effects,
            });
        }

        Ok(convert(effects, block, block.kind.mossy_form()))
    }

    /// Green Terra block conversion: no roll, one wheat seed per block.
    pub fn process_green_terra(&self, block: &BlockState) -> Result<ConversionOutcome, OracleError> {
        if !self.allows(Capability::GreenThumbBlock, Some(block.kind))? {
            return Ok(ConversionOutcome::quiet(ConversionResult::NotApplicable));
        }

        if !self.actor.inventory.contains(ItemKind::WheatSeeds, 1) {
            return Ok(ConversionOutcome::missing(
                ItemKind::WheatSeeds,
                Message::GreenTerraNeedMore,
            ));
        }

        let effects = EffectBatch::one(Effect::RemoveItem {
            item: ItemKind::WheatSeeds,
            amount: 1,
        });
        Ok(convert(effects, block, block.kind.mossy_form()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::fixtures::{Fixture, TestRng, actor_with};
    use crate::state::{ActorFlags, ItemStack, Location};

    fn dirt() -> BlockState {
        BlockState::new(Location::new(1, 63, 1), BlockKind::Dirt)
    }

    fn removed(effects: &EffectBatch) -> Vec<ItemKind> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::RemoveItem { item, .. } => Some(*item),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn shroom_thumb_missing_red_consumes_nothing() {
        let fixture = Fixture::new().with_rng(TestRng::ALWAYS);
        let actor = actor_with(1500, ActorFlags::empty(), &[(ItemKind::BrownMushroom, 5)]);

        let outcome = fixture.manager(&actor).process_shroom_thumb(&dirt()).unwrap();
        assert_eq!(
            outcome.result,
            ConversionResult::MissingReagent(ItemKind::RedMushroom)
        );
        assert_eq!(
            outcome.effects.into_vec(),
            vec![Effect::Notify(Message::NeedMore(ItemKind::RedMushroom))]
        );
    }

    #[test]
    fn shroom_thumb_missing_brown_is_reported_first() {
        let fixture = Fixture::new();
        let actor = actor_with(1500, ActorFlags::empty(), &[]);

        let outcome = fixture.manager(&actor).process_shroom_thumb(&dirt()).unwrap();
        assert_eq!(
            outcome.result,
            ConversionResult::MissingReagent(ItemKind::BrownMushroom)
        );
    }

    #[test]
    fn shroom_thumb_failure_still_consumes_both() {
        let fixture = Fixture::new().with_rng(TestRng::NEVER);
        let actor = actor_with(
            0,
            ActorFlags::empty(),
            &[(ItemKind::BrownMushroom, 1), (ItemKind::RedMushroom, 1)],
        );

        let outcome = fixture.manager(&actor).process_shroom_thumb(&dirt()).unwrap();
        assert!(matches!(outcome.result, ConversionResult::ActivationFailed(_)));
        assert_eq!(
            removed(&outcome.effects),
            vec![ItemKind::BrownMushroom, ItemKind::RedMushroom]
        );
        assert_eq!(
            outcome.effects.iter().last(),
            Some(&Effect::Notify(Message::ShroomThumbFail))
        );
    }

    #[test]
    fn shroom_thumb_success_makes_mycelium() {
        let fixture = Fixture::new().with_rng(TestRng::ALWAYS);
        let actor = actor_with(
            1500,
            ActorFlags::empty(),
            &[(ItemKind::BrownMushroom, 1), (ItemKind::RedMushroom, 1)],
        );

        for kind in [BlockKind::Dirt, BlockKind::GrassBlock, BlockKind::GrassPath] {
            let block = BlockState::new(Location::ORIGIN, kind);
            let outcome = fixture.manager(&actor).process_shroom_thumb(&block).unwrap();
            assert_eq!(
                outcome.result,
                ConversionResult::Converted {
                    from: kind,
                    to: BlockKind::Mycelium
                }
            );
            assert_eq!(removed(&outcome.effects).len(), 2);
        }
    }

    #[test]
    fn shroom_thumb_readiness() {
        let fixture = Fixture::new();
        let ready = actor_with(
            0,
            ActorFlags::empty(),
            &[(ItemKind::BrownMushroom, 1), (ItemKind::RedMushroom, 1)],
        )
        .with_held(ItemStack::single(ItemKind::RedMushroom));
        let empty_handed = actor_with(
            0,
            ActorFlags::empty(),
            &[(ItemKind::BrownMushroom, 1), (ItemKind::RedMushroom, 1)],
        );

        assert!(fixture.manager(&ready).can_use_shroom_thumb(&dirt()).unwrap());
        assert!(!fixture.manager(&empty_handed).can_use_shroom_thumb(&dirt()).unwrap());
        let stone = BlockState::new(Location::ORIGIN, BlockKind::StoneBricks);
        assert!(!fixture.manager(&ready).can_use_shroom_thumb(&stone).unwrap());

        let denied = fixture.deny(Capability::ShroomThumb);
        assert!(!denied.manager(&ready).can_use_shroom_thumb(&dirt()).unwrap());
    }

    #[test]
    fn green_thumb_block_converts_table() {
        let fixture = Fixture::new().with_rng(TestRng::ALWAYS);
        let actor = actor_with(1500, ActorFlags::empty(), &[(ItemKind::WheatSeeds, 8)])
            .with_held(ItemStack::new(ItemKind::WheatSeeds, 8));
        let table = [
            (BlockKind::Cobblestone, BlockKind::MossyCobblestone),
            (BlockKind::CobblestoneWall, BlockKind::MossyCobblestoneWall),
            (BlockKind::StoneBricks, BlockKind::MossyStoneBricks),
            (BlockKind::Dirt, BlockKind::GrassBlock),
            (BlockKind::GrassPath, BlockKind::GrassBlock),
        ];
        let manager = fixture.manager(&actor);

        for (from, to) in table {
            let block = BlockState::new(Location::ORIGIN, from);
            assert!(manager.can_green_thumb_block(&block).unwrap());
            let outcome = manager.process_green_thumb_block(&block).unwrap();
            assert_eq!(outcome.result, ConversionResult::Converted { from, to });
            assert_eq!(removed(&outcome.effects), vec![ItemKind::WheatSeeds]);
        }
    }

    #[test]
    fn green_thumb_block_failure_notifies() {
        let fixture = Fixture::new().with_rng(TestRng::NEVER);
        let actor = actor_with(0, ActorFlags::empty(), &[(ItemKind::WheatSeeds, 1)])
            .with_held(ItemStack::single(ItemKind::WheatSeeds));
        let block = BlockState::new(Location::ORIGIN, BlockKind::Cobblestone);

        let outcome = fixture.manager(&actor).process_green_thumb_block(&block).unwrap();
        assert!(matches!(outcome.result, ConversionResult::ActivationFailed(_)));
        assert_eq!(
            outcome.effects.into_vec(),
            vec![
                Effect::RemoveItem {
                    item: ItemKind::WheatSeeds,
                    amount: 1
                },
                Effect::Notify(Message::GreenThumbFail),
            ]
        );
    }

    #[test]
    fn green_thumb_block_requires_held_seeds() {
        let fixture = Fixture::new().with_rng(TestRng::ALWAYS);
        let actor = actor_with(1500, ActorFlags::empty(), &[(ItemKind::WheatSeeds, 4)]);
        let block = BlockState::new(Location::ORIGIN, BlockKind::Cobblestone);

        assert!(!fixture.manager(&actor).can_green_thumb_block(&block).unwrap());
        let outcome = fixture.manager(&actor).process_green_thumb_block(&block).unwrap();
        assert_eq!(outcome.effects.mutations().count(), 0);
    }

    #[test]
    fn green_terra_needs_a_seed() {
        let fixture = Fixture::new();
        let actor = actor_with(0, ActorFlags::GREEN_TERRA_ACTIVE, &[]);
        let block = BlockState::new(Location::ORIGIN, BlockKind::StoneBricks);

        assert!(fixture.manager(&actor).can_green_terra_block(&block));
        let outcome = fixture.manager(&actor).process_green_terra(&block).unwrap();
        assert_eq!(
            outcome.effects.into_vec(),
            vec![Effect::Notify(Message::GreenTerraNeedMore)]
        );
    }

    #[test]
    fn green_terra_converts_without_roll() {
        let fixture = Fixture::new().with_rng(TestRng::NEVER);
        let actor = actor_with(0, ActorFlags::GREEN_TERRA_ACTIVE, &[(ItemKind::WheatSeeds, 1)]);
        let block = BlockState::new(Location::ORIGIN, BlockKind::Cobblestone);

        let outcome = fixture.manager(&actor).process_green_terra(&block).unwrap();
        assert!(outcome.converted());
        assert_eq!(
            outcome.effects.iter().last(),
            Some(&Effect::SetKind {
                location: Location::ORIGIN,
                kind: BlockKind::MossyCobblestone
            })
        );

        let denied = fixture.deny(Capability::GreenThumbBlock);
        let outcome = denied.manager(&actor).process_green_terra(&block).unwrap();
        assert_eq!(outcome.result, ConversionResult::NotApplicable);
        assert!(outcome.effects.is_empty());
    }

    #[test]
    fn ability_readiness() {
        let fixture = Fixture::new();
        let prepared = actor_with(0, ActorFlags::HOE_PREPARED, &[]);
        let idle = actor_with(0, ActorFlags::empty(), &[]);
        let active = actor_with(0, ActorFlags::GREEN_TERRA_ACTIVE, &[]);

        assert!(fixture.manager(&prepared).can_activate_green_terra().unwrap());
        assert!(!fixture.manager(&idle).can_activate_green_terra().unwrap());
        assert!(fixture.manager(&active).can_green_terra_plant());
        assert!(!fixture.manager(&idle).can_green_terra_plant());
        assert!(!fixture.manager(&idle).can_green_terra_block(&dirt()));

        let denied = fixture.deny(Capability::GreenTerra);
        assert!(!denied.manager(&prepared).can_activate_green_terra().unwrap());
    }
}
