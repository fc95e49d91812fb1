//! Applies resolver effects to the world and the acting player.
//!
//! Effects are applied in order. Staged replants go to the tick scheduler;
//! everything else takes effect immediately.
use herbalism_core::{Effect, EffectBatch, ItemKind, ItemStack, Message, StagedReplant};
use tracing::debug;

use crate::events::{AbilityEvent, Event, EventBus, GrowthEvent};
use crate::players::PlayerProfile;
use crate::scheduler::TickScheduler;
use crate::world::WorldStore;

/// Summary of what an effect batch changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppliedEffects {
    pub removed: Vec<(ItemKind, u16)>,
    pub experience: u32,
    pub bonus_units: u32,
    pub dropped: Vec<ItemStack>,
    pub staged: Vec<StagedReplant>,
    pub messages: Vec<Message>,
}

pub struct EffectApplier<'a> {
    world: &'a mut WorldStore,
    player: &'a mut PlayerProfile,
    scheduler: &'a mut TickScheduler,
    events: &'a EventBus,
}

impl<'a> EffectApplier<'a> {
    pub fn new(
        world: &'a mut WorldStore,
        player: &'a mut PlayerProfile,
        scheduler: &'a mut TickScheduler,
        events: &'a EventBus,
    ) -> Self {
        Self {
            world,
            player,
            scheduler,
            events,
        }
    }

    pub fn apply(self, batch: EffectBatch) -> AppliedEffects {
        let actor = self.player.id;
        let mut applied = AppliedEffects::default();

        for effect in batch {
            match effect {
                Effect::RemoveItem { item, amount } => {
                    let removed = self.player.remove_item(item, amount);
                    if removed < amount {
                        debug!(%actor, %item, wanted = amount, removed, "inventory short on removal");
                    }
                    applied.removed.push((item, removed));
                }
                Effect::MarkBonusDrops { location, units } => {
                    self.world.mark_bonus_drops(location, units);
                    applied.bonus_units += units;
                }
                Effect::SetEmpty { location } => {
                    self.world.set_empty(location);
                }
                Effect::SetKind { location, kind } => {
                    let from = self.world.block(location).kind;
                    self.world.set_kind(location, kind);
                    self.events.publish(Event::Ability(AbilityEvent::BlockConverted {
                        actor,
                        location,
                        from,
                        to: kind,
                    }));
                }
                Effect::DropItem { at, item } => {
                    self.world.drop_item(at, item);
                    applied.dropped.push(item);
                    self.events.publish(Event::Ability(AbilityEvent::TreasureDropped {
                        actor,
                        location: at.block(),
                        item,
                    }));
                }
                Effect::Notify(message) => {
                    self.player.messages.push(message);
                    applied.messages.push(message);
                    self.events
                        .publish(Event::Ability(AbilityEvent::Notified { actor, message }));
                }
                Effect::AwardExperience { amount, .. } => {
                    self.player.award_experience(amount);
                    applied.experience += amount;
                }
                Effect::StageReplant(replant) => {
                    self.scheduler.schedule(replant);
                    applied.staged.push(replant);
                    self.events
                        .publish(Event::Growth(GrowthEvent::ReplantStaged { actor, replant }));
                }
            }
        }

        applied
    }
}
