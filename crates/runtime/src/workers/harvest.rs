//! Harvest worker that owns the authoritative world and player state.
//!
//! Receives commands from [`crate::RuntimeHandle`], resolves them through
//! [`HerbalismManager`], applies the resulting effects and publishes events
//! to the [`EventBus`]. Commands are processed strictly in arrival order.

use std::time::{SystemTime, UNIX_EPOCH};

use herbalism_core::{
    ActorFlags, ActorId, ActorState, BlockKind, BlockState, ConversionOutcome, ConversionResult,
    EffectBatch, HerbalismConfig, HerbalismManager, Location, OracleError, compute_seed,
};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::api::{ConversionReport, HarvestReport, Result, RuntimeError, TreasureReport};
use crate::applier::{AppliedEffects, EffectApplier};
use crate::events::{Event, EventBus, GrowthEvent, HarvestEvent};
use crate::oracle::OracleManager;
use crate::players::{PlayerProfile, PlayerStore};
use crate::scheduler::{ReplantResult, TickScheduler};
use crate::world::WorldStore;

/// Commands that can be sent to the harvest worker
pub enum Command {
    /// Break a plant. With a sword in hand Hylian Luck is tried first; if it
    /// fires the harvest is cancelled.
    Harvest {
        actor: ActorId,
        location: Location,
        reply: oneshot::Sender<Result<HarvestReport>>,
    },
    /// Right-click a block: Green Thumb with held seeds, else Shroom Thumb.
    Interact {
        actor: ActorId,
        location: Location,
        reply: oneshot::Sender<Result<ConversionReport>>,
    },
    /// Hit a block while Green Terra is active.
    Strike {
        actor: ActorId,
        location: Location,
        reply: oneshot::Sender<Result<ConversionReport>>,
    },
    /// Try Hylian Luck on a block without breaking it otherwise.
    HylianLuck {
        actor: ActorId,
        location: Location,
        reply: oneshot::Sender<Result<TreasureReport>>,
    },
    /// Activate Green Terra when the hoe is readied.
    ActivateGreenTerra {
        actor: ActorId,
        reply: oneshot::Sender<Result<bool>>,
    },
    FarmersDiet {
        actor: ActorId,
        rank_change: u32,
        event_food_level: i32,
        current_food_level: i32,
        reply: oneshot::Sender<Result<i32>>,
    },
    /// Advance the clock, applying replants that came due.
    Tick {
        ticks: u64,
        reply: oneshot::Sender<Vec<ReplantResult>>,
    },
    AddPlayer {
        profile: PlayerProfile,
        reply: oneshot::Sender<()>,
    },
    SetFlags {
        actor: ActorId,
        flags: ActorFlags,
        reply: oneshot::Sender<Result<()>>,
    },
    /// Write a block; `placed` marks it as player-placed.
    SetBlock {
        block: BlockState,
        placed: bool,
        reply: oneshot::Sender<()>,
    },
    Protect {
        location: Location,
        reply: oneshot::Sender<()>,
    },
    QueryBlock {
        location: Location,
        reply: oneshot::Sender<BlockState>,
    },
    QueryPlayer {
        actor: ActorId,
        reply: oneshot::Sender<Option<PlayerProfile>>,
    },
    QueryWorld {
        reply: oneshot::Sender<WorldStore>,
    },
}

/// Background task that processes herbalism commands.
pub struct HarvestWorker {
    config: HerbalismConfig,
    oracles: OracleManager,
    world: WorldStore,
    players: PlayerStore,
    scheduler: TickScheduler,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    base_seed: u64,
    interactions: u64,
}

impl HarvestWorker {
    /// Creates a new harvest worker.
    pub fn new(
        config: HerbalismConfig,
        oracles: OracleManager,
        world: WorldStore,
        players: PlayerStore,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        base_seed: u64,
    ) -> Self {
        info!(
            players = players.len(),
            custom_blocks = oracles.custom_blocks().len(),
            "HarvestWorker initialized"
        );

        Self {
            config,
            oracles,
            world,
            players,
            scheduler: TickScheduler::new(),
            command_rx,
            event_bus,
            base_seed,
            interactions: 0,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }
        info!(interactions = self.interactions, "HarvestWorker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Harvest {
                actor,
                location,
                reply,
            } => {
                let result = self.handle_harvest(actor, location);
                if reply.send(result).is_err() {
                    debug!("Harvest reply channel closed (caller dropped)");
                }
            }
            Command::Interact {
                actor,
                location,
                reply,
            } => {
                let result = self.handle_interact(actor, location);
                if reply.send(result).is_err() {
                    debug!("Interact reply channel closed (caller dropped)");
                }
            }
            Command::Strike {
                actor,
                location,
                reply,
            } => {
                let result = self.handle_strike(actor, location);
                if reply.send(result).is_err() {
                    debug!("Strike reply channel closed (caller dropped)");
                }
            }
            Command::HylianLuck {
                actor,
                location,
                reply,
            } => {
                let result = self.handle_hylian_luck(actor, location);
                if reply.send(result).is_err() {
                    debug!("HylianLuck reply channel closed (caller dropped)");
                }
            }
            Command::ActivateGreenTerra { actor, reply } => {
                let result = self.handle_activate_green_terra(actor);
                if reply.send(result).is_err() {
                    debug!("ActivateGreenTerra reply channel closed (caller dropped)");
                }
            }
            Command::FarmersDiet {
                actor,
                rank_change,
                event_food_level,
                current_food_level,
                reply,
            } => {
                let result = self.handle_farmers_diet(
                    actor,
                    rank_change,
                    event_food_level,
                    current_food_level,
                );
                if reply.send(result).is_err() {
                    debug!("FarmersDiet reply channel closed (caller dropped)");
                }
            }
            Command::Tick { ticks, reply } => {
                let results = self.handle_tick(ticks);
                if reply.send(results).is_err() {
                    debug!("Tick reply channel closed (caller dropped)");
                }
            }
            Command::AddPlayer { profile, reply } => {
                debug!(actor = %profile.id, level = profile.level, "player added");
                self.players.insert(profile);
                let _ = reply.send(());
            }
            Command::SetFlags {
                actor,
                flags,
                reply,
            } => {
                let result = self.player_mut(actor).map(|player| player.flags = flags);
                let _ = reply.send(result);
            }
            Command::SetBlock {
                block,
                placed,
                reply,
            } => {
                if placed {
                    self.world.place_block(block);
                } else {
                    self.world.set_block(block);
                }
                let _ = reply.send(());
            }
            Command::Protect { location, reply } => {
                self.world.protect(location);
                let _ = reply.send(());
            }
            Command::QueryBlock { location, reply } => {
                let _ = reply.send(self.world.block(location));
            }
            Command::QueryPlayer { actor, reply } => {
                let _ = reply.send(self.players.get(actor).cloned());
            }
            Command::QueryWorld { reply } => {
                if reply.send(self.world.clone()).is_err() {
                    debug!("QueryWorld reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn player_mut(&mut self, actor: ActorId) -> Result<&mut PlayerProfile> {
        self.players
            .get_mut(actor)
            .ok_or(RuntimeError::UnknownActor(actor))
    }

    fn snapshot(&self, actor: ActorId) -> Result<ActorState> {
        self.players
            .get(actor)
            .map(PlayerProfile::snapshot)
            .ok_or(RuntimeError::UnknownActor(actor))
    }

    fn next_seed(&mut self, actor: ActorId) -> u64 {
        let seed = compute_seed(self.base_seed, self.interactions, actor.0, 0);
        self.interactions += 1;
        seed
    }

    /// Runs `resolve` against a manager built over the current world.
    fn resolve<T>(
        &self,
        actor: &ActorState,
        seed: u64,
        resolve: impl FnOnce(&HerbalismManager<'_>) -> std::result::Result<T, OracleError>,
    ) -> Result<T> {
        let env = self.oracles.as_herbalism_env(&self.world);
        let manager = HerbalismManager::new(env, &self.config, actor, seed, now_secs());
        Ok(resolve(&manager)?)
    }

    fn apply(&mut self, actor: ActorId, effects: EffectBatch) -> Result<AppliedEffects> {
        let player = self
            .players
            .get_mut(actor)
            .ok_or(RuntimeError::UnknownActor(actor))?;
        Ok(EffectApplier::new(&mut self.world, player, &mut self.scheduler, &self.event_bus)
            .apply(effects))
    }

    fn handle_harvest(&mut self, actor: ActorId, location: Location) -> Result<HarvestReport> {
        let snapshot = self.snapshot(actor)?;
        let block = self.world.block(location);
        if block.kind == BlockKind::Air {
            return Err(RuntimeError::EmptyCell(location));
        }
        let seed = self.next_seed(actor);

        let treasure = if snapshot.holds_sword() {
            Some(self.resolve(&snapshot, seed, |manager| {
                manager.process_hylian_luck(&block)
            })?)
        } else {
            None
        };
        if let Some(found) = treasure.as_ref().filter(|treasure| treasure.succeeded()) {
            debug!(%actor, %location, "hylian luck cancelled the harvest");
            let applied = self.apply(actor, found.effects.clone())?;
            return Ok(HarvestReport {
                block,
                treasure: Some(found.clone()),
                outcome: Default::default(),
                broken: Default::default(),
                applied,
            });
        }

        let mut outcome = self.resolve(&snapshot, seed, |manager| {
            manager.herbalism_block_check(&block)
        })?;
        let effects = std::mem::take(&mut outcome.effects);
        let applied = self.apply(actor, effects.clone())?;
        outcome.effects = effects;
        let broken = self.world.break_plant(location);

        if outcome.processed {
            debug!(
                %actor,
                key = %block.canonical_key(),
                reward = outcome.reward,
                bonus = outcome.bonus_units,
                cells = outcome.cells,
                "harvest resolved"
            );
            self.event_bus.publish(Event::Harvest(HarvestEvent::Harvested {
                actor,
                block,
                reward: outcome.reward,
                bonus_units: outcome.bonus_units,
                cells: outcome.cells,
            }));
        } else {
            debug!(%actor, key = %block.canonical_key(), "harvest ignored");
            self.event_bus
                .publish(Event::Harvest(HarvestEvent::Ignored { actor, block }));
        }

        Ok(HarvestReport {
            block,
            treasure,
            outcome,
            broken,
            applied,
        })
    }

    fn handle_interact(&mut self, actor: ActorId, location: Location) -> Result<ConversionReport> {
        let snapshot = self.snapshot(actor)?;
        let block = self.world.block(location);
        let seed = self.next_seed(actor);

        let outcome = self.resolve(&snapshot, seed, |manager| {
            if manager.can_green_thumb_block(&block)? {
                manager.process_green_thumb_block(&block)
            } else if manager.can_use_shroom_thumb(&block)? {
                manager.process_shroom_thumb(&block)
            } else {
                Ok(not_applicable())
            }
        })?;
        self.finish_conversion(actor, block, outcome)
    }

    fn handle_strike(&mut self, actor: ActorId, location: Location) -> Result<ConversionReport> {
        let snapshot = self.snapshot(actor)?;
        let block = self.world.block(location);
        let seed = self.next_seed(actor);

        let outcome = self.resolve(&snapshot, seed, |manager| {
            if manager.can_green_terra_block(&block) {
                manager.process_green_terra(&block)
            } else {
                Ok(not_applicable())
            }
        })?;
        self.finish_conversion(actor, block, outcome)
    }

    fn finish_conversion(
        &mut self,
        actor: ActorId,
        block: BlockState,
        outcome: ConversionOutcome,
    ) -> Result<ConversionReport> {
        debug!(%actor, location = %block.location, result = ?outcome.result, "conversion resolved");
        let applied = self.apply(actor, outcome.effects.clone())?;
        Ok(ConversionReport {
            block,
            outcome,
            applied,
        })
    }

    fn handle_hylian_luck(&mut self, actor: ActorId, location: Location) -> Result<TreasureReport> {
        let snapshot = self.snapshot(actor)?;
        let block = self.world.block(location);
        let seed = self.next_seed(actor);

        let outcome = self.resolve(&snapshot, seed, |manager| manager.process_hylian_luck(&block))?;
        debug!(%actor, %location, result = ?outcome.result, "hylian luck resolved");
        let applied = self.apply(actor, outcome.effects.clone())?;
        Ok(TreasureReport {
            block,
            outcome,
            applied,
        })
    }

    fn handle_activate_green_terra(&mut self, actor: ActorId) -> Result<bool> {
        let snapshot = self.snapshot(actor)?;
        let seed = self.next_seed(actor);
        let ready = self.resolve(&snapshot, seed, |manager| manager.can_activate_green_terra())?;
        if ready {
            let player = self.player_mut(actor)?;
            player.flags.remove(ActorFlags::HOE_PREPARED);
            player.flags.insert(ActorFlags::GREEN_TERRA_ACTIVE);
            info!(%actor, "green terra activated");
        }
        Ok(ready)
    }

    fn handle_farmers_diet(
        &mut self,
        actor: ActorId,
        rank_change: u32,
        event_food_level: i32,
        current_food_level: i32,
    ) -> Result<i32> {
        let snapshot = self.snapshot(actor)?;
        let seed = self.next_seed(actor);
        self.resolve(&snapshot, seed, |manager| {
            if manager.can_use_farmers_diet()? {
                Ok(manager.farmers_diet(rank_change, event_food_level, current_food_level))
            } else {
                Ok(event_food_level)
            }
        })
    }

    fn handle_tick(&mut self, ticks: u64) -> Vec<ReplantResult> {
        let results = self.scheduler.advance(ticks, &mut self.world);
        for result in &results {
            let event = match *result {
                ReplantResult::Applied(replant) => GrowthEvent::Replanted { replant },
                ReplantResult::Dropped(replant) => GrowthEvent::ReplantDropped { replant },
            };
            self.event_bus.publish(Event::Growth(event));
        }
        results
    }
}

fn not_applicable() -> ConversionOutcome {
    ConversionOutcome {
        result: ConversionResult::NotApplicable,
        effects: EffectBatch::new(),
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
