use crate::config::{HerbalismConfig, SkillChance};
use crate::env::{Capability, HerbalismEnv, OracleError, RollContext, RollSeed};
use crate::skill::activation::{ActivationRoll, roll_activation};
use crate::state::{ActorState, BlockKind};

/// Resolves herbalism interactions for one player.
///
/// A manager is built per interaction event from the host's oracles, the
/// configuration, a snapshot of the player and the interaction seed. All of
/// its operations are read-only; they return outcomes carrying the effects
/// the host should apply.
pub struct HerbalismManager<'a> {
    pub(crate) env: HerbalismEnv<'a>,
    pub(crate) config: &'a HerbalismConfig,
    pub(crate) actor: &'a ActorState,
    pub(crate) seed: RollSeed,
    /// Wall clock in seconds, stamped on Green Thumb markers.
    pub(crate) now_secs: u64,
}

impl<'a> HerbalismManager<'a> {
    pub fn new(
        env: HerbalismEnv<'a>,
        config: &'a HerbalismConfig,
        actor: &'a ActorState,
        interaction_seed: u64,
        now_secs: u64,
    ) -> Self {
        Self {
            env,
            config,
            actor,
            seed: RollSeed::new(interaction_seed, actor.id),
            now_secs,
        }
    }

    pub fn actor(&self) -> &ActorState {
        self.actor
    }

    pub fn config(&self) -> &HerbalismConfig {
        self.config
    }

    pub fn skill_level(&self) -> u32 {
        self.actor.level
    }

    /// Roll ceiling for this actor.
    pub fn activation_chance(&self) -> u32 {
        self.config.activation_chance_for(self.actor.is_lucky())
    }

    pub(crate) fn allows(
        &self,
        capability: Capability,
        target: Option<BlockKind>,
    ) -> Result<bool, OracleError> {
        Ok(self
            .env
            .permissions()?
            .allows(self.actor.id, capability, target))
    }

    pub(crate) fn roll(
        &self,
        chance: &SkillChance,
        context: RollContext,
    ) -> Result<ActivationRoll, OracleError> {
        let rng = self.env.rng()?;
        Ok(roll_activation(
            chance,
            self.actor.level,
            self.activation_chance(),
            rng,
            self.seed.for_roll(context),
        ))
    }
}
