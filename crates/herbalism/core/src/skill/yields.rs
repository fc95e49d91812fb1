//! Experience and bonus-drop calculation for a harvested block.
//!
//! Stacked plants (cactus, sugar cane, kelp, ...) reward every cell of the
//! column that breaks with the harvested one, so the base experience is
//! multiplied by the column length. Each cell also gets its own double-drop
//! roll, but the multiplier does not depend on those rolls.

use crate::effect::{Effect, EffectBatch, XpGainReason};
use crate::env::{Capability, OracleError, RollContext};
use crate::skill::HerbalismManager;
use crate::skill::growth::GreenThumbOutcome;
use crate::state::{BlockKind, BlockState, HarvestableKind};

/// Experience and bonus drops computed for one harvest.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct YieldOutcome {
    /// Experience to award.
    pub reward: u32,
    /// Extra copies of the natural drops.
    pub bonus_units: u32,
    /// Cells counted toward the reward.
    pub cells: u32,
    /// Green Thumb result, when the player is entitled to it.
    pub green_thumb: Option<GreenThumbOutcome>,
    pub effects: EffectBatch,
}

/// Full result of a harvest interaction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HarvestOutcome {
    /// `false` when the eligibility gate rejected the interaction.
    pub processed: bool,
    pub reward: u32,
    pub bonus_units: u32,
    pub cells: u32,
    pub green_thumb: Option<GreenThumbOutcome>,
    pub effects: EffectBatch,
}

impl HerbalismManager<'_> {
    /// Extra drop units granted per successful double-drop roll.
    fn bonus_per_success(&self) -> u32 {
        if self.actor.green_terra_active() { 2 } else { 1 }
    }

    /// Double-drop roll for one cell, honoring the per-block switch and entitlement.
    pub fn check_double_drop(&self, block: &BlockState, cell: u32) -> Result<bool, OracleError> {
        let key = block.canonical_key();
        if !self.env.tables()?.double_drops_enabled(&key) {
            return Ok(false);
        }
        if !self.allows(Capability::DoubleDrops, Some(block.kind))? {
            return Ok(false);
        }
        let roll = self.roll(&self.config.double_drops, RollContext::DoubleDrop { cell })?;
        Ok(roll.succeeded())
    }

    /// Computes experience and bonus drops for harvesting `block`.
    ///
    /// Does not consult the eligibility gate; see
    /// [`herbalism_block_check`](Self::herbalism_block_check) for the full flow.
    pub fn compute_yield(&self, block: &BlockState) -> Result<YieldOutcome, OracleError> {
        let custom = self.env.custom_blocks()?.custom_block(block.kind);
        let Some(class) = HarvestableKind::classify(block.kind, custom) else {
            return Ok(YieldOutcome::default());
        };

        let mut outcome = YieldOutcome::default();

        if let HarvestableKind::CustomExtension(config) = class {
            outcome.reward = config.xp();
            outcome.cells = 1;
            if config.double_drop_enabled()
                && self.allows(Capability::DoubleDrops, Some(block.kind))?
                && self
                    .roll(&self.config.double_drops, RollContext::DoubleDrop { cell: 0 })?
                    .succeeded()
            {
                outcome.bonus_units = self.bonus_per_success();
            }
            self.mark_bonus(block, &mut outcome);
            return Ok(outcome);
        }

        let base = self.env.tables()?.experience(&block.canonical_key());

        let column = match class {
            HarvestableKind::MultiCellPlant(_) => self.stacked_column(block)?,
            HarvestableKind::KelpPair => self.kelp_column(block)?,
            _ => vec![*block],
        };

        for (index, cell) in column.iter().enumerate() {
            if self.check_double_drop(cell, index as u32)? {
                outcome.bonus_units += self.bonus_per_success();
            }
        }
        outcome.cells = column.len() as u32;
        outcome.reward = if class.is_multi_cell() {
            base.saturating_mul(outcome.cells)
        } else {
            base
        };
        self.mark_bonus(block, &mut outcome);

        if self.allows(Capability::GreenThumbPlant, Some(block.kind))? {
            let green_thumb = self.process_green_thumb_plants(block)?;
            outcome.effects.append(green_thumb.effects);
            outcome.green_thumb = Some(green_thumb.outcome);
        }

        Ok(outcome)
    }

    /// Gate, yield and experience award for one harvest.
    pub fn herbalism_block_check(&self, block: &BlockState) -> Result<HarvestOutcome, OracleError> {
        if !self.should_process(block)? {
            return Ok(HarvestOutcome::default());
        }

        let yields = self.compute_yield(block)?;
        let mut effects = yields.effects;
        if yields.reward > 0 {
            effects.push(Effect::AwardExperience {
                amount: yields.reward,
                reason: XpGainReason::Pve,
            });
        }

        Ok(HarvestOutcome {
            processed: true,
            reward: yields.reward,
            bonus_units: yields.bonus_units,
            cells: yields.cells,
            green_thumb: yields.green_thumb,
            effects,
        })
    }

    fn mark_bonus(&self, block: &BlockState, outcome: &mut YieldOutcome) {
        if outcome.bonus_units > 0 {
            outcome.effects.push(Effect::MarkBonusDrops {
                location: block.location,
                units: outcome.bonus_units,
            });
        }
    }

    /// Harvested cell plus the contiguous same-kind cells above it.
    fn stacked_column(&self, block: &BlockState) -> Result<Vec<BlockState>, OracleError> {
        let world = self.env.world()?;
        let mut column = vec![*block];
        for offset in 1..self.config.max_stack_height as i32 {
            match world.block_at(block.location.up(offset)) {
                Some(cell) if cell.kind == block.kind => column.push(cell),
                _ => break,
            }
        }
        Ok(column)
    }

    /// Kelp cells that break with the harvested one, bottom first.
    ///
    /// The walk goes up through contiguous kelp. A `Kelp` top also takes the
    /// `KelpPlant` directly under it, so either half of a pair counts two.
    fn kelp_column(&self, block: &BlockState) -> Result<Vec<BlockState>, OracleError> {
        let world = self.env.world()?;
        let limit = self.config.max_stack_height.max(1) as usize;

        let partner = (block.kind == BlockKind::Kelp)
            .then(|| world.block_at(block.location.down(1)))
            .flatten()
            .filter(|cell| cell.kind == BlockKind::KelpPlant);
        let mut column: Vec<BlockState> = partner.into_iter().collect();
        column.push(*block);

        let mut above = block.location.up(1);
        while column.len() < limit {
            match world.block_at(above) {
                Some(cell) if cell.kind.is_kelp() => column.push(cell),
                _ => break,
            }
            above = above.up(1);
        }
        Ok(column)
    }
}
