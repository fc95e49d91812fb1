//! Green Thumb replanting.
//!
//! When a crop is harvested, Green Thumb replants it at an age chosen by the
//! player's Green Thumb stage. During Green Terra the replant always happens
//! (no roll) and lands on the highest age for the kind.
//!
//! | Kind                   | Green Terra      | Age                |
//! |------------------------|------------------|--------------------|
//! | potato, carrot, wheat  | active           | 3                  |
//! | potato, carrot, wheat  | inactive         | `min(stage, 3)`    |
//! | beetroot, nether wart  | active or stage>2| 2                  |
//! | beetroot, nether wart  | stage == 2       | 1                  |
//! | beetroot, nether wart  | otherwise        | 0                  |
//! | cocoa                  | active or stage>1| 1                  |
//! | cocoa                  | otherwise        | 0                  |

use crate::config::HerbalismConfig;
use crate::effect::{Effect, EffectBatch, Message, StagedReplant};
use crate::env::{OracleError, RollContext};
use crate::skill::HerbalismManager;
use crate::skill::activation::ActivationRoll;
use crate::state::{BlockKind, BlockState, ItemKind};

/// Green Thumb tier derived from the skill level, in `0..=4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GrowthStage(u8);

impl GrowthStage {
    pub const MAX: Self = Self(HerbalismConfig::MAX_GREEN_THUMB_STAGE);

    /// `min(min(level, stage_max_level) / stage_change_level, 4)`.
    pub fn from_level(level: u32, config: &HerbalismConfig) -> Self {
        let change = config.green_thumb_stage_change_level.max(1);
        let capped = level.min(config.green_thumb_stage_max_level);
        let stage = (capped / change).min(u32::from(HerbalismConfig::MAX_GREEN_THUMB_STAGE));
        Self(stage as u8)
    }

    pub const fn new(stage: u8) -> Self {
        if stage > HerbalismConfig::MAX_GREEN_THUMB_STAGE {
            Self::MAX
        } else {
            Self(stage)
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Age a replanted crop starts at, or `None` for kinds Green Thumb ignores.
pub fn target_age(kind: BlockKind, stage: GrowthStage, green_terra: bool) -> Option<u8> {
    let stage = stage.value();
    let age = match kind {
        BlockKind::Potatoes | BlockKind::Carrots | BlockKind::Wheat => {
            if green_terra {
                3
            } else {
                stage.min(3)
            }
        }
        BlockKind::Beetroots | BlockKind::NetherWart => {
            if green_terra || stage > 2 {
                2
            } else if stage == 2 {
                1
            } else {
                0
            }
        }
        BlockKind::Cocoa => {
            if green_terra || stage > 1 {
                1
            } else {
                0
            }
        }
        _ => return None,
    };
    Some(age)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GreenThumbOutcome {
    /// Block kind has no replant rule.
    NotApplicable,
    /// Crop was harvested early and ungrown replants are disabled.
    NotFullyGrown,
    ActivationFailed(ActivationRoll),
    MissingSeed(ItemKind),
    Staged(StagedReplant),
}

impl GreenThumbOutcome {
    pub fn staged(&self) -> Option<&StagedReplant> {
        match self {
            GreenThumbOutcome::Staged(replant) => Some(replant),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GreenThumbResolution {
    pub outcome: GreenThumbOutcome,
    pub effects: EffectBatch,
}

impl GreenThumbResolution {
    fn quiet(outcome: GreenThumbOutcome) -> Self {
        Self {
            outcome,
            effects: EffectBatch::new(),
        }
    }
}

impl HerbalismManager<'_> {
    pub fn green_thumb_stage(&self) -> GrowthStage {
        GrowthStage::from_level(self.actor.level, self.config)
    }

    /// Green Thumb replant of a harvested crop.
    ///
    /// Callers check the Green Thumb entitlement for the crop kind first.
    pub fn process_green_thumb_plants(
        &self,
        block: &BlockState,
    ) -> Result<GreenThumbResolution, OracleError> {
        let Some(seed) = block.kind.seed() else {
            return Ok(GreenThumbResolution::quiet(GreenThumbOutcome::NotApplicable));
        };

        if !block.is_fully_grown() && !self.config.green_thumb_ungrown_crops {
            return Ok(GreenThumbResolution::quiet(GreenThumbOutcome::NotFullyGrown));
        }

        let green_terra = self.actor.green_terra_active();
        if !green_terra {
            let roll = self.roll(&self.config.green_thumb, RollContext::GreenThumbPlant)?;
            if !roll.succeeded() {
                return Ok(GreenThumbResolution::quiet(
                    GreenThumbOutcome::ActivationFailed(roll),
                ));
            }
        }

        let Some(age) = target_age(block.kind, self.green_thumb_stage(), green_terra) else {
            return Ok(GreenThumbResolution::quiet(GreenThumbOutcome::NotApplicable));
        };

        let mut effects = EffectBatch::new();
        if !self.actor.holds_hoe() {
            if !self.actor.inventory.contains(seed, 1) {
                return Ok(GreenThumbResolution {
                    outcome: GreenThumbOutcome::MissingSeed(seed),
                    effects: EffectBatch::one(Effect::Notify(Message::NeedMore(seed))),
                });
            }
            effects.push(Effect::RemoveItem {
                item: seed,
                amount: 1,
            });
        }

        let replant = StagedReplant {
            location: block.location,
            kind: block.kind,
            age,
            marked_at: self.now_secs,
            delay_ticks: HerbalismConfig::REPLANT_DELAY_TICKS,
        };
        effects.push(Effect::StageReplant(replant));

        Ok(GreenThumbResolution {
            outcome: GreenThumbOutcome::Staged(replant),
            effects,
        })
    }
}
