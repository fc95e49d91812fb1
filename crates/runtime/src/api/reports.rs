//! Results returned to runtime callers.
use herbalism_core::{BlockState, ConversionOutcome, HarvestOutcome, TreasureOutcome};

use crate::applier::AppliedEffects;
use crate::world::BrokenPlant;

/// A resolved harvest and what it changed.
#[derive(Debug, Clone, PartialEq)]
pub struct HarvestReport {
    pub block: BlockState,
    /// Hylian Luck attempt made before the harvest, only with a sword in hand.
    /// A drop cancels the harvest.
    pub treasure: Option<TreasureOutcome>,
    pub outcome: HarvestOutcome,
    /// Cells removed by the break and the bonus drops they released.
    pub broken: BrokenPlant,
    pub applied: AppliedEffects,
}

impl HarvestReport {
    pub fn reward(&self) -> u32 {
        self.outcome.reward
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub block: BlockState,
    pub outcome: ConversionOutcome,
    pub applied: AppliedEffects,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreasureReport {
    pub block: BlockState,
    pub outcome: TreasureOutcome,
    pub applied: AppliedEffects,
}

/// Compact line for logs and the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestSummary {
    pub block: String,
    pub reward: u32,
    pub bonus_units: u32,
    pub cells: u32,
    pub treasure: bool,
    pub replant_staged: bool,
}

impl From<&HarvestReport> for HarvestSummary {
    fn from(report: &HarvestReport) -> Self {
        Self {
            block: report.block.canonical_key(),
            reward: report.outcome.reward,
            bonus_units: report.outcome.bonus_units,
            cells: report.outcome.cells,
            treasure: report.treasure.as_ref().is_some_and(TreasureOutcome::succeeded),
            replant_staged: !report.applied.staged.is_empty(),
        }
    }
}
