//! Eligibility gate: decides whether an interaction counts at all.

use crate::env::OracleError;
use crate::skill::HerbalismManager;
use crate::state::{BlockState, HarvestableKind};

impl HerbalismManager<'_> {
    /// Anti-AFK check: harvesting from a vehicle is ignored when enabled.
    pub fn can_block_check(&self) -> bool {
        !(self.config.prevent_afk && self.actor.in_vehicle())
    }

    /// Whether a harvest of `block` should be processed.
    ///
    /// Rejects blocks herbalism does not harvest, AFK harvests, and
    /// single-cell plants the place store marks as player-placed.
    pub fn should_process(&self, block: &BlockState) -> Result<bool, OracleError> {
        if !self.can_block_check() {
            return Ok(false);
        }

        let custom = self.env.custom_blocks()?.custom_block(block.kind);
        let Some(class) = HarvestableKind::classify(block.kind, custom) else {
            return Ok(false);
        };

        if !class.is_multi_cell() && self.env.place_store()?.is_placed(block.location) {
            return Ok(false);
        }

        Ok(true)
    }
}
