//! Farmer's Diet: extra food from farm produce.

use crate::env::{Capability, OracleError};
use crate::skill::HerbalismManager;

impl HerbalismManager<'_> {
    /// Food level after eating farm produce.
    ///
    /// The food gained is `event_food_level - current_food_level` plus one
    /// for every diet rank reached: ranks start at `farmers_diet_base_level`
    /// and repeat every `rank_change` levels up to `farmers_diet_max_level`.
    /// A zero `rank_change` grants only the first rank.
    pub fn farmers_diet(&self, rank_change: u32, event_food_level: i32, current_food_level: i32) -> i32 {
        let gain = event_food_level - current_food_level;
        current_food_level + gain + self.farmers_diet_rank(rank_change) as i32
    }

    /// Number of diet ranks reached at the actor's level.
    pub fn farmers_diet_rank(&self, rank_change: u32) -> u32 {
        let base = self.config.farmers_diet_base_level;
        let max = self.config.farmers_diet_max_level;
        let level = self.actor.level;
        if level < base || base > max {
            return 0;
        }
        if rank_change == 0 {
            return 1;
        }
        let reached = level.min(max);
        (reached - base) / rank_change + 1
    }

    pub fn can_use_farmers_diet(&self) -> Result<bool, OracleError> {
        self.allows(Capability::FarmersDiet, None)
    }
}
