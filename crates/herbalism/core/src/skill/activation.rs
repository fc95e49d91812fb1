//! Probability policy shared by every herbalism roll.
//!
//! A roll succeeds when a uniform draw in `[0, 1)` falls below
//! `chance% / activation_chance`, clamped to `[0, 1]`. The lucky perk lowers
//! the activation ceiling from 100 to 75, which scales every chance by 4/3.

use crate::config::SkillChance;
use crate::env::RngOracle;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RollOutcome {
    Success,
    Fail,
}

/// Result of one activation roll, with the inputs needed to reproduce it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActivationRoll {
    pub outcome: RollOutcome,
    /// Chance at level 0, in percent.
    pub base_chance: f64,
    /// Chance added by the actor's level, in percent.
    pub proficiency_bonus: f64,
    /// `activation_chance / 100`; below 1.0 for lucky actors.
    pub luck_modifier: f64,
    /// Final success probability.
    pub probability: f64,
    /// Uniform draw compared against `probability`.
    pub drawn: f64,
}

impl ActivationRoll {
    pub fn succeeded(&self) -> bool {
        self.outcome == RollOutcome::Success
    }
}

fn luck_modifier(activation_chance: u32) -> f64 {
    f64::from(activation_chance.max(1)) / 100.0
}

/// Success probability of a sub-skill roll at `level`.
pub fn success_probability(chance: &SkillChance, level: u32, activation_chance: u32) -> f64 {
    let percent = chance.chance_at(level);
    (percent / f64::from(activation_chance.max(1))).clamp(0.0, 1.0)
}

fn resolve<R: RngOracle + ?Sized>(
    rng: &R,
    seed: u64,
    base_chance: f64,
    proficiency_bonus: f64,
    luck_modifier: f64,
    probability: f64,
) -> ActivationRoll {
    let drawn = rng.unit(seed);
    let outcome = if drawn < probability {
        RollOutcome::Success
    } else {
        RollOutcome::Fail
    };
    ActivationRoll {
        outcome,
        base_chance,
        proficiency_bonus,
        luck_modifier,
        probability,
        drawn,
    }
}

/// Rolls a level-scaled sub-skill activation.
pub fn roll_activation<R: RngOracle + ?Sized>(
    chance: &SkillChance,
    level: u32,
    activation_chance: u32,
    rng: &R,
    seed: u64,
) -> ActivationRoll {
    resolve(
        rng,
        seed,
        chance.base_chance,
        chance.chance_at(level) - chance.base_chance,
        luck_modifier(activation_chance),
        success_probability(chance, level, activation_chance),
    )
}

/// Rolls a treasure entry's own drop chance (a probability, not a percent).
pub fn roll_treasure_drop<R: RngOracle + ?Sized>(
    drop_chance: f64,
    activation_chance: u32,
    rng: &R,
    seed: u64,
) -> ActivationRoll {
    let luck = luck_modifier(activation_chance);
    let probability = (drop_chance / luck).clamp(0.0, 1.0);
    resolve(rng, seed, drop_chance * 100.0, 0.0, luck, probability)
}
