//! RNG oracle for deterministic skill rolls.
//!
//! Every roll draws from a seed derived from the interaction seed, the actor
//! and a [`RollContext`], so replaying an interaction with the same seed
//! replays every roll in it.

use crate::state::ActorId;

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform value in `[0, 1)`.
    fn unit(&self, seed: u64) -> f64 {
        f64::from(self.next_u32(seed)) / (f64::from(u32::MAX) + 1.0)
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Identifies one independent roll inside an interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RollContext {
    /// Double-drop roll for the n-th walked cell.
    DoubleDrop { cell: u32 },
    GreenThumbPlant,
    GreenThumbBlock,
    HylianLuck,
    /// Per-entry chance roll for the n-th treasure candidate.
    HylianTreasure { index: u32 },
    ShroomThumb,
}

impl RollContext {
    /// `(stream, index)` pair mixed into the seed.
    const fn components(self) -> (u32, u64) {
        match self {
            RollContext::DoubleDrop { cell } => (1, cell as u64),
            RollContext::GreenThumbPlant => (2, 0),
            RollContext::GreenThumbBlock => (3, 0),
            RollContext::HylianLuck => (4, 0),
            RollContext::HylianTreasure { index } => (5, index as u64),
            RollContext::ShroomThumb => (6, 0),
        }
    }
}

/// Seed source for one interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollSeed {
    pub interaction_seed: u64,
    pub actor: ActorId,
}

impl RollSeed {
    pub const fn new(interaction_seed: u64, actor: ActorId) -> Self {
        Self {
            interaction_seed,
            actor,
        }
    }

    pub fn for_roll(&self, context: RollContext) -> u64 {
        let (stream, index) = context.components();
        compute_seed(self.interaction_seed, index, self.actor.0, stream)
    }
}

/// Compute deterministic seed from interaction components.
///
/// * `base_seed` - Seed supplied with the interaction event
/// * `nonce` - Index within a stream (walked cell, treasure entry)
/// * `actor_id` - Player performing the interaction
/// * `context` - Roll stream, so different rolls never share a seed
pub fn compute_seed(base_seed: u64, nonce: u64, actor_id: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash style mixing constants
    let mut hash = base_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor_id as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
