use crate::state::ItemStack;

/// Oracle providing herbalism balance tables.
///
/// All lookups use the block's canonical key (see
/// [`BlockState::canonical_key`](crate::state::BlockState::canonical_key)).
pub trait TablesOracle: Send + Sync {
    /// Experience granted for harvesting one cell; 0 when unlisted.
    fn experience(&self, key: &str) -> u32;

    /// Whether double drops are enabled for the block. Unlisted blocks are enabled.
    fn double_drops_enabled(&self, key: &str) -> bool;

    /// Hylian Luck candidates, in the order they are tried.
    fn hylian_treasures(&self, key: &str) -> &[HylianTreasure];
}

/// One Hylian Luck candidate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HylianTreasure {
    /// Minimum herbalism level.
    pub drop_level: u32,
    /// Probability in `[0, 1]` before luck.
    pub drop_chance: f64,
    pub drop: ItemStack,
}

impl HylianTreasure {
    pub const fn new(drop_level: u32, drop_chance: f64, drop: ItemStack) -> Self {
        Self {
            drop_level,
            drop_chance,
            drop,
        }
    }
}
