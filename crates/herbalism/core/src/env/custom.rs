use crate::state::BlockKind;

/// Herbalism settings for an externally registered block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomBlockConfig {
    xp: u32,
    double_drop_enabled: bool,
}

impl CustomBlockConfig {
    pub const fn new(xp: u32, double_drop_enabled: bool) -> Self {
        Self {
            xp,
            double_drop_enabled,
        }
    }

    pub const fn xp(&self) -> u32 {
        self.xp
    }

    pub const fn double_drop_enabled(&self) -> bool {
        self.double_drop_enabled
    }
}

/// Registry of modded blocks that count as herbalism plants.
pub trait CustomBlockOracle: Send + Sync {
    fn custom_block(&self, kind: BlockKind) -> Option<CustomBlockConfig>;
}
