use crate::state::{ActorId, BlockKind};

/// Entitlements gated by the host's permission system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Capability {
    DoubleDrops,
    /// Replant harvested crops; checked per crop kind.
    GreenThumbPlant,
    /// Turn terrain mossy; checked per block kind.
    GreenThumbBlock,
    ShroomThumb,
    HylianLuck,
    GreenTerra,
    FarmersDiet,
}

/// Answers "may this actor use capability X (on block Y)".
pub trait PermissionOracle: Send + Sync {
    fn allows(&self, actor: ActorId, capability: Capability, target: Option<BlockKind>) -> bool;
}
