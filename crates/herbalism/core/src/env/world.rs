//! Read access to the host world.

use crate::state::{ActorId, BlockState, Location};

/// Current block snapshots, used to walk stacked plants.
pub trait WorldOracle: Send + Sync {
    /// Block at `location`, or `None` outside loaded terrain.
    fn block_at(&self, location: Location) -> Option<BlockState>;
}

/// Marker store for blocks placed by players.
///
/// Harvesting a player-placed single-cell plant grants nothing, which stops
/// place-and-break experience farming.
pub trait PlaceStoreOracle: Send + Sync {
    fn is_placed(&self, location: Location) -> bool;
}

/// Simulates a block break through the host's protection hooks.
pub trait BreakPolicyOracle: Send + Sync {
    /// `false` when some protection rule vetoes the break.
    fn can_break(&self, actor: ActorId, location: Location) -> bool;
}
