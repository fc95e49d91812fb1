//! Traits describing what the resolver may ask the host.
//!
//! Oracles expose world reads, permissions, balance tables, the custom block
//! registry and randomness. The [`Env`] aggregate bundles them so resolvers
//! can reach everything they need without coupling to concrete hosts.
mod custom;
mod error;
mod permissions;
mod rng;
mod tables;
mod world;

pub use custom::{CustomBlockConfig, CustomBlockOracle};
pub use error::OracleError;
pub use permissions::{Capability, PermissionOracle};
pub use rng::{PcgRng, RngOracle, RollContext, RollSeed, compute_seed};
pub use tables::{HylianTreasure, TablesOracle};
pub use world::{BreakPolicyOracle, PlaceStoreOracle, WorldOracle};

/// Aggregates read-only oracles required by the resolvers.
pub struct Env<'a, W, P, S, B, T, C, R>
where
    W: WorldOracle + ?Sized,
    P: PermissionOracle + ?Sized,
    S: PlaceStoreOracle + ?Sized,
    B: BreakPolicyOracle + ?Sized,
    T: TablesOracle + ?Sized,
    C: CustomBlockOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    world: Option<&'a W>,
    permissions: Option<&'a P>,
    place_store: Option<&'a S>,
    break_policy: Option<&'a B>,
    tables: Option<&'a T>,
    custom_blocks: Option<&'a C>,
    rng: Option<&'a R>,
}

impl<W, P, S, B, T, C, R> Clone for Env<'_, W, P, S, B, T, C, R>
where
    W: WorldOracle + ?Sized,
    P: PermissionOracle + ?Sized,
    S: PlaceStoreOracle + ?Sized,
    B: BreakPolicyOracle + ?Sized,
    T: TablesOracle + ?Sized,
    C: CustomBlockOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<W, P, S, B, T, C, R> Copy for Env<'_, W, P, S, B, T, C, R>
where
    W: WorldOracle + ?Sized,
    P: PermissionOracle + ?Sized,
    S: PlaceStoreOracle + ?Sized,
    B: BreakPolicyOracle + ?Sized,
    T: TablesOracle + ?Sized,
    C: CustomBlockOracle + ?Sized,
    R: RngOracle + ?Sized,
{
}

impl<W, P, S, B, T, C, R> core::fmt::Debug for Env<'_, W, P, S, B, T, C, R>
where
    W: WorldOracle + ?Sized,
    P: PermissionOracle + ?Sized,
    S: PlaceStoreOracle + ?Sized,
    B: BreakPolicyOracle + ?Sized,
    T: TablesOracle + ?Sized,
    C: CustomBlockOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Env")
            .field("world", &self.world.is_some())
            .field("permissions", &self.permissions.is_some())
            .field("place_store", &self.place_store.is_some())
            .field("break_policy", &self.break_policy.is_some())
            .field("tables", &self.tables.is_some())
            .field("custom_blocks", &self.custom_blocks.is_some())
            .field("rng", &self.rng.is_some())
            .finish()
    }
}

pub type HerbalismEnv<'a> = Env<
    'a,
    dyn WorldOracle + 'a,
    dyn PermissionOracle + 'a,
    dyn PlaceStoreOracle + 'a,
    dyn BreakPolicyOracle + 'a,
    dyn TablesOracle + 'a,
    dyn CustomBlockOracle + 'a,
    dyn RngOracle + 'a,
>;

impl<'a, W, P, S, B, T, C, R> Env<'a, W, P, S, B, T, C, R>
where
    W: WorldOracle + ?Sized,
    P: PermissionOracle + ?Sized,
    S: PlaceStoreOracle + ?Sized,
    B: BreakPolicyOracle + ?Sized,
    T: TablesOracle + ?Sized,
    C: CustomBlockOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(
        world: Option<&'a W>,
        permissions: Option<&'a P>,
        place_store: Option<&'a S>,
        break_policy: Option<&'a B>,
        tables: Option<&'a T>,
        custom_blocks: Option<&'a C>,
        rng: Option<&'a R>,
    ) -> Self {
        Self {
            world,
            permissions,
            place_store,
            break_policy,
            tables,
            custom_blocks,
            rng,
        }
    }

    pub fn with_all(
        world: &'a W,
        permissions: &'a P,
        place_store: &'a S,
        break_policy: &'a B,
        tables: &'a T,
        custom_blocks: &'a C,
        rng: &'a R,
    ) -> Self {
        Self::new(
            Some(world),
            Some(permissions),
            Some(place_store),
            Some(break_policy),
            Some(tables),
            Some(custom_blocks),
            Some(rng),
        )
    }

    pub fn empty() -> Self {
        Self {
            world: None,
            permissions: None,
            place_store: None,
            break_policy: None,
            tables: None,
            custom_blocks: None,
            rng: None,
        }
    }

    /// Returns the WorldOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::WorldNotAvailable` if no world oracle was provided.
    pub fn world(&self) -> Result<&'a W, OracleError> {
        self.world.ok_or(OracleError::WorldNotAvailable)
    }

    /// Returns the PermissionOracle, or an error if not available.
    pub fn permissions(&self) -> Result<&'a P, OracleError> {
        self.permissions.ok_or(OracleError::PermissionsNotAvailable)
    }

    /// Returns the PlaceStoreOracle, or an error if not available.
    pub fn place_store(&self) -> Result<&'a S, OracleError> {
        self.place_store.ok_or(OracleError::PlaceStoreNotAvailable)
    }

    /// Returns the BreakPolicyOracle, or an error if not available.
    pub fn break_policy(&self) -> Result<&'a B, OracleError> {
        self.break_policy.ok_or(OracleError::BreakPolicyNotAvailable)
    }

    /// Returns the TablesOracle, or an error if not available.
    pub fn tables(&self) -> Result<&'a T, OracleError> {
        self.tables.ok_or(OracleError::TablesNotAvailable)
    }

    /// Returns the CustomBlockOracle, or an error if not available.
    pub fn custom_blocks(&self) -> Result<&'a C, OracleError> {
        self.custom_blocks
            .ok_or(OracleError::CustomBlocksNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}

impl<'a, W, P, S, B, T, C, R> Env<'a, W, P, S, B, T, C, R>
where
    W: WorldOracle + 'a,
    P: PermissionOracle + 'a,
    S: PlaceStoreOracle + 'a,
    B: BreakPolicyOracle + 'a,
    T: TablesOracle + 'a,
    C: CustomBlockOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based `HerbalismEnv`.
    pub fn into_herbalism_env(self) -> HerbalismEnv<'a> {
        let world: Option<&'a dyn WorldOracle> = self.world.map(|world| world as _);
        let permissions: Option<&'a dyn PermissionOracle> =
            self.permissions.map(|permissions| permissions as _);
        let place_store: Option<&'a dyn PlaceStoreOracle> =
            self.place_store.map(|store| store as _);
        let break_policy: Option<&'a dyn BreakPolicyOracle> =
            self.break_policy.map(|policy| policy as _);
        let tables: Option<&'a dyn TablesOracle> = self.tables.map(|tables| tables as _);
        let custom_blocks: Option<&'a dyn CustomBlockOracle> =
            self.custom_blocks.map(|custom| custom as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        Env::new(
            world,
            permissions,
            place_store,
            break_policy,
            tables,
            custom_blocks,
            rng,
        )
    }
}
