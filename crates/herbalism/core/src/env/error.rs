//! Oracle access errors.

use crate::error::{ErrorSeverity, HerbalismError};

/// Errors raised when a resolver needs an oracle the environment lacks.
///
/// These are fatal: the host wired the resolver without data it requires.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("WorldOracle not available")]
    WorldNotAvailable,

    #[error("PermissionOracle not available")]
    PermissionsNotAvailable,

    #[error("PlaceStoreOracle not available")]
    PlaceStoreNotAvailable,

    #[error("BreakPolicyOracle not available")]
    BreakPolicyNotAvailable,

    #[error("TablesOracle not available")]
    TablesNotAvailable,

    #[error("CustomBlockOracle not available")]
    CustomBlocksNotAvailable,

    #[error("RngOracle not available")]
    RngNotAvailable,
}

impl HerbalismError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            WorldNotAvailable => "ORACLE_WORLD_NOT_AVAILABLE",
            PermissionsNotAvailable => "ORACLE_PERMISSIONS_NOT_AVAILABLE",
            PlaceStoreNotAvailable => "ORACLE_PLACE_STORE_NOT_AVAILABLE",
            BreakPolicyNotAvailable => "ORACLE_BREAK_POLICY_NOT_AVAILABLE",
            TablesNotAvailable => "ORACLE_TABLES_NOT_AVAILABLE",
            CustomBlocksNotAvailable => "ORACLE_CUSTOM_BLOCKS_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
        }
    }
}
