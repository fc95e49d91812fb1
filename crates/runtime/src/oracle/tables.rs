//! Experience and treasure tables served through [`herbalism_core::TablesOracle`].
use std::collections::{HashMap, HashSet};

use herbalism_content::HerbalismTables;
use herbalism_core::{HylianTreasure, TablesOracle};

/// TablesOracle implementation backed by loaded content.
///
/// Holds immutable balance data; lookups are by canonical block key.
#[derive(Debug, Clone, Default)]
pub struct TablesOracleImpl {
    experience: HashMap<String, u32>,
    double_drops_disabled: HashSet<String>,
    treasures: HashMap<String, Vec<HylianTreasure>>,
}

impl TablesOracleImpl {
    pub fn new(tables: HerbalismTables) -> Self {
        Self {
            experience: tables.experience.into_iter().collect(),
            double_drops_disabled: tables.double_drops_disabled.into_iter().collect(),
            treasures: tables.hylian_treasures.into_iter().collect(),
        }
    }

    /// Stock experience values and treasures.
    pub fn classic() -> Self {
        Self::new(HerbalismTables::classic())
    }
}

impl From<HerbalismTables> for TablesOracleImpl {
    fn from(tables: HerbalismTables) -> Self {
        Self::new(tables)
    }
}

impl TablesOracle for TablesOracleImpl {
    fn experience(&self, key: &str) -> u32 {
        self.experience.get(key).copied().unwrap_or(0)
    }

    fn double_drops_enabled(&self, key: &str) -> bool {
        !self.double_drops_disabled.contains(key)
    }

    fn hylian_treasures(&self, key: &str) -> &[HylianTreasure] {
        self.treasures.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}
