//! Balance tables and custom block registrations.
//!
//! All table keys are canonical block keys such as `Wheat_Ripe` or
//! `Sugar_Cane` (see [`herbalism_core::BlockState::canonical_key`]).

use std::collections::{BTreeMap, BTreeSet};

use herbalism_core::{BlockKind, CustomBlockConfig, HylianTreasure, ItemKind, ItemStack};
use serde::{Deserialize, Serialize};

/// Experience values, double-drop switches and Hylian Luck treasures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HerbalismTables {
    /// Experience per harvested cell. Unlisted blocks grant nothing.
    pub experience: BTreeMap<String, u32>,
    /// Blocks whose double drops are switched off.
    pub double_drops_disabled: BTreeSet<String>,
    /// Ordered treasure candidates per block.
    pub hylian_treasures: BTreeMap<String, Vec<HylianTreasure>>,
}

const CLASSIC_EXPERIENCE: &[(&str, u32)] = &[
    ("Beetroots_Ripe", 50),
    ("Cactus", 30),
    ("Carrots_Ripe", 50),
    ("Chorus_Plant", 1),
    ("Cocoa_Ripe", 30),
    ("Dandelion", 100),
    ("Dead_Bush", 30),
    ("Fern", 10),
    ("Grass", 10),
    ("Kelp", 3),
    ("Kelp_Plant", 3),
    ("Nether_Wart_Ripe", 50),
    ("Poppy", 100),
    ("Potatoes_Ripe", 50),
    ("Sugar_Cane", 30),
    ("Tall_Grass", 50),
    ("Tall_Seagrass", 10),
    ("Wheat_Ripe", 50),
];

const BUSHES: &[&str] = &["Dead_Bush", "Fern", "Grass", "Tall_Grass"];
const FLOWERS: &[&str] = &["Dandelion", "Poppy"];

impl HerbalismTables {
    /// The stock experience and treasure values.
    pub fn classic() -> Self {
        let mut tables = Self {
            experience: CLASSIC_EXPERIENCE
                .iter()
                .map(|(key, xp)| (key.to_string(), *xp))
                .collect(),
            ..Self::default()
        };

        for key in BUSHES {
            for item in [ItemKind::MelonSeeds, ItemKind::PumpkinSeeds, ItemKind::CocoaBeans] {
                tables.add_treasure(key, HylianTreasure::new(0, 1.0, ItemStack::single(item)));
            }
        }
        for key in FLOWERS {
            for item in [ItemKind::Carrot, ItemKind::Potato, ItemKind::Apple] {
                tables.add_treasure(key, HylianTreasure::new(0, 1.0, ItemStack::single(item)));
            }
        }
        tables
    }

    pub fn with_experience(mut self, key: impl Into<String>, xp: u32) -> Self {
        self.experience.insert(key.into(), xp);
        self
    }

    pub fn add_treasure(&mut self, key: &str, treasure: HylianTreasure) {
        self.hylian_treasures
            .entry(key.to_string())
            .or_default()
            .push(treasure);
    }

    pub fn disable_double_drops(&mut self, key: impl Into<String>) {
        self.double_drops_disabled.insert(key.into());
    }
}

/// One externally registered block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomBlockEntry {
    /// Host identifier, matched against [`BlockKind::Custom`].
    pub id: u32,
    pub xp: u32,
    #[serde(default = "enabled")]
    pub double_drops: bool,
}

fn enabled() -> bool {
    true
}

impl CustomBlockEntry {
    pub fn kind(&self) -> BlockKind {
        BlockKind::Custom(self.id)
    }

    pub fn config(&self) -> CustomBlockConfig {
        CustomBlockConfig::new(self.xp, self.double_drops)
    }
}

/// Custom block registry file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomBlockCatalog {
    #[serde(default)]
    pub blocks: Vec<CustomBlockEntry>,
}

impl CustomBlockCatalog {
    /// Registrations keyed by block kind; later entries win on duplicate ids.
    pub fn configs(&self) -> impl Iterator<Item = (BlockKind, CustomBlockConfig)> + '_ {
        self.blocks.iter().map(|entry| (entry.kind(), entry.config()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_tables_cover_every_harvestable_key() {
        use herbalism_core::{BlockState, HarvestableKind, Location};

        let tables = HerbalismTables::classic();
        let kinds = [
            BlockKind::Wheat,
            BlockKind::Carrots,
            BlockKind::Potatoes,
            BlockKind::Beetroots,
            BlockKind::NetherWart,
            BlockKind::Cocoa,
            BlockKind::Cactus,
            BlockKind::SugarCane,
            BlockKind::Kelp,
            BlockKind::KelpPlant,
            BlockKind::Poppy,
        ];
        for kind in kinds {
            assert!(HarvestableKind::classify(kind, None).is_some());
            let ripe = BlockState::new(Location::ORIGIN, kind).with_age(kind.max_age().unwrap_or(0));
            assert!(
                tables.experience.contains_key(&ripe.canonical_key()),
                "{}",
                ripe.canonical_key()
            );
        }
    }

    #[test]
    fn classic_treasures_are_certain() {
        let tables = HerbalismTables::classic();
        let bush = &tables.hylian_treasures["Dead_Bush"];
        assert_eq!(bush.len(), 3);
        assert!(bush.iter().all(|treasure| treasure.drop_chance == 1.0));
        assert!(!tables.hylian_treasures.contains_key("Wheat_Ripe"));
    }

    #[test]
    fn custom_entries_map_to_custom_kinds() {
        let catalog = CustomBlockCatalog {
            blocks: vec![CustomBlockEntry {
                id: 12,
                xp: 40,
                double_drops: false,
            }],
        };
        let configs: Vec<_> = catalog.configs().collect();
        assert_eq!(
            configs,
            vec![(BlockKind::Custom(12), CustomBlockConfig::new(40, false))]
        );
    }
}
