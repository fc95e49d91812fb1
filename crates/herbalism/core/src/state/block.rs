//! Block snapshots and harvest classification.
//!
//! A [`BlockState`] is a read-only copy of one world cell taken when the
//! interaction event fires. [`HarvestableKind`] sorts block kinds into the
//! categories the yield, growth and gating rules branch on.

use std::fmt;

use crate::env::CustomBlockConfig;
use crate::state::ItemKind;

/// Integer block coordinates in the world grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Location {
    pub const ORIGIN: Self = Self { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Cell directly above, `offset` blocks up.
    pub const fn up(self, offset: i32) -> Self {
        Self::new(self.x, self.y + offset, self.z)
    }

    /// Cell directly below, `offset` blocks down.
    pub const fn down(self, offset: i32) -> Self {
        Self::new(self.x, self.y - offset, self.z)
    }

    /// Geometric center of the cell, where dropped items spawn.
    pub fn center(self) -> Point {
        Point {
            x: self.x as f64 + 0.5,
            y: self.y as f64 + 0.5,
            z: self.z as f64 + 0.5,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Continuous world position.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    /// Cell containing this point.
    pub fn block(self) -> Location {
        Location::new(
            self.x.floor() as i32,
            self.y.floor() as i32,
            self.z.floor() as i32,
        )
    }
}

/// Every block kind the herbalism rules can observe.
///
/// `Custom` carries the host's numeric id for modded blocks; whether such a
/// block is harvestable is decided by the custom block registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockKind {
    Air,

    // Crops
    Carrots,
    Wheat,
    NetherWart,
    Potatoes,
    Beetroots,
    Cocoa,

    // Stacked plants
    Cactus,
    ChorusPlant,
    SugarCane,
    TallGrass,
    TallSeagrass,
    Kelp,
    KelpPlant,

    // Flora
    Dandelion,
    Poppy,
    DeadBush,
    Fern,
    Grass,

    // Convertible terrain
    Dirt,
    GrassBlock,
    GrassPath,
    Mycelium,
    Cobblestone,
    MossyCobblestone,
    CobblestoneWall,
    MossyCobblestoneWall,
    StoneBricks,
    MossyStoneBricks,

    Custom(u32),
}

impl BlockKind {
    /// Natural maximum age for ageable crops.
    pub const fn max_age(self) -> Option<u8> {
        match self {
            BlockKind::Wheat | BlockKind::Carrots | BlockKind::Potatoes => Some(7),
            BlockKind::Beetroots | BlockKind::NetherWart => Some(3),
            BlockKind::Cocoa => Some(2),
            _ => None,
        }
    }

    /// Seed item consumed when Green Thumb replants this crop.
    pub const fn seed(self) -> Option<ItemKind> {
        match self {
            BlockKind::Carrots => Some(ItemKind::Carrot),
            BlockKind::Wheat => Some(ItemKind::WheatSeeds),
            BlockKind::NetherWart => Some(ItemKind::NetherWart),
            BlockKind::Potatoes => Some(ItemKind::Potato),
            BlockKind::Beetroots => Some(ItemKind::BeetrootSeeds),
            BlockKind::Cocoa => Some(ItemKind::CocoaBeans),
            _ => None,
        }
    }

    pub const fn is_kelp(self) -> bool {
        matches!(self, BlockKind::Kelp | BlockKind::KelpPlant)
    }

    /// Whether Green Thumb / Green Terra can turn this block mossy.
    pub const fn is_mossable(self) -> bool {
        self.mossy_form().is_some()
    }

    /// Result of a Green Thumb block conversion.
    pub const fn mossy_form(self) -> Option<BlockKind> {
        match self {
            BlockKind::Cobblestone => Some(BlockKind::MossyCobblestone),
            BlockKind::CobblestoneWall => Some(BlockKind::MossyCobblestoneWall),
            BlockKind::StoneBricks => Some(BlockKind::MossyStoneBricks),
            BlockKind::Dirt | BlockKind::GrassPath => Some(BlockKind::GrassBlock),
            _ => None,
        }
    }

    /// Whether Shroom Thumb can turn this block into mycelium.
    pub const fn is_shroomable(self) -> bool {
        self.shroom_form().is_some()
    }

    pub const fn shroom_form(self) -> Option<BlockKind> {
        match self {
            BlockKind::Dirt | BlockKind::GrassBlock | BlockKind::GrassPath => {
                Some(BlockKind::Mycelium)
            }
            _ => None,
        }
    }

    /// Human readable name, words separated by spaces.
    pub fn pretty_name(self) -> String {
        let name = match self {
            BlockKind::Air => "Air",
            BlockKind::Carrots => "Carrots",
            BlockKind::Wheat => "Wheat",
            BlockKind::NetherWart => "Nether Wart",
            BlockKind::Potatoes => "Potatoes",
            BlockKind::Beetroots => "Beetroots",
            BlockKind::Cocoa => "Cocoa",
            BlockKind::Cactus => "Cactus",
            BlockKind::ChorusPlant => "Chorus Plant",
            BlockKind::SugarCane => "Sugar Cane",
            BlockKind::TallGrass => "Tall Grass",
            BlockKind::TallSeagrass => "Tall Seagrass",
            BlockKind::Kelp => "Kelp",
            BlockKind::KelpPlant => "Kelp Plant",
            BlockKind::Dandelion => "Dandelion",
            BlockKind::Poppy => "Poppy",
            BlockKind::DeadBush => "Dead Bush",
            BlockKind::Fern => "Fern",
            BlockKind::Grass => "Grass",
            BlockKind::Dirt => "Dirt",
            BlockKind::GrassBlock => "Grass Block",
            BlockKind::GrassPath => "Grass Path",
            BlockKind::Mycelium => "Mycelium",
            BlockKind::Cobblestone => "Cobblestone",
            BlockKind::MossyCobblestone => "Mossy Cobblestone",
            BlockKind::CobblestoneWall => "Cobblestone Wall",
            BlockKind::MossyCobblestoneWall => "Mossy Cobblestone Wall",
            BlockKind::StoneBricks => "Stone Bricks",
            BlockKind::MossyStoneBricks => "Mossy Stone Bricks",
            BlockKind::Custom(id) => return format!("Custom {id}"),
        };
        name.to_owned()
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty_name())
    }
}

/// Snapshot of a single world cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockState {
    pub location: Location,
    pub kind: BlockKind,
    /// Growth value; zero for kinds that do not age.
    pub age: u8,
}

impl BlockState {
    pub const fn new(location: Location, kind: BlockKind) -> Self {
        Self {
            location,
            kind,
            age: 0,
        }
    }

    pub const fn with_age(mut self, age: u8) -> Self {
        self.age = age;
        self
    }

    /// Ageable crops at their natural maximum. Non-ageable blocks count as grown.
    pub fn is_fully_grown(&self) -> bool {
        match self.kind.max_age() {
            Some(max) => self.age >= max,
            None => true,
        }
    }

    /// Key used by experience, double-drop and treasure tables.
    ///
    /// Ageable crops get a `_Ripe` or `_Ungrown` suffix, e.g. `Wheat_Ripe`.
    pub fn canonical_key(&self) -> String {
        let base = self.kind.pretty_name().replace(' ', "_");
        match self.kind.max_age() {
            Some(max) if self.age >= max => format!("{base}_Ripe"),
            Some(_) => format!("{base}_Ungrown"),
            None => base,
        }
    }
}

/// Ageable crops occupying exactly one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CropKind {
    Carrots,
    Wheat,
    NetherWart,
    Potatoes,
    Beetroots,
    Cocoa,
}

/// Plants that grow as a vertical column of identical cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackedKind {
    Cactus,
    ChorusPlant,
    SugarCane,
    TallGrass,
    TallSeagrass,
}

/// Harvest category of a block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HarvestableKind {
    SingleCellCrop(CropKind),
    /// Flowers, bushes and ferns: one cell, no growth stages.
    SingleCellFlora,
    MultiCellPlant(StackedKind),
    /// Kelp and kelp plant cells forming one column.
    KelpPair,
    CustomExtension(CustomBlockConfig),
}

impl HarvestableKind {
    /// Classifies a block kind. Custom registrations take precedence.
    ///
    /// Returns `None` for blocks herbalism does not harvest.
    pub fn classify(kind: BlockKind, custom: Option<CustomBlockConfig>) -> Option<Self> {
        if let Some(config) = custom {
            return Some(HarvestableKind::CustomExtension(config));
        }

        let class = match kind {
            BlockKind::Carrots => HarvestableKind::SingleCellCrop(CropKind::Carrots),
            BlockKind::Wheat => HarvestableKind::SingleCellCrop(CropKind::Wheat),
            BlockKind::NetherWart => HarvestableKind::SingleCellCrop(CropKind::NetherWart),
            BlockKind::Potatoes => HarvestableKind::SingleCellCrop(CropKind::Potatoes),
            BlockKind::Beetroots => HarvestableKind::SingleCellCrop(CropKind::Beetroots),
            BlockKind::Cocoa => HarvestableKind::SingleCellCrop(CropKind::Cocoa),

            BlockKind::Cactus => HarvestableKind::MultiCellPlant(StackedKind::Cactus),
            BlockKind::ChorusPlant => HarvestableKind::MultiCellPlant(StackedKind::ChorusPlant),
            BlockKind::SugarCane => HarvestableKind::MultiCellPlant(StackedKind::SugarCane),
            BlockKind::TallGrass => HarvestableKind::MultiCellPlant(StackedKind::TallGrass),
            BlockKind::TallSeagrass => HarvestableKind::MultiCellPlant(StackedKind::TallSeagrass),

            BlockKind::Kelp | BlockKind::KelpPlant => HarvestableKind::KelpPair,

            BlockKind::Dandelion
            | BlockKind::Poppy
            | BlockKind::DeadBush
            | BlockKind::Fern
            | BlockKind::Grass => HarvestableKind::SingleCellFlora,

            BlockKind::Air
            | BlockKind::Dirt
            | BlockKind::GrassBlock
            | BlockKind::GrassPath
            | BlockKind::Mycelium
            | BlockKind::Cobblestone
            | BlockKind::MossyCobblestone
            | BlockKind::CobblestoneWall
            | BlockKind::MossyCobblestoneWall
            | BlockKind::StoneBricks
            | BlockKind::MossyStoneBricks
            | BlockKind::Custom(_) => return None,
        };

        Some(class)
    }

    /// Plants whose harvest spans more than the interacted cell.
    pub const fn is_multi_cell(&self) -> bool {
        matches!(
            self,
            HarvestableKind::MultiCellPlant(_) | HarvestableKind::KelpPair
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn canonical_key_tracks_ripeness() {
        let at = Location::ORIGIN;
        assert_eq!(
            BlockState::new(at, BlockKind::Wheat).with_age(7).canonical_key(),
            "Wheat_Ripe"
        );
        assert_eq!(
            BlockState::new(at, BlockKind::NetherWart).with_age(1).canonical_key(),
            "Nether_Wart_Ungrown"
        );
        assert_eq!(
            BlockState::new(at, BlockKind::SugarCane).canonical_key(),
            "Sugar_Cane"
        );
    }

    #[test]
    fn classification_is_total() {
        for kind in BlockKind::iter() {
            let class = HarvestableKind::classify(kind, None);
            let harvestable = kind.seed().is_some()
                || matches!(
                    kind,
                    BlockKind::Cactus
                        | BlockKind::ChorusPlant
                        | BlockKind::SugarCane
                        | BlockKind::TallGrass
                        | BlockKind::TallSeagrass
                        | BlockKind::Kelp
                        | BlockKind::KelpPlant
                        | BlockKind::Dandelion
                        | BlockKind::Poppy
                        | BlockKind::DeadBush
                        | BlockKind::Fern
                        | BlockKind::Grass
                );
            assert_eq!(class.is_some(), harvestable, "{kind:?}");
        }
    }

    #[test]
    fn custom_registration_wins() {
        let config = CustomBlockConfig::new(42, true);
        assert_eq!(
            HarvestableKind::classify(BlockKind::Custom(7), Some(config)),
            Some(HarvestableKind::CustomExtension(config))
        );
        assert_eq!(HarvestableKind::classify(BlockKind::Custom(7), None), None);
    }

    #[test]
    fn conversions() {
        assert_eq!(BlockKind::Dirt.mossy_form(), Some(BlockKind::GrassBlock));
        assert_eq!(BlockKind::GrassBlock.mossy_form(), None);
        assert_eq!(BlockKind::GrassBlock.shroom_form(), Some(BlockKind::Mycelium));
        assert!(!BlockKind::Cobblestone.is_shroomable());
    }
}
