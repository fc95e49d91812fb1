/// Item kinds relevant to herbalism: seeds, reagents, tools and treasure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    // Seeds
    #[strum(to_string = "Wheat Seeds")]
    WheatSeeds,
    #[strum(to_string = "Beetroot Seeds")]
    BeetrootSeeds,
    #[strum(to_string = "Melon Seeds")]
    MelonSeeds,
    #[strum(to_string = "Pumpkin Seeds")]
    PumpkinSeeds,
    Carrot,
    Potato,
    #[strum(to_string = "Nether Wart")]
    NetherWart,
    #[strum(to_string = "Cocoa Beans")]
    CocoaBeans,

    // Reagents
    #[strum(to_string = "Brown Mushroom")]
    BrownMushroom,
    #[strum(to_string = "Red Mushroom")]
    RedMushroom,

    // Tools
    #[strum(to_string = "Wooden Hoe")]
    WoodenHoe,
    #[strum(to_string = "Stone Hoe")]
    StoneHoe,
    #[strum(to_string = "Iron Hoe")]
    IronHoe,
    #[strum(to_string = "Golden Hoe")]
    GoldenHoe,
    #[strum(to_string = "Diamond Hoe")]
    DiamondHoe,
    #[strum(to_string = "Wooden Sword")]
    WoodenSword,
    #[strum(to_string = "Stone Sword")]
    StoneSword,
    #[strum(to_string = "Iron Sword")]
    IronSword,
    #[strum(to_string = "Golden Sword")]
    GoldenSword,
    #[strum(to_string = "Diamond Sword")]
    DiamondSword,

    // Treasure
    Apple,
    #[strum(to_string = "Gold Nugget")]
    GoldNugget,
    Emerald,
    Diamond,

    #[strum(to_string = "Custom Item")]
    Custom(u32),
}

impl ItemKind {
    pub const fn is_hoe(self) -> bool {
        matches!(
            self,
            ItemKind::WoodenHoe
                | ItemKind::StoneHoe
                | ItemKind::IronHoe
                | ItemKind::GoldenHoe
                | ItemKind::DiamondHoe
        )
    }

    pub const fn is_sword(self) -> bool {
        matches!(
            self,
            ItemKind::WoodenSword
                | ItemKind::StoneSword
                | ItemKind::IronSword
                | ItemKind::GoldenSword
                | ItemKind::DiamondSword
        )
    }

    pub const fn is_mushroom(self) -> bool {
        matches!(self, ItemKind::BrownMushroom | ItemKind::RedMushroom)
    }
}

/// A quantity of one item kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    pub item: ItemKind,
    pub amount: u16,
}

impl ItemStack {
    pub const fn new(item: ItemKind, amount: u16) -> Self {
        Self { item, amount }
    }

    pub const fn single(item: ItemKind) -> Self {
        Self::new(item, 1)
    }

    pub const fn is_empty(&self) -> bool {
        self.amount == 0
    }
}
