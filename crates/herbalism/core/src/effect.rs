//! World changes requested by a resolution.
//!
//! Resolvers never touch the world. They return an [`EffectBatch`] and the
//! host applies it in order. A batch is only built once every precondition
//! of an operation has passed, so an aborted operation yields no effects
//! other than the message explaining why.

use crate::state::{BlockKind, ItemKind, ItemStack, Location, Point};

/// Localized message sent to the acting player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Message {
    /// Green Terra needs a seed to convert a block.
    GreenTerraNeedMore,
    GreenThumbFail,
    ShroomThumbFail,
    HylianLuck,
    /// Generic "you need more X" with the item as argument.
    NeedMore(ItemKind),
}

impl Message {
    /// Locale key understood by the host's message bundle.
    pub const fn key(&self) -> &'static str {
        match self {
            Message::GreenTerraNeedMore => "Herbalism.Ability.GTe.NeedMore",
            Message::GreenThumbFail => "Herbalism.Ability.GTh.Fail",
            Message::ShroomThumbFail => "Herbalism.Ability.ShroomThumb.Fail",
            Message::HylianLuck => "Herbalism.HylianLuck",
            Message::NeedMore(_) => "Skills.NeedMore",
        }
    }

    /// Positional arguments for the locale template.
    pub fn args(&self) -> Vec<String> {
        match self {
            Message::NeedMore(item) => vec![item.to_string()],
            _ => Vec::new(),
        }
    }
}

/// Why experience was granted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum XpGainReason {
    Pve,
}

/// Crop replant staged by Green Thumb.
///
/// The host applies it `delay_ticks` later; if the cell changed in between
/// the replant is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StagedReplant {
    pub location: Location,
    pub kind: BlockKind,
    pub age: u8,
    /// Green Thumb marker written on the block, in seconds.
    pub marked_at: u64,
    pub delay_ticks: u64,
}

/// One requested change.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    RemoveItem { item: ItemKind, amount: u16 },
    /// Multiply the block's natural drops by `units` extra copies.
    MarkBonusDrops { location: Location, units: u32 },
    SetEmpty { location: Location },
    SetKind { location: Location, kind: BlockKind },
    DropItem { at: Point, item: ItemStack },
    Notify(Message),
    AwardExperience { amount: u32, reason: XpGainReason },
    StageReplant(StagedReplant),
}

/// Ordered list of effects produced by one operation.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectBatch {
    effects: Vec<Effect>,
}

impl EffectBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Batch holding a single effect.
    pub fn one(effect: Effect) -> Self {
        Self {
            effects: vec![effect],
        }
    }

    pub fn push(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    pub fn append(&mut self, other: EffectBatch) {
        self.effects.extend(other.effects);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Effects that touch the world or inventory, i.e. everything but messages.
    pub fn mutations(&self) -> impl Iterator<Item = &Effect> {
        self.effects
            .iter()
            .filter(|effect| !matches!(effect, Effect::Notify(_)))
    }

    pub fn into_vec(self) -> Vec<Effect> {
        self.effects
    }
}

impl IntoIterator for EffectBatch {
    type Item = Effect;
    type IntoIter = std::vec::IntoIter<Effect>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.into_iter()
    }
}

impl Extend<Effect> for EffectBatch {
    fn extend<I: IntoIterator<Item = Effect>>(&mut self, iter: I) {
        self.effects.extend(iter);
    }
}
