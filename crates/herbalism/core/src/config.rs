use crate::error::{ErrorSeverity, HerbalismError};

/// Activation curve for one sub-skill.
///
/// The chance grows linearly from `base_chance` at level 0 to `max_chance` at
/// `max_bonus_level` and stays flat afterwards. Chances are percentages.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillChance {
    pub base_chance: f64,
    pub max_chance: f64,
    pub max_bonus_level: u32,
}

impl SkillChance {
    pub const fn new(base_chance: f64, max_chance: f64, max_bonus_level: u32) -> Self {
        Self {
            base_chance,
            max_chance,
            max_bonus_level,
        }
    }

    /// Percentage chance at `level`, before luck is applied.
    pub fn chance_at(&self, level: u32) -> f64 {
        if self.max_bonus_level == 0 {
            return self.max_chance;
        }
        let effective = level.min(self.max_bonus_level) as f64;
        let span = self.max_chance - self.base_chance;
        self.base_chance + span * effective / self.max_bonus_level as f64
    }
}

/// Herbalism tuning values.
///
/// Passed by reference into every resolver; nothing reads ambient globals.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HerbalismConfig {
    /// Ignore harvests made from vehicles.
    pub prevent_afk: bool,
    /// Allow Green Thumb to replant crops that were not fully grown.
    pub green_thumb_ungrown_crops: bool,
    /// Levels per Green Thumb stage.
    pub green_thumb_stage_change_level: u32,
    /// Level after which the Green Thumb stage stops rising.
    pub green_thumb_stage_max_level: u32,
    pub double_drops: SkillChance,
    pub green_thumb: SkillChance,
    pub hylian_luck: SkillChance,
    pub shroom_thumb: SkillChance,
    /// Level of the first Farmer's Diet rank.
    pub farmers_diet_base_level: u32,
    /// Level of the last Farmer's Diet rank.
    pub farmers_diet_max_level: u32,
    /// Roll ceiling for regular players.
    pub activation_chance: u32,
    /// Roll ceiling for players with the lucky perk.
    pub lucky_activation_chance: u32,
    /// Tallest column the multi-cell walk will follow.
    pub max_stack_height: u32,
}

impl HerbalismConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_INVENTORY_SLOTS: usize = 36;
    /// Highest Green Thumb stage.
    pub const MAX_GREEN_THUMB_STAGE: u8 = 4;
    /// Ticks between staging and applying a replant.
    pub const REPLANT_DELAY_TICKS: u64 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STAGE_CHANGE_LEVEL: u32 = 200;
    pub const DEFAULT_ACTIVATION_CHANCE: u32 = 100;
    pub const DEFAULT_LUCKY_ACTIVATION_CHANCE: u32 = 75;
    pub const DEFAULT_MAX_STACK_HEIGHT: u32 = 255;

    pub fn new() -> Self {
        Self {
            prevent_afk: true,
            green_thumb_ungrown_crops: false,
            green_thumb_stage_change_level: Self::DEFAULT_STAGE_CHANGE_LEVEL,
            green_thumb_stage_max_level: Self::DEFAULT_STAGE_CHANGE_LEVEL
                * u32::from(Self::MAX_GREEN_THUMB_STAGE),
            double_drops: SkillChance::new(0.0, 100.0, 1000),
            green_thumb: SkillChance::new(0.0, 100.0, 1500),
            hylian_luck: SkillChance::new(0.0, 10.0, 1000),
            shroom_thumb: SkillChance::new(0.0, 50.0, 1500),
            farmers_diet_base_level: 200,
            farmers_diet_max_level: 1000,
            activation_chance: Self::DEFAULT_ACTIVATION_CHANCE,
            lucky_activation_chance: Self::DEFAULT_LUCKY_ACTIVATION_CHANCE,
            max_stack_height: Self::DEFAULT_MAX_STACK_HEIGHT,
        }
    }

    /// Roll ceiling for an actor, taking the lucky perk into account.
    pub fn activation_chance_for(&self, lucky: bool) -> u32 {
        if lucky {
            self.lucky_activation_chance
        } else {
            self.activation_chance
        }
    }

    /// Checks values that would make the formulas meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.green_thumb_stage_change_level == 0 {
            return Err(ConfigError::ZeroStageChangeLevel);
        }
        if self.activation_chance == 0 || self.lucky_activation_chance == 0 {
            return Err(ConfigError::ZeroActivationChance);
        }
        for (name, chance) in [
            ("double_drops", &self.double_drops),
            ("green_thumb", &self.green_thumb),
            ("hylian_luck", &self.hylian_luck),
            ("shroom_thumb", &self.shroom_thumb),
        ] {
            if chance.max_bonus_level == 0 {
                return Err(ConfigError::ZeroMaxBonusLevel(name));
            }
            if !(chance.base_chance >= 0.0 && chance.base_chance <= chance.max_chance) {
                return Err(ConfigError::InvertedChance(name));
            }
        }
        Ok(())
    }
}

impl Default for HerbalismConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration values rejected by [`HerbalismConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("green thumb stage change level must be positive")]
    ZeroStageChangeLevel,

    #[error("activation chance ceilings must be positive")]
    ZeroActivationChance,

    #[error("{0}: max bonus level must be positive")]
    ZeroMaxBonusLevel(&'static str),

    #[error("{0}: base chance must be non-negative and not above max chance")]
    InvertedChance(&'static str),
}

impl HerbalismError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ZeroStageChangeLevel => "CONFIG_ZERO_STAGE_CHANGE_LEVEL",
            ConfigError::ZeroActivationChance => "CONFIG_ZERO_ACTIVATION_CHANCE",
            ConfigError::ZeroMaxBonusLevel(_) => "CONFIG_ZERO_MAX_BONUS_LEVEL",
            ConfigError::InvertedChance(_) => "CONFIG_INVERTED_CHANCE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(HerbalismConfig::default().validate(), Ok(()));
    }

    #[test]
    fn chance_curve_is_linear_then_flat() {
        let curve = SkillChance::new(10.0, 50.0, 100);
        assert_eq!(curve.chance_at(0), 10.0);
        assert_eq!(curve.chance_at(50), 30.0);
        assert_eq!(curve.chance_at(100), 50.0);
        assert_eq!(curve.chance_at(5000), 50.0);
    }

    #[test]
    fn rejects_zero_stage_change() {
        let config = HerbalismConfig {
            green_thumb_stage_change_level: 0,
            ..HerbalismConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroStageChangeLevel));
    }

    #[test]
    fn rejects_inverted_chance() {
        let config = HerbalismConfig {
            hylian_luck: SkillChance::new(20.0, 10.0, 1000),
            ..HerbalismConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedChance("hylian_luck"))
        );
    }
}
