//! Arena constants configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::ConfigError;
use crate::types::{DamageRange, PlayerClass};

/// Tunable arena constants
///
/// Every section is optional in the TOML file; missing sections keep their
/// defaults. Within a combatant section both fields are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConstants {
    pub warrior: CombatantStats,
    pub mage: CombatantStats,
    pub archer: CombatantStats,
    pub paladin: CombatantStats,
    pub opponent: CombatantStats,
    pub abilities: AbilityConstants,
    pub opponent_ai: OpponentAiConstants,
}

impl Default for ArenaConstants {
    fn default() -> Self {
        ArenaConstants {
            warrior: CombatantStats::new(100, DamageRange::new(15, 25)),
            mage: CombatantStats::new(80, DamageRange::new(20, 30)),
            archer: CombatantStats::new(90, DamageRange::new(12, 22)),
            paladin: CombatantStats::new(110, DamageRange::new(10, 20)),
            opponent: CombatantStats::new(120, DamageRange::new(18, 28)),
            abilities: AbilityConstants::default(),
            opponent_ai: OpponentAiConstants::default(),
        }
    }
}

impl ArenaConstants {
    /// Load and validate constants from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let constants: ArenaConstants = super::load_toml(path)?;
        constants.validate().map_err(|e| e.at(path))?;
        Ok(constants)
    }

    /// Parse and validate constants from a TOML string
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        let constants: ArenaConstants = super::parse_toml(toml)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Stats for a player class
    pub fn class_stats(&self, class: PlayerClass) -> &CombatantStats {
        match class {
            PlayerClass::Warrior => &self.warrior,
            PlayerClass::Mage => &self.mage,
            PlayerClass::Archer => &self.archer,
            PlayerClass::Paladin => &self.paladin,
        }
    }

    /// Check that every range is ordered and every pool is non-empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        for class in PlayerClass::all() {
            self.class_stats(*class).validate(&class.name().to_lowercase())?;
        }
        self.opponent.validate("opponent")?;

        let abilities = &self.abilities;
        check_range("abilities.fireball_damage", abilities.fireball_damage)?;
        check_range("abilities.quick_shot_damage", abilities.quick_shot_damage)?;
        check_range("abilities.holy_strike_damage", abilities.holy_strike_damage)?;
        if abilities.quick_shot_arrows == 0 {
            return Err(invalid("abilities.quick_shot_arrows must be at least 1"));
        }

        let ai = &self.opponent_ai;
        check_range("opponent_ai.regeneration", ai.regeneration)?;
        check_range("opponent_ai.special_attack_damage", ai.special_attack_damage)?;
        if !(0.0..=1.0).contains(&ai.special_attack_chance) {
            return Err(invalid(format!(
                "opponent_ai.special_attack_chance must be within [0, 1], got {}",
                ai.special_attack_chance
            )));
        }

        Ok(())
    }
}

/// Health pool and attack range for one combatant variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantStats {
    pub max_health: u32,
    pub attack_range: DamageRange,
}

impl CombatantStats {
    pub fn new(max_health: u32, attack_range: DamageRange) -> Self {
        CombatantStats {
            max_health,
            attack_range,
        }
    }

    fn validate(&self, section: &str) -> Result<(), ConfigError> {
        if self.max_health == 0 {
            return Err(invalid(format!("{section}.max_health must be positive")));
        }
        check_range(&format!("{section}.attack_range"), self.attack_range)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityConstants {
    /// Amount restored by the basic Heal action
    #[serde(default = "default_heal_amount")]
    pub heal_amount: u32,
    /// Mage Fireball damage
    #[serde(default = "default_fireball_damage")]
    pub fireball_damage: DamageRange,
    /// Mage Mana Shield self-heal
    #[serde(default = "default_mana_shield_heal")]
    pub mana_shield_heal: u32,
    /// Damage of each Archer Quick Shot arrow
    #[serde(default = "default_quick_shot_damage")]
    pub quick_shot_damage: DamageRange,
    /// Arrows fired by one Quick Shot
    #[serde(default = "default_quick_shot_arrows")]
    pub quick_shot_arrows: u32,
    /// Paladin Holy Strike damage
    #[serde(default = "default_holy_strike_damage")]
    pub holy_strike_damage: DamageRange,
}

impl Default for AbilityConstants {
    fn default() -> Self {
        AbilityConstants {
            heal_amount: default_heal_amount(),
            fireball_damage: default_fireball_damage(),
            mana_shield_heal: default_mana_shield_heal(),
            quick_shot_damage: default_quick_shot_damage(),
            quick_shot_arrows: default_quick_shot_arrows(),
            holy_strike_damage: default_holy_strike_damage(),
        }
    }
}

fn default_heal_amount() -> u32 {
    20
}
fn default_fireball_damage() -> DamageRange {
    DamageRange::new(35, 50)
}
fn default_mana_shield_heal() -> u32 {
    25
}
fn default_quick_shot_damage() -> DamageRange {
    DamageRange::new(8, 14)
}
fn default_quick_shot_arrows() -> u32 {
    2
}
fn default_holy_strike_damage() -> DamageRange {
    DamageRange::new(25, 35)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpponentAiConstants {
    /// Health regenerated at the start of every opponent turn
    #[serde(default = "default_regeneration")]
    pub regeneration: DamageRange,
    /// Chance that the opponent uses Dark Blast instead of attacking
    #[serde(default = "default_special_attack_chance")]
    pub special_attack_chance: f64,
    /// Dark Blast damage
    #[serde(default = "default_special_attack_damage")]
    pub special_attack_damage: DamageRange,
}

impl Default for OpponentAiConstants {
    fn default() -> Self {
        OpponentAiConstants {
            regeneration: default_regeneration(),
            special_attack_chance: default_special_attack_chance(),
            special_attack_damage: default_special_attack_damage(),
        }
    }
}

fn default_regeneration() -> DamageRange {
    DamageRange::new(8, 18)
}
fn default_special_attack_chance() -> f64 {
    0.3
}
fn default_special_attack_damage() -> DamageRange {
    DamageRange::new(30, 40)
}

fn check_range(field: &str, range: DamageRange) -> Result<(), ConfigError> {
    if range.is_valid() {
        Ok(())
    } else {
        Err(invalid(format!(
            "{field} minimum {} exceeds maximum {}",
            range.min, range.max
        )))
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Validation {
        message: message.into(),
        path: None,
    }
}
