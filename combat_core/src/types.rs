//! Core types shared across the combat engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Playable character classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerClass {
    Warrior,
    Mage,
    Archer,
    Paladin,
}

impl PlayerClass {
    /// Get all classes in menu order
    pub fn all() -> &'static [PlayerClass] {
        &[
            PlayerClass::Warrior,
            PlayerClass::Mage,
            PlayerClass::Archer,
            PlayerClass::Paladin,
        ]
    }

    /// Map a class menu entry ("1".."4") to a class
    pub fn from_menu_choice(choice: &str) -> Option<PlayerClass> {
        match choice.trim() {
            "1" => Some(PlayerClass::Warrior),
            "2" => Some(PlayerClass::Mage),
            "3" => Some(PlayerClass::Archer),
            "4" => Some(PlayerClass::Paladin),
            _ => None,
        }
    }

    /// Display name, also used as the combatant name
    pub fn name(&self) -> &'static str {
        match self {
            PlayerClass::Warrior => "Warrior",
            PlayerClass::Mage => "Mage",
            PlayerClass::Archer => "Archer",
            PlayerClass::Paladin => "Paladin",
        }
    }
}

impl fmt::Display for PlayerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive integer range for damage and healing rolls
///
/// Serialized as a two element array: `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct DamageRange {
    pub min: u32,
    pub max: u32,
}

impl DamageRange {
    pub const fn new(min: u32, max: u32) -> Self {
        DamageRange { min, max }
    }

    /// A range that always rolls `value`
    pub const fn fixed(value: u32) -> Self {
        DamageRange {
            min: value,
            max: value,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl From<[u32; 2]> for DamageRange {
    fn from([min, max]: [u32; 2]) -> Self {
        DamageRange { min, max }
    }
}

impl From<DamageRange> for [u32; 2] {
    fn from(range: DamageRange) -> Self {
        [range.min, range.max]
    }
}

impl fmt::Display for DamageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// One-shot effects that fully negate a single incoming hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mitigation {
    /// Warrior's Shield Block
    ShieldBlock,
    /// Archer's Evade
    Evade,
    /// Paladin's Divine Shield
    DivineShield,
}

impl fmt::Display for Mitigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mitigation::ShieldBlock => write!(f, "Shield Block"),
            Mitigation::Evade => write!(f, "Evade"),
            Mitigation::DivineShield => write!(f, "Divine Shield"),
        }
    }
}
