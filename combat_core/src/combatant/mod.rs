//! Combatant - a fighter in the arena
//!
//! A combatant is one struct for every variant. Behaviour that differs
//! between classes (attack overrides, mitigation, abilities) is selected by
//! matching on [`CombatantKind`], which also carries the class's status flags.

mod health;
mod status;

pub use health::Health;
pub use status::{ArcherStatus, MageStatus, PaladinStatus, WarriorStatus};

pub(crate) use status::consume;

use crate::combat::{deliver, resolve_incoming, AttackResult, DamageTaken, HealOutcome};
use crate::config::{ArenaConstants, CombatantStats};
use crate::dice::Dice;
use crate::types::{DamageRange, PlayerClass};
use serde::Serialize;
use std::fmt;

/// Name of the computer-controlled opponent
pub const OPPONENT_NAME: &str = "Evil Wizard";

/// Variant of a combatant, with its class-specific status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatantKind {
    Warrior(WarriorStatus),
    Mage(MageStatus),
    Archer(ArcherStatus),
    Paladin(PaladinStatus),
    Opponent,
}

impl CombatantKind {
    /// Fresh status for a player class
    pub fn for_class(class: PlayerClass) -> Self {
        match class {
            PlayerClass::Warrior => CombatantKind::Warrior(WarriorStatus::default()),
            PlayerClass::Mage => CombatantKind::Mage(MageStatus::default()),
            PlayerClass::Archer => CombatantKind::Archer(ArcherStatus::default()),
            PlayerClass::Paladin => CombatantKind::Paladin(PaladinStatus::default()),
        }
    }

    /// The player class, or `None` for the opponent
    pub fn class(&self) -> Option<PlayerClass> {
        match self {
            CombatantKind::Warrior(_) => Some(PlayerClass::Warrior),
            CombatantKind::Mage(_) => Some(PlayerClass::Mage),
            CombatantKind::Archer(_) => Some(PlayerClass::Archer),
            CombatantKind::Paladin(_) => Some(PlayerClass::Paladin),
            CombatantKind::Opponent => None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.class().map_or(OPPONENT_NAME, |class| class.name())
    }
}

/// Read-only view of a combatant's health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatSnapshot {
    pub name: &'static str,
    pub health: u32,
    pub max_health: u32,
}

impl fmt::Display for StatSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | HP: {}/{}", self.name, self.health, self.max_health)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combatant {
    pub(crate) kind: CombatantKind,
    pub(crate) health: Health,
    pub(crate) attack_range: DamageRange,
}

impl Combatant {
    /// Create a combatant at full health
    pub fn new(kind: CombatantKind, stats: &CombatantStats) -> Self {
        Combatant {
            kind,
            health: Health::full(stats.max_health),
            attack_range: stats.attack_range,
        }
    }

    /// Create the player's combatant for `class`
    pub fn player(class: PlayerClass, constants: &ArenaConstants) -> Self {
        Self::new(CombatantKind::for_class(class), constants.class_stats(class))
    }

    /// Create the opponent
    pub fn opponent(constants: &ArenaConstants) -> Self {
        Self::new(CombatantKind::Opponent, &constants.opponent)
    }

    /// Start from a specific health value (clamped to max)
    pub fn with_health(mut self, health: u32) -> Self {
        self.health.set(health);
        self
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn kind(&self) -> &CombatantKind {
        &self.kind
    }

    pub fn class(&self) -> Option<PlayerClass> {
        self.kind.class()
    }

    pub fn health(&self) -> u32 {
        self.health.current()
    }

    pub fn max_health(&self) -> u32 {
        self.health.max()
    }

    pub fn attack_range(&self) -> DamageRange {
        self.attack_range
    }

    pub fn is_alive(&self) -> bool {
        !self.health.is_depleted()
    }

    pub fn show_stats(&self) -> StatSnapshot {
        StatSnapshot {
            name: self.name(),
            health: self.health.current(),
            max_health: self.health.max(),
        }
    }

    /// Heal by `amount`, capped at max health; no-op when already full
    pub fn heal(&mut self, amount: u32) -> HealOutcome {
        self.health.restore(amount)
    }

    /// Apply one incoming hit, honouring this combatant's mitigation flags
    pub fn take_damage(&mut self, amount: u32) -> DamageTaken {
        resolve_incoming(&mut self.kind, &mut self.health, amount)
    }

    /// Basic attack: roll the attack range and hit `target`
    ///
    /// A Warrior with Berserk set deals double damage and clears the flag.
    pub fn attack(&mut self, target: &mut Combatant, dice: &mut impl Dice) -> AttackResult {
        let mut damage = dice.roll(self.attack_range);

        let berserk = match &mut self.kind {
            CombatantKind::Warrior(status) => consume(&mut status.berserk),
            _ => false,
        };
        if berserk {
            damage = damage.saturating_mul(2);
            tracing::debug!(attacker = self.name(), damage, "berserk consumed");
        }

        AttackResult {
            strike: deliver(self.name(), target, damage),
            berserk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MaxDice, ScriptedDice};
    use crate::types::Mitigation;

    fn constants() -> ArenaConstants {
        ArenaConstants::default()
    }

    #[test]
    fn test_default_stats() {
        let c = constants();
        let expected = [
            (PlayerClass::Warrior, 100, DamageRange::new(15, 25)),
            (PlayerClass::Mage, 80, DamageRange::new(20, 30)),
            (PlayerClass::Archer, 90, DamageRange::new(12, 22)),
            (PlayerClass::Paladin, 110, DamageRange::new(10, 20)),
        ];
        for (class, max_health, range) in expected {
            let player = Combatant::player(class, &c);
            assert_eq!(player.name(), class.name());
            assert_eq!(player.health(), max_health);
            assert_eq!(player.max_health(), max_health);
            assert_eq!(player.attack_range(), range);
        }

        let opponent = Combatant::opponent(&c);
        assert_eq!(opponent.name(), "Evil Wizard");
        assert_eq!(opponent.max_health(), 120);
        assert_eq!(opponent.attack_range(), DamageRange::new(18, 28));
        assert_eq!(opponent.class(), None);
    }

    #[test]
    fn test_attack_rolls_range_and_damages_target() {
        let c = constants();
        let mut mage = Combatant::player(PlayerClass::Mage, &c);
        let mut opponent = Combatant::opponent(&c);

        let result = mage.attack(&mut opponent, &mut MaxDice::default());

        assert_eq!(result.strike.damage, 30);
        assert_eq!(result.strike.attacker, "Mage");
        assert_eq!(result.strike.target, "Evil Wizard");
        assert!(!result.berserk);
        assert_eq!(opponent.health(), 90);
    }

    #[test]
    fn test_berserk_doubles_next_attack_only() {
        let c = constants();
        let mut warrior = Combatant::player(PlayerClass::Warrior, &c);
        let mut opponent = Combatant::opponent(&c);
        if let CombatantKind::Warrior(status) = &mut warrior.kind {
            status.berserk = true;
        }

        let mut dice = ScriptedDice::rolls([20, 20]);
        let first = warrior.attack(&mut opponent, &mut dice);
        assert!(first.berserk);
        assert_eq!(first.strike.damage, 40);
        assert_eq!(opponent.health(), 80);

        let second = warrior.attack(&mut opponent, &mut dice);
        assert!(!second.berserk);
        assert_eq!(second.strike.damage, 20);
        assert_eq!(opponent.health(), 60);
    }

    #[test]
    fn test_attack_against_shielded_target() {
        let c = constants();
        let mut opponent = Combatant::opponent(&c);
        let mut paladin = Combatant::player(PlayerClass::Paladin, &c);
        if let CombatantKind::Paladin(status) = &mut paladin.kind {
            status.divine_shield = true;
        }

        let result = opponent.attack(&mut paladin, &mut MaxDice::default());

        assert_eq!(result.strike.damage, 28);
        assert_eq!(result.strike.taken, DamageTaken::Mitigated(Mitigation::DivineShield));
        assert_eq!(paladin.health(), 110);
    }

    #[test]
    fn test_is_alive() {
        let c = constants();
        let mut archer = Combatant::player(PlayerClass::Archer, &c);
        assert!(archer.is_alive());
        archer.take_damage(89);
        assert!(archer.is_alive());
        archer.take_damage(1);
        assert!(!archer.is_alive());
    }

    #[test]
    fn test_show_stats_does_not_mutate() {
        let c = constants();
        let warrior = Combatant::player(PlayerClass::Warrior, &c).with_health(42);
        let before = warrior.clone();

        let stats = warrior.show_stats();

        assert_eq!(stats.to_string(), "Warrior | HP: 42/100");
        assert_eq!(warrior, before);
    }

    #[test]
    fn test_with_health_clamps_to_max() {
        let c = constants();
        let mage = Combatant::player(PlayerClass::Mage, &c).with_health(1000);
        assert_eq!(mage.health(), 80);
    }
}
