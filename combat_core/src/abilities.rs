//! Class abilities and end-of-turn hooks
//!
//! | Class   | Ability 1                          | Ability 2                      |
//! |---------|------------------------------------|--------------------------------|
//! | Warrior | Berserk: next attack deals double  | Shield Block: block next hit   |
//! | Mage    | Fireball: heavy hit, once per turn | Mana Shield: heal self         |
//! | Archer  | Quick Shot: several light arrows   | Evade: dodge next hit          |
//! | Paladin | Holy Strike: heavy hit             | Divine Shield: block next hit  |

use crate::combat::{deliver, HealOutcome, Strike};
use crate::combatant::{Combatant, CombatantKind};
use crate::config::AbilityConstants;
use crate::dice::Dice;
use serde::Serialize;

/// Which of the two ability slots to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilitySlot {
    First,
    Second,
}

/// What an ability did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityOutcome {
    Berserk,
    ShieldBlock,
    Fireball(Strike),
    /// Fireball was already cast this turn
    FireballRecharging,
    ManaShield(HealOutcome),
    QuickShot(Vec<Strike>),
    Evade,
    HolyStrike(Strike),
    DivineShield,
    /// The combatant has nothing in this slot
    Unavailable,
}

impl Combatant {
    /// Use the ability in `slot` against `target`
    pub fn use_ability(
        &mut self,
        slot: AbilitySlot,
        target: &mut Combatant,
        dice: &mut impl Dice,
        abilities: &AbilityConstants,
    ) -> AbilityOutcome {
        let name = self.name();
        let outcome = match (&mut self.kind, slot) {
            (CombatantKind::Warrior(status), AbilitySlot::First) => {
                status.berserk = true;
                AbilityOutcome::Berserk
            }
            (CombatantKind::Warrior(status), AbilitySlot::Second) => {
                status.shield_block = true;
                AbilityOutcome::ShieldBlock
            }
            (CombatantKind::Mage(status), AbilitySlot::First) => {
                if status.fireball_ready {
                    let damage = dice.roll(abilities.fireball_damage);
                    status.fireball_ready = false;
                    AbilityOutcome::Fireball(deliver(name, target, damage))
                } else {
                    AbilityOutcome::FireballRecharging
                }
            }
            (CombatantKind::Mage(_), AbilitySlot::Second) => {
                AbilityOutcome::ManaShield(self.health.restore(abilities.mana_shield_heal))
            }
            (CombatantKind::Archer(_), AbilitySlot::First) => {
                let arrows = (0..abilities.quick_shot_arrows)
                    .map(|_| {
                        let damage = dice.roll(abilities.quick_shot_damage);
                        deliver(name, target, damage)
                    })
                    .collect();
                AbilityOutcome::QuickShot(arrows)
            }
            (CombatantKind::Archer(status), AbilitySlot::Second) => {
                status.evade = true;
                AbilityOutcome::Evade
            }
            (CombatantKind::Paladin(_), AbilitySlot::First) => {
                let damage = dice.roll(abilities.holy_strike_damage);
                AbilityOutcome::HolyStrike(deliver(name, target, damage))
            }
            (CombatantKind::Paladin(status), AbilitySlot::Second) => {
                status.divine_shield = true;
                AbilityOutcome::DivineShield
            }
            (CombatantKind::Opponent, _) => AbilityOutcome::Unavailable,
        };

        tracing::debug!(user = name, ?slot, ?outcome, "ability used");
        outcome
    }

    /// End-of-turn hook for the owner of this turn
    ///
    /// A Mage's Fireball is ready again after every one of its turns, whatever
    /// action was taken. Other variants have nothing to reset.
    pub fn end_turn(&mut self) {
        if let CombatantKind::Mage(status) = &mut self.kind {
            status.fireball_ready = true;
        }
    }
}
