//! Damage resolution - apply one incoming hit to a combatant

use super::result::{DamageTaken, Strike};
use crate::combatant::{consume, Combatant, CombatantKind, Health};
use crate::types::Mitigation;

/// Resolve an incoming hit against a defender
///
/// Resolution order:
/// 1. If the defender holds a one-shot mitigation flag, consume it and stop
/// 2. Otherwise subtract the damage from health, clamped at zero
///
/// Only the first hit after a flag is set is mitigated; a second hit in the
/// same turn lands normally.
pub(crate) fn resolve_incoming(
    kind: &mut CombatantKind,
    health: &mut Health,
    amount: u32,
) -> DamageTaken {
    if let Some(mitigation) = consume_mitigation(kind) {
        tracing::debug!(defender = kind.name(), %mitigation, amount, "hit mitigated");
        return DamageTaken::Mitigated(mitigation);
    }

    let health_after = health.lose(amount);
    DamageTaken::Applied {
        amount,
        health_after,
    }
}

/// Consume the defender's mitigation flag if one is set
fn consume_mitigation(kind: &mut CombatantKind) -> Option<Mitigation> {
    match kind {
        CombatantKind::Warrior(status) => {
            consume(&mut status.shield_block).then_some(Mitigation::ShieldBlock)
        }
        CombatantKind::Archer(status) => consume(&mut status.evade).then_some(Mitigation::Evade),
        CombatantKind::Paladin(status) => {
            consume(&mut status.divine_shield).then_some(Mitigation::DivineShield)
        }
        CombatantKind::Mage(_) | CombatantKind::Opponent => None,
    }
}

/// Hit `target` for a fixed amount on behalf of `attacker`
///
/// Used by abilities and the opponent's special attack, which bypass the
/// attacker's own attack range but still go through the target's mitigation.
pub(crate) fn deliver(attacker: &'static str, target: &mut Combatant, damage: u32) -> Strike {
    let taken = target.take_damage(damage);
    Strike {
        attacker,
        target: target.name(),
        damage,
        taken,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArenaConstants;
    use crate::types::PlayerClass;

    fn player(class: PlayerClass) -> Combatant {
        Combatant::player(class, &ArenaConstants::default())
    }

    #[test]
    fn test_basic_damage() {
        let mut mage = player(PlayerClass::Mage);
        let taken = mage.take_damage(30);
        assert_eq!(
            taken,
            DamageTaken::Applied {
                amount: 30,
                health_after: 50
            }
        );
        assert_eq!(mage.health(), 50);
    }

    #[test]
    fn test_overkill_clamps_to_zero() {
        let mut mage = player(PlayerClass::Mage);
        let taken = mage.take_damage(500);
        assert!(taken.is_killing_blow());
        assert_eq!(mage.health(), 0);
    }

    #[test]
    fn test_shield_block_blocks_exactly_once() {
        let mut warrior = player(PlayerClass::Warrior);
        if let CombatantKind::Warrior(status) = &mut warrior.kind {
            status.shield_block = true;
        }

        assert_eq!(
            warrior.take_damage(40),
            DamageTaken::Mitigated(Mitigation::ShieldBlock)
        );
        assert_eq!(warrior.health(), 100);

        assert_eq!(warrior.take_damage(40).amount(), 40);
        assert_eq!(warrior.health(), 60);
    }

    #[test]
    fn test_evade_blocks_exactly_once() {
        let mut archer = player(PlayerClass::Archer);
        if let CombatantKind::Archer(status) = &mut archer.kind {
            status.evade = true;
        }

        assert!(archer.take_damage(25).was_mitigated());
        assert!(!archer.take_damage(25).was_mitigated());
        assert!(!archer.take_damage(25).was_mitigated());
        assert_eq!(archer.health(), 40);
    }

    #[test]
    fn test_divine_shield_blocks_exactly_once() {
        let mut paladin = player(PlayerClass::Paladin);
        if let CombatantKind::Paladin(status) = &mut paladin.kind {
            status.divine_shield = true;
        }

        assert_eq!(
            paladin.take_damage(35),
            DamageTaken::Mitigated(Mitigation::DivineShield)
        );
        assert!(matches!(paladin.kind, CombatantKind::Paladin(s) if !s.divine_shield));
        assert_eq!(paladin.take_damage(35).amount(), 35);
        assert_eq!(paladin.health(), 75);
    }

    #[test]
    fn test_mage_and_opponent_have_no_mitigation() {
        let mut mage = player(PlayerClass::Mage);
        let mut opponent = Combatant::opponent(&ArenaConstants::default());
        assert!(!mage.take_damage(10).was_mitigated());
        assert!(!opponent.take_damage(10).was_mitigated());
    }

    #[test]
    fn test_deliver_reports_names() {
        let mut archer = player(PlayerClass::Archer);
        let strike = deliver("Evil Wizard", &mut archer, 33);
        assert_eq!(strike.attacker, "Evil Wizard");
        assert_eq!(strike.target, "Archer");
        assert_eq!(strike.damage, 33);
        assert_eq!(archer.health(), 57);
    }
}
