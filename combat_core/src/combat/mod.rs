//! Combat resolution - incoming damage, mitigation and results

mod resolution;
mod result;

pub(crate) use resolution::{deliver, resolve_incoming};
pub use result::{AttackResult, DamageTaken, HealOutcome, Strike};

#[cfg(test)]
mod tests {
    use crate::config::ArenaConstants;
    use crate::types::PlayerClass;
    use crate::Combatant;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Damage(u32),
        Heal(u32),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u32..300).prop_map(Op::Damage),
            (0u32..300).prop_map(Op::Heal),
        ]
    }

    fn any_combatant() -> impl Strategy<Value = Combatant> {
        let constants = ArenaConstants::default();
        prop_oneof![
            Just(Combatant::player(PlayerClass::Warrior, &constants)),
            Just(Combatant::player(PlayerClass::Mage, &constants)),
            Just(Combatant::player(PlayerClass::Archer, &constants)),
            Just(Combatant::player(PlayerClass::Paladin, &constants)),
            Just(Combatant::opponent(&constants)),
        ]
    }

    proptest! {
        #[test]
        fn health_stays_within_bounds(
            mut combatant in any_combatant(),
            ops in prop::collection::vec(op(), 0..64),
        ) {
            for op in ops {
                match op {
                    Op::Damage(amount) => { combatant.take_damage(amount); }
                    Op::Heal(amount) => { combatant.heal(amount); }
                }
                prop_assert!(combatant.health() <= combatant.max_health());
            }
        }

        #[test]
        fn heal_is_no_op_only_at_full_health(
            mut combatant in any_combatant(),
            damage in 0u32..200,
            amount in 0u32..200,
        ) {
            combatant.take_damage(damage);
            let before = combatant.health();
            let was_full = before == combatant.max_health();

            let outcome = combatant.heal(amount);

            prop_assert_eq!(outcome.is_no_op(), was_full);
            if was_full {
                prop_assert_eq!(combatant.health(), before);
            } else {
                prop_assert_eq!(
                    combatant.health(),
                    combatant.max_health().min(before + amount)
                );
            }
        }
    }
}
