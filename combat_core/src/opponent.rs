//! Opponent AI policy
//!
//! Every opponent turn runs two steps in a fixed order:
//! 1. Regenerate: heal self by a roll of the regeneration range
//! 2. Attack: one fraction roll decides between Dark Blast (a fixed-range hit
//!    that ignores the opponent's attack range) and a basic attack
//!
//! Both steps always run, whatever the opponent's health.

use crate::combat::{deliver, AttackResult, HealOutcome, Strike};
use crate::combatant::Combatant;
use crate::config::OpponentAiConstants;
use crate::dice::Dice;
use serde::Serialize;

/// Everything the opponent did on one turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpponentTurn {
    /// Rolled regeneration amount
    pub regeneration: u32,
    pub heal: HealOutcome,
    pub action: OpponentAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpponentAction {
    DarkBlast(Strike),
    Attack(AttackResult),
}

impl OpponentAction {
    pub fn strike(&self) -> &Strike {
        match self {
            OpponentAction::DarkBlast(strike) => strike,
            OpponentAction::Attack(result) => &result.strike,
        }
    }
}

/// Run one opponent turn against `player`
pub fn take_opponent_turn(
    ai: &OpponentAiConstants,
    opponent: &mut Combatant,
    player: &mut Combatant,
    dice: &mut impl Dice,
) -> OpponentTurn {
    let regeneration = dice.roll(ai.regeneration);
    let heal = opponent.heal(regeneration);

    let roll = dice.fraction();
    let special = roll < ai.special_attack_chance;
    tracing::debug!(roll, special, "opponent attack roll");

    let action = if special {
        let damage = dice.roll(ai.special_attack_damage);
        OpponentAction::DarkBlast(deliver(opponent.name(), player, damage))
    } else {
        OpponentAction::Attack(opponent.attack(player, dice))
    };

    OpponentTurn {
        regeneration,
        heal,
        action,
    }
}
