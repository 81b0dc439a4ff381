//! Battle events - everything the game reports, with its narrative text
//!
//! Each event renders to the line(s) shown to the player through `Display`.

use crate::abilities::AbilityOutcome;
use crate::combat::{AttackResult, DamageTaken, HealOutcome, Strike};
use crate::combatant::StatSnapshot;
use crate::opponent::OpponentAction;
use crate::types::Mitigation;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    Welcome,
    /// Unrecognised class choice; Warrior was selected
    ClassDefaulted,
    RoundStarted {
        round: u32,
    },
    Stats(StatSnapshot),
    /// Unrecognised action choice; the player is asked again
    InvalidAction,
    Attack(AttackResult),
    Heal {
        name: &'static str,
        outcome: HealOutcome,
    },
    Ability {
        name: &'static str,
        outcome: AbilityOutcome,
    },
    OpponentTurnStarted {
        name: &'static str,
    },
    Regenerated {
        name: &'static str,
        amount: u32,
        heal: HealOutcome,
    },
    OpponentAttack(OpponentAction),
    Victory {
        opponent: &'static str,
    },
    Defeat {
        opponent: &'static str,
    },
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleEvent::Welcome => write!(f, "=== Welcome to the Battle Arena! ==="),
            BattleEvent::ClassDefaulted => write!(f, "Invalid choice, defaulting to Warrior."),
            BattleEvent::RoundStarted { round } => write!(f, "\n--- Turn {round} ---"),
            BattleEvent::Stats(stats) => write!(f, "{stats}"),
            BattleEvent::InvalidAction => write!(f, "Invalid action. Try again."),
            BattleEvent::Attack(result) => write_attack(f, result),
            BattleEvent::Heal { name, outcome } => write_heal(f, name, outcome),
            BattleEvent::Ability { name, outcome } => write_ability(f, name, outcome),
            BattleEvent::OpponentTurnStarted { name } => write!(f, "\n{name}'s turn!"),
            BattleEvent::Regenerated { name, amount, heal } => {
                write_heal(f, name, heal)?;
                write!(f, "\n{name} regenerates {amount} HP!")
            }
            BattleEvent::OpponentAttack(OpponentAction::DarkBlast(strike)) => {
                write!(
                    f,
                    "{} uses Dark Blast for {} damage!",
                    strike.attacker, strike.damage
                )?;
                write_taken(f, strike)
            }
            BattleEvent::OpponentAttack(OpponentAction::Attack(result)) => write_attack(f, result),
            BattleEvent::Victory { opponent } => {
                write!(f, "\nCongratulations! You have defeated the {opponent}!")
            }
            BattleEvent::Defeat { opponent } => {
                write!(f, "\nYou have been defeated by the {opponent}. Game Over.")
            }
        }
    }
}

fn write_attack(f: &mut fmt::Formatter<'_>, result: &AttackResult) -> fmt::Result {
    let strike = &result.strike;
    if result.berserk {
        writeln!(f, "Berserk activated! Double damage!")?;
    }
    write!(
        f,
        "{} attacks {} for {} damage!",
        strike.attacker, strike.target, strike.damage
    )?;
    write_taken(f, strike)
}

fn write_heal(f: &mut fmt::Formatter<'_>, name: &str, outcome: &HealOutcome) -> fmt::Result {
    match outcome {
        HealOutcome::AlreadyFull => write!(f, "{name} is already at maximum health!"),
        HealOutcome::Healed {
            amount,
            health_after,
            max_health,
        } => write!(
            f,
            "{name} heals for {amount} HP! (Current HP: {health_after}/{max_health})"
        ),
    }
}

fn write_ability(f: &mut fmt::Formatter<'_>, name: &str, outcome: &AbilityOutcome) -> fmt::Result {
    match outcome {
        AbilityOutcome::Berserk => {
            write!(f, "{name} uses Berserk! Next attack will deal double damage.")
        }
        AbilityOutcome::ShieldBlock => {
            write!(f, "{name} uses Shield Block! Blocks the next attack.")
        }
        AbilityOutcome::Fireball(strike) => {
            write!(
                f,
                "{name} casts Fireball on {} for {} damage!",
                strike.target, strike.damage
            )?;
            write_taken(f, strike)
        }
        AbilityOutcome::FireballRecharging => write!(f, "Fireball is recharging!"),
        AbilityOutcome::ManaShield(heal) => {
            writeln!(f, "{name} uses Mana Shield to heal!")?;
            write_heal(f, name, heal)
        }
        AbilityOutcome::QuickShot(arrows) => {
            write!(f, "{name} uses Quick Shot! {} arrows fired!", arrows.len())?;
            for arrow in arrows {
                write!(
                    f,
                    "\n  Arrow hits {} for {} damage!",
                    arrow.target, arrow.damage
                )?;
                write_taken(f, arrow)?;
            }
            Ok(())
        }
        AbilityOutcome::Evade => write!(f, "{name} prepares to evade the next attack!"),
        AbilityOutcome::HolyStrike(strike) => {
            write!(
                f,
                "{name} uses Holy Strike on {} for {} damage!",
                strike.target, strike.damage
            )?;
            write_taken(f, strike)
        }
        AbilityOutcome::DivineShield => {
            write!(f, "{name} uses Divine Shield! Blocks the next attack.")
        }
        AbilityOutcome::Unavailable => write!(f, "{name} has no ability in that slot."),
    }
}

/// Append the mitigation line when a strike was absorbed
fn write_taken(f: &mut fmt::Formatter<'_>, strike: &Strike) -> fmt::Result {
    match strike.taken {
        DamageTaken::Applied { .. } => Ok(()),
        DamageTaken::Mitigated(Mitigation::ShieldBlock) => {
            write!(f, "\nShield Block activated! No damage taken.")
        }
        DamageTaken::Mitigated(Mitigation::Evade) => {
            write!(f, "\n{} evades the attack! No damage taken.", strike.target)
        }
        DamageTaken::Mitigated(Mitigation::DivineShield) => {
            write!(f, "\nDivine Shield activated! No damage taken.")
        }
    }
}
