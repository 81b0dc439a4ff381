//! Turn resolver and game loop
//!
//! A battle moves through `InBattle { round }` until one side falls. Each
//! round runs in a fixed order:
//!
//! 1. Report the round and both stat lines
//! 2. Resolve one player action (viewing stats or an invalid answer re-prompts)
//! 3. Player end-of-turn hook
//! 4. Opponent dead: player wins
//! 5. Opponent turn
//! 6. Player dead: player loses, otherwise the next round starts

mod action;
mod io;

pub use action::{MenuChoice, PlayerAction, ACTION_MENU, CLASS_MENU};
pub use io::{ChoiceSource, Reporter};

use crate::combatant::{Combatant, StatSnapshot};
use crate::config::ArenaConstants;
use crate::dice::Dice;
use crate::events::BattleEvent;
use crate::opponent::{take_opponent_turn, OpponentTurn};
use crate::types::PlayerClass;
use serde::Serialize;
use thiserror::Error;

/// Error ending a battle early
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("input closed before the battle finished")]
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    PlayerWon,
    PlayerLost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleState {
    InBattle { round: u32 },
    Finished { outcome: Outcome, round: u32 },
}

/// Ask for a class; anything unrecognised picks Warrior
pub fn choose_class(
    input: &mut impl ChoiceSource,
    reporter: &mut impl Reporter,
) -> Result<PlayerClass, BattleError> {
    let choice = input
        .prompt_choice(CLASS_MENU)
        .ok_or(BattleError::InputClosed)?;

    match PlayerClass::from_menu_choice(&choice) {
        Some(class) => Ok(class),
        None => {
            tracing::debug!(choice = choice.trim(), "unrecognised class choice");
            reporter.report(&BattleEvent::ClassDefaulted);
            Ok(PlayerClass::Warrior)
        }
    }
}

/// End-of-battle record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BattleSummary {
    pub class: Option<PlayerClass>,
    /// `None` while the battle is still running
    pub outcome: Option<Outcome>,
    pub rounds: u32,
    pub player: StatSnapshot,
    pub opponent: StatSnapshot,
}

/// One player against the opponent
pub struct Battle<D: Dice> {
    player: Combatant,
    opponent: Combatant,
    constants: ArenaConstants,
    dice: D,
    state: BattleState,
}

impl<D: Dice> Battle<D> {
    pub fn new(class: PlayerClass, constants: ArenaConstants, dice: D) -> Self {
        let player = Combatant::player(class, &constants);
        let opponent = Combatant::opponent(&constants);
        Self::from_combatants(player, opponent, constants, dice)
    }

    /// Start a battle between two existing combatants, at round 1
    pub fn from_combatants(
        player: Combatant,
        opponent: Combatant,
        constants: ArenaConstants,
        dice: D,
    ) -> Self {
        Battle {
            player,
            opponent,
            constants,
            dice,
            state: BattleState::InBattle { round: 1 },
        }
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn opponent(&self) -> &Combatant {
        &self.opponent
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn round(&self) -> u32 {
        match self.state {
            BattleState::InBattle { round } | BattleState::Finished { round, .. } => round,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            BattleState::InBattle { .. } => None,
            BattleState::Finished { outcome, .. } => Some(outcome),
        }
    }

    /// Play rounds until one side falls
    pub fn run(
        &mut self,
        input: &mut impl ChoiceSource,
        reporter: &mut impl Reporter,
    ) -> Result<Outcome, BattleError> {
        tracing::info!(
            player = self.player.name(),
            opponent = self.opponent.name(),
            "battle started"
        );
        loop {
            if let Some(outcome) = self.play_round(input, reporter)? {
                return Ok(outcome);
            }
        }
    }

    /// Play one full round, returning the outcome if the battle ended
    pub fn play_round(
        &mut self,
        input: &mut impl ChoiceSource,
        reporter: &mut impl Reporter,
    ) -> Result<Option<Outcome>, BattleError> {
        let round = match self.state {
            BattleState::InBattle { round } => round,
            BattleState::Finished { outcome, .. } => return Ok(Some(outcome)),
        };

        tracing::info!(
            round,
            player_health = self.player.health(),
            opponent_health = self.opponent.health(),
            "round started"
        );
        reporter.report(&BattleEvent::RoundStarted { round });
        self.report_stats(reporter);

        let action = self.choose_action(input, reporter)?;
        tracing::debug!(round, ?action, "player action");
        let event = self.resolve_player_action(action);
        reporter.report(&event);
        self.player.end_turn();

        if !self.opponent.is_alive() {
            return Ok(Some(self.finish(Outcome::PlayerWon, round, reporter)));
        }

        reporter.report(&BattleEvent::OpponentTurnStarted {
            name: self.opponent.name(),
        });
        let turn = self.resolve_opponent_turn();
        reporter.report(&BattleEvent::Regenerated {
            name: self.opponent.name(),
            amount: turn.regeneration,
            heal: turn.heal,
        });
        reporter.report(&BattleEvent::OpponentAttack(turn.action));

        if !self.player.is_alive() {
            return Ok(Some(self.finish(Outcome::PlayerLost, round, reporter)));
        }

        self.state = BattleState::InBattle { round: round + 1 };
        Ok(None)
    }

    /// Apply one player action to the battle
    pub fn resolve_player_action(&mut self, action: PlayerAction) -> BattleEvent {
        match action {
            PlayerAction::Attack => {
                BattleEvent::Attack(self.player.attack(&mut self.opponent, &mut self.dice))
            }
            PlayerAction::Heal => BattleEvent::Heal {
                name: self.player.name(),
                outcome: self.player.heal(self.constants.abilities.heal_amount),
            },
            PlayerAction::Ability(slot) => BattleEvent::Ability {
                name: self.player.name(),
                outcome: self.player.use_ability(
                    slot,
                    &mut self.opponent,
                    &mut self.dice,
                    &self.constants.abilities,
                ),
            },
        }
    }

    /// Run the opponent's AI turn against the player
    pub fn resolve_opponent_turn(&mut self) -> OpponentTurn {
        take_opponent_turn(
            &self.constants.opponent_ai,
            &mut self.opponent,
            &mut self.player,
            &mut self.dice,
        )
    }

    pub fn summary(&self) -> BattleSummary {
        BattleSummary {
            class: self.player.class(),
            outcome: self.outcome(),
            rounds: self.round(),
            player: self.player.show_stats(),
            opponent: self.opponent.show_stats(),
        }
    }

    fn choose_action(
        &self,
        input: &mut impl ChoiceSource,
        reporter: &mut impl Reporter,
    ) -> Result<PlayerAction, BattleError> {
        loop {
            let choice = input
                .prompt_choice(ACTION_MENU)
                .ok_or(BattleError::InputClosed)?;

            match MenuChoice::parse(&choice) {
                Some(MenuChoice::Act(action)) => return Ok(action),
                Some(MenuChoice::ViewStats) => self.report_stats(reporter),
                None => reporter.report(&BattleEvent::InvalidAction),
            }
        }
    }

    fn report_stats(&self, reporter: &mut impl Reporter) {
        reporter.report(&BattleEvent::Stats(self.player.show_stats()));
        reporter.report(&BattleEvent::Stats(self.opponent.show_stats()));
    }

    fn finish(&mut self, outcome: Outcome, round: u32, reporter: &mut impl Reporter) -> Outcome {
        self.state = BattleState::Finished { outcome, round };
        tracing::info!(
            ?outcome,
            round,
            player_health = self.player.health(),
            opponent_health = self.opponent.health(),
            "battle finished"
        );

        let opponent = self.opponent.name();
        reporter.report(&match outcome {
            Outcome::PlayerWon => BattleEvent::Victory { opponent },
            Outcome::PlayerLost => BattleEvent::Defeat { opponent },
        });
        outcome
    }
}
