//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Core types
pub use crate::combatant::{Combatant, CombatantKind, StatSnapshot};
pub use crate::types::{DamageRange, Mitigation, PlayerClass};

// Combat results
pub use crate::abilities::{AbilityOutcome, AbilitySlot};
pub use crate::combat::{AttackResult, DamageTaken, HealOutcome, Strike};
pub use crate::opponent::{OpponentAction, OpponentTurn};

// Game loop
pub use crate::battle::{
    choose_class, Battle, BattleError, BattleState, BattleSummary, ChoiceSource, Outcome,
    PlayerAction, Reporter,
};
pub use crate::events::BattleEvent;

// Config
pub use crate::config::{ArenaConstants, ConfigError};

// Randomness
pub use crate::dice::{random_seed, Dice, RngDice, SeededDice};
