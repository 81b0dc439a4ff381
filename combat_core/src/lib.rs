//! combat_core - Turn-based battle engine for the arena
//!
//! This library provides:
//! - Combatant: health, attack range and per-class status flags
//! - Abilities: two class abilities per player variant, plus the Mage end-of-turn hook
//! - Opponent AI: regeneration followed by a basic attack or Dark Blast
//! - Battle: the turn resolver and round loop, driven through `ChoiceSource` and `Reporter`
//! - Dice: seedable randomness behind every roll
//! - ArenaConstants: tunable stats loaded from TOML
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use combat_core::prelude::*;
//!
//! let constants = ArenaConstants::load_from_path(Path::new("arena.toml"))?;
//! let mut battle = Battle::new(PlayerClass::Mage, constants, SeededDice::seeded(42));
//!
//! let mut events: Vec<BattleEvent> = Vec::new();
//! let outcome = battle.run(&mut console_input, &mut events)?;
//! for event in &events {
//!     println!("{event}");
//! }
//! ```

pub mod abilities;
pub mod battle;
pub mod combat;
pub mod combatant;
pub mod config;
pub mod dice;
pub mod events;
pub mod opponent;
pub mod prelude;
pub mod types;

#[cfg(test)]
mod test_support;

// Core API - what most users need
pub use battle::{choose_class, Battle, BattleError, BattleSummary, Outcome};
pub use combatant::Combatant;
pub use events::BattleEvent;
pub use types::PlayerClass;

// Collaborators
pub use battle::{ChoiceSource, Reporter};

// Configuration and randomness
pub use config::{ArenaConstants, ConfigError};
pub use dice::{random_seed, Dice, SeededDice};
