//! Shared test doubles for the battle test suites.
//! Dice with known outcomes and a scripted player, so tests never depend on a seed.

use std::collections::VecDeque;

use crate::battle::ChoiceSource;
use crate::dice::Dice;
use crate::types::DamageRange;

/// Always rolls the top of every range
pub(crate) struct MaxDice {
    /// Returned by every fraction roll; above the default special chance
    pub fraction: f64,
}

impl Default for MaxDice {
    fn default() -> Self {
        MaxDice { fraction: 0.99 }
    }
}

impl Dice for MaxDice {
    fn roll(&mut self, range: DamageRange) -> u32 {
        range.max
    }

    fn fraction(&mut self) -> f64 {
        self.fraction
    }
}

/// Replays queued rolls in order, panicking when a roll is out of range or missing
pub(crate) struct ScriptedDice {
    rolls: VecDeque<u32>,
    fractions: VecDeque<f64>,
}

impl ScriptedDice {
    pub fn new(
        rolls: impl IntoIterator<Item = u32>,
        fractions: impl IntoIterator<Item = f64>,
    ) -> Self {
        ScriptedDice {
            rolls: rolls.into_iter().collect(),
            fractions: fractions.into_iter().collect(),
        }
    }

    pub fn rolls(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self::new(rolls, std::iter::empty())
    }

    pub fn is_exhausted(&self) -> bool {
        self.rolls.is_empty() && self.fractions.is_empty()
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, range: DamageRange) -> u32 {
        let value = self
            .rolls
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted roll left for range {range}"));
        assert!(
            range.contains(value),
            "scripted roll {value} outside range {range}"
        );
        value
    }

    fn fraction(&mut self) -> f64 {
        self.fractions
            .pop_front()
            .expect("no scripted fraction left")
    }
}

/// Feeds queued menu answers and records every prompt shown
#[derive(Default)]
pub(crate) struct ScriptedChoices {
    inputs: VecDeque<String>,
    pub prompts: Vec<String>,
}

impl ScriptedChoices {
    pub fn new<'a>(inputs: impl IntoIterator<Item = &'a str>) -> Self {
        ScriptedChoices {
            inputs: inputs.into_iter().map(str::to_string).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl ChoiceSource for ScriptedChoices {
    fn prompt_choice(&mut self, menu: &str) -> Option<String> {
        self.prompts.push(menu.to_string());
        self.inputs.pop_front()
    }
}
