//! Combat results - what happened when damage or healing was applied

use crate::types::Mitigation;
use serde::Serialize;

/// Outcome of one incoming damage application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageTaken {
    /// A one-shot mitigation absorbed the whole hit and was consumed
    Mitigated(Mitigation),
    /// Damage was subtracted from health
    Applied { amount: u32, health_after: u32 },
}

impl DamageTaken {
    /// Damage that actually reached health
    pub fn amount(&self) -> u32 {
        match self {
            DamageTaken::Mitigated(_) => 0,
            DamageTaken::Applied { amount, .. } => *amount,
        }
    }

    pub fn was_mitigated(&self) -> bool {
        matches!(self, DamageTaken::Mitigated(_))
    }

    /// Whether this hit brought the defender to zero health
    pub fn is_killing_blow(&self) -> bool {
        matches!(self, DamageTaken::Applied { health_after: 0, .. })
    }
}

/// Outcome of a heal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealOutcome {
    /// Health was already at maximum; nothing changed
    AlreadyFull,
    /// `amount` is the requested heal, which may exceed what was restored
    Healed {
        amount: u32,
        health_after: u32,
        max_health: u32,
    },
}

impl HealOutcome {
    pub fn is_no_op(&self) -> bool {
        matches!(self, HealOutcome::AlreadyFull)
    }
}

/// One damaging hit from an attacker to a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Strike {
    pub attacker: &'static str,
    pub target: &'static str,
    /// Damage rolled before the target's mitigation
    pub damage: u32,
    pub taken: DamageTaken,
}

/// Result of a basic attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttackResult {
    pub strike: Strike,
    /// Berserk was consumed and doubled this attack
    pub berserk: bool,
}
