//! Per-class one-shot status flags
//!
//! Each flag alters exactly the next qualifying event and is then cleared.
//! Setting a flag that is already set does not stack.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WarriorStatus {
    /// Next attack deals double damage
    pub berserk: bool,
    /// Next incoming hit is blocked
    pub shield_block: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MageStatus {
    /// Fireball can be cast this turn; restored at the end of every Mage turn
    pub fireball_ready: bool,
}

impl Default for MageStatus {
    fn default() -> Self {
        MageStatus {
            fireball_ready: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ArcherStatus {
    /// Next incoming hit is evaded
    pub evade: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PaladinStatus {
    /// Next incoming hit is absorbed
    pub divine_shield: bool,
}

/// Clear a one-shot flag, returning whether it was set
pub(crate) fn consume(flag: &mut bool) -> bool {
    std::mem::take(flag)
}
