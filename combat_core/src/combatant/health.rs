//! Health pool clamped to `[0, max]`

use crate::combat::HealOutcome;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Health {
    current: u32,
    max: u32,
}

impl Health {
    /// A full health pool
    pub fn full(max: u32) -> Self {
        Health { current: max, max }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_full(&self) -> bool {
        self.current == self.max
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Set current health, clamped to max
    pub fn set(&mut self, current: u32) {
        self.current = current.min(self.max);
    }

    /// Remove `amount`, stopping at zero. Returns health after.
    pub fn lose(&mut self, amount: u32) -> u32 {
        self.current = self.current.saturating_sub(amount);
        self.current
    }

    /// Restore `amount`, capped at max. No-op when already full.
    pub fn restore(&mut self, amount: u32) -> HealOutcome {
        if self.is_full() {
            return HealOutcome::AlreadyFull;
        }
        self.current = self.current.saturating_add(amount).min(self.max);
        HealOutcome::Healed {
            amount,
            health_after: self.current,
            max_health: self.max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lose_clamps_at_zero() {
        let mut health = Health::full(50);
        assert_eq!(health.lose(20), 30);
        assert_eq!(health.lose(100), 0);
        assert!(health.is_depleted());
        assert_eq!(health.lose(5), 0);
    }

    #[test]
    fn test_restore_caps_at_max() {
        let mut health = Health::full(100);
        health.lose(10);
        let outcome = health.restore(25);
        assert_eq!(
            outcome,
            HealOutcome::Healed {
                amount: 25,
                health_after: 100,
                max_health: 100
            }
        );
        assert!(health.is_full());
    }

    #[test]
    fn test_restore_when_full_is_no_op() {
        let mut health = Health::full(80);
        assert_eq!(health.restore(20), HealOutcome::AlreadyFull);
        assert_eq!(health.current(), 80);
    }

    #[test]
    fn test_set_clamps() {
        let mut health = Health::full(90);
        health.set(500);
        assert_eq!(health.current(), 90);
        health.set(1);
        assert_eq!(health.current(), 1);
    }
}
