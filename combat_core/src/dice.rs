//! Dice - the single random source behind every combat roll

use crate::types::DamageRange;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of randomness for a battle
///
/// Every roll in a battle goes through one `Dice`, so a battle can be
/// replayed from its seed and tests can script each outcome.
pub trait Dice {
    /// Roll uniformly within `range`, both ends inclusive
    fn roll(&mut self, range: DamageRange) -> u32;

    /// Roll a uniform fraction in `[0, 1)`
    fn fraction(&mut self) -> f64;
}

/// `Dice` backed by a `rand` RNG
#[derive(Debug, Clone)]
pub struct RngDice<R> {
    rng: R,
}

impl<R: Rng> RngDice<R> {
    pub fn new(rng: R) -> Self {
        RngDice { rng }
    }
}

impl RngDice<ChaCha8Rng> {
    /// Deterministic dice: the same seed always produces the same rolls
    pub fn seeded(seed: u64) -> Self {
        RngDice::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

/// Seedable dice used for real battles
pub type SeededDice = RngDice<ChaCha8Rng>;

impl<R: Rng> Dice for RngDice<R> {
    fn roll(&mut self, range: DamageRange) -> u32 {
        if range.min >= range.max {
            range.max
        } else {
            self.rng.gen_range(range.min..=range.max)
        }
    }

    fn fraction(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Draw a fresh seed from the thread RNG
pub fn random_seed() -> u64 {
    rand::thread_rng().gen()
}
