//! Die sources.
//!
//! The engine draws every roll through [`DiceSource`] so sessions can run on
//! system entropy, a fixed seed, or a scripted sequence.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Provides random integers in an inclusive range.
pub trait DiceSource: Send {
    fn next_in_range(&mut self, low: u8, high: u8) -> u8;
}

/// A die backed by any `rand` generator.
pub struct RngDice<R: Rng> {
    rng: R,
}

impl<R: Rng> RngDice<R> {
    pub fn new(rng: R) -> Self {
        RngDice { rng }
    }
}

impl RngDice<SmallRng> {
    /// Seeds from system entropy.
    pub fn from_entropy() -> Self {
        RngDice::new(SmallRng::from_entropy())
    }

    /// Seeds deterministically; the same seed yields the same rolls.
    pub fn seeded(seed: u64) -> Self {
        RngDice::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> DiceSource for RngDice<R> {
    fn next_in_range(&mut self, low: u8, high: u8) -> u8 {
        if low >= high {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// Values are clamped into the requested range. An empty script always
/// yields `low`.
#[derive(Debug, Clone, Default)]
pub struct FixedDice {
    values: Vec<u8>,
    next: usize,
}

impl FixedDice {
    pub fn new(values: Vec<u8>) -> Self {
        FixedDice { values, next: 0 }
    }
}

impl DiceSource for FixedDice {
    fn next_in_range(&mut self, low: u8, high: u8) -> u8 {
        if self.values.is_empty() {
            return low;
        }
        let v = self.values[self.next % self.values.len()];
        self.next = (self.next + 1) % self.values.len();
        v.clamp(low, high.max(low))
    }
}
