//! Random bits for the middle-third paddle bounce
//!
//! The coin flip is the only non-deterministic choice in the game, so it
//! sits behind a trait: seeded PCG in play, fixed bits in tests.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of single random bits
pub trait BitSource {
    fn next_bit(&mut self) -> bool;
}

/// PCG-backed bit source
#[derive(Debug, Clone)]
pub struct SeededBits {
    rng: Pcg32,
}

impl SeededBits {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seeded from the thread RNG
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }
}

impl BitSource for SeededBits {
    fn next_bit(&mut self) -> bool {
        self.rng.random()
    }
}

/// Replays a fixed bit pattern, cycling when exhausted
#[derive(Debug, Clone)]
pub struct FixedBits {
    bits: Vec<bool>,
    cursor: usize,
}

impl FixedBits {
    /// Panics on an empty pattern
    pub fn new(bits: impl Into<Vec<bool>>) -> Self {
        let bits = bits.into();
        assert!(!bits.is_empty(), "FixedBits needs at least one bit");
        Self { bits, cursor: 0 }
    }

    pub fn always(bit: bool) -> Self {
        Self::new(vec![bit])
    }
}

impl BitSource for FixedBits {
    fn next_bit(&mut self) -> bool {
        let bit = self.bits[self.cursor];
        self.cursor = (self.cursor + 1) % self.bits.len();
        bit
    }
}
