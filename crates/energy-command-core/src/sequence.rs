//! Seeded pseudo-random sequence for month synthesis.
//!
//! Park–Miller "minimal standard" multiplicative LCG. The generated months
//! depend on the exact draw order, so the algorithm and its constants must
//! never change.

use serde::{Deserialize, Serialize};

/// Modulus of the generator (2^31 - 1).
pub const MODULUS: i64 = 2_147_483_647;

/// Multiplier of the generator.
pub const MULTIPLIER: i64 = 16_807;

/// Deterministic sequence of values in `[0, 1)`.
///
/// Implements [`Iterator`] and never terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeededSequence {
    state: i64,
}

impl SeededSequence {
    /// Create a sequence from an arbitrary seed.
    ///
    /// Seeds that reduce to zero or a negative residue are shifted into
    /// `[1, MODULUS - 1]`.
    pub fn new(seed: i64) -> Self {
        let mut state = seed % MODULUS;
        if state <= 0 {
            state += MODULUS - 1;
        }
        Self { state }
    }

    /// Current internal state.
    pub fn state(&self) -> i64 {
        self.state
    }

    /// Advance and return the next value in `[0, 1)`.
    pub fn next_value(&mut self) -> f64 {
        self.state = self.state * MULTIPLIER % MODULUS;
        (self.state - 1) as f64 / (MODULUS - 1) as f64
    }

    /// Draw an integer in `[0, span)` as `floor(value * span)`.
    pub fn next_index(&mut self, span: u32) -> u32 {
        (self.next_value() * f64::from(span)).floor() as u32
    }
}

impl Iterator for SeededSequence {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_value())
    }
}
