//! Deterministic seeded random sequence for star placement
//!
//! Multiplicative Lehmer generator: `state = state * 16807 mod 2147483647`.
//! Same seed yields the identical infinite sequence on every platform (pure
//! integer recurrence, no ambient randomness), which is what keeps a habit's
//! star from jittering between unrelated redraws.

use serde::{Deserialize, Serialize};

/// Generator modulus, the Mersenne prime 2^31 - 1
const MODULUS: i64 = 2_147_483_647;
/// Park-Miller minimal standard multiplier
const MULTIPLIER: i64 = 16_807;

/// Seeded pseudo-random generator. Cheap to construct; the mapping code
/// creates a fresh one per habit on every redraw, which is exactly what
/// makes the output reproducible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeededRng {
    state: i64,
}

impl SeededRng {
    /// Create a generator from any integer seed.
    ///
    /// The seed is normalized into `[1, 2147483646]`: reduced mod 2147483647,
    /// then shifted up by 2147483646 when `<= 0`. Negative seeds congruent to
    /// 1 would land back on 0 after the shift, so a final guard pins those to
    /// 2147483646 - no seed ever produces the degenerate all-zero sequence.
    pub fn new(seed: i64) -> Self {
        let mut state = seed % MODULUS;
        if state <= 0 {
            state += MODULUS - 1;
        }
        if state == 0 {
            state = MODULUS - 1;
        }
        Self { state }
    }

    /// Advance the sequence and return a value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER) % MODULUS;
        (self.state - 1) as f64 / (MODULUS - 1) as f64
    }

    /// Uniform value in `[min, max)`.
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Uniform integer in `[min, max]`, both ends inclusive.
    pub fn int_range(&mut self, min: i64, max: i64) -> i64 {
        (self.range(min as f64, (max + 1) as f64).floor() as i64).min(max)
    }
}
