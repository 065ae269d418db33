//! Injectable randomness
//!
//! The simulation only ever asks for uniform draws in `[0, 1)`, so any source
//! that can produce those (a seeded PCG, a scripted list) can drive it.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform random draws for the spawner
pub trait RandomSource {
    /// Next value in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in `0..n` (returns 0 when `n == 0`)
    fn below(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        let roll = self.next_unit().clamp(0.0, 1.0);
        ((roll * n as f64) as u32).min(n - 1)
    }
}

impl RandomSource for Pcg32 {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Seeded PCG stream used by default engines
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed list of draws, cycling when exhausted
#[derive(Debug, Clone, Default)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}
