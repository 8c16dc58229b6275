//! Pluggable random sources for prompt resolution.
//!
//! Expansion is random in outcome but must be deterministic under test, so
//! every draw goes through [`RandomSource`]. Production code uses
//! [`ThreadRandom`]; the CLI's `--seed` flag uses [`SeededRandom`]; tests
//! script exact draws with [`ScriptedRandom`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A provider of uniform draws in `[0, 1)`.
pub trait RandomSource {
    /// Draw a uniform sample in `[0, 1)`
    fn next_f64(&mut self) -> f64;

    /// Pick a uniformly distributed index into a collection of `len`
    /// elements. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        let idx = (self.next_f64() * len as f64) as usize;
        idx.min(len - 1)
    }
}

/// Thread-local RNG for production use.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        rand::thread_rng().gen()
    }
}

/// Seeded RNG for reproducible resolution runs.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    /// Create a source seeded from `seed`
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.0.gen()
    }
}

/// A source that replays a fixed sequence of draws, for tests.
///
/// Once the script is exhausted the last value repeats.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    position: usize,
}

impl ScriptedRandom {
    /// Create a source replaying `values` in order
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "script must contain at least one draw");
        Self {
            values,
            position: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.position.min(self.values.len() - 1)];
        self.position += 1;
        value
    }
}
