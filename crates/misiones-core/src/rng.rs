//! Random number generator abstraction for determinism.
//!
//! In production this wraps an OS-seeded RNG. Tests inject a fixed or
//! sequenced implementation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Abstraction over random number generation.
pub trait DeterministicRng: Send + Sync {
    /// Generate a random `f64` in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;

    /// Generate an offset in `[-magnitude, magnitude)`.
    fn symmetric_offset(&mut self, magnitude: f64) -> f64 {
        (self.next_f64() - 0.5) * 2.0 * magnitude
    }
}

/// Production RNG seeded from the operating system.
#[derive(Debug)]
pub struct OsSeededRng(StdRng);

impl OsSeededRng {
    /// Creates a new RNG seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl Default for OsSeededRng {
    fn default() -> Self {
        Self::new()
    }
}

impl DeterministicRng for OsSeededRng {
    fn next_f64(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}
