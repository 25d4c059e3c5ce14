//! Test RNG — deterministic `DeterministicRng` implementations for tests.

use misiones_core::rng::DeterministicRng;

/// An RNG that always returns `0.5`, the midpoint of `[0.0, 1.0)`.
/// Symmetric offsets drawn from it are zero, so anchors land exactly on the
/// region centre.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_f64(&mut self) -> f64 {
        0.5
    }
}

/// An RNG that returns values from a predetermined sequence. Panics if the
/// sequence is exhausted.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<f64>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, index: 0 }
    }
}

impl DeterministicRng for SequenceRng {
    fn next_f64(&mut self) -> f64 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}
