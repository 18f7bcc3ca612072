//! Answer selection
//!
//! Random index providers, injectable so tests can pick answers deterministically.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses an index into a word source
pub trait IndexPicker {
    /// Return an index in `0..len`. Only called with `len > 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform random picker backed by a `rand` RNG
#[derive(Debug, Clone)]
pub struct RngPicker<R = StdRng> {
    rng: R,
}

impl<R: Rng> RngPicker<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngPicker<StdRng> {
    /// Picker seeded from the operating system
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible picker for a fixed seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> IndexPicker for RngPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed list of indices, cycling when exhausted
///
/// Indices are reduced modulo `len`.
#[derive(Debug, Clone)]
pub struct SequencePicker {
    indices: Vec<usize>,
    next: usize,
}

impl SequencePicker {
    #[must_use]
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, next: 0 }
    }
}

impl IndexPicker for SequencePicker {
    fn pick(&mut self, len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let index = self.indices[self.next % self.indices.len()];
        self.next += 1;
        index % len
    }
}
