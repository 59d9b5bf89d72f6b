//! Injectable randomness.
//!
//! The stress sampler is the only consumer. Routing it through a trait lets
//! tests and seeded scans reproduce their output exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait EntropySource {
    /// Uniform integer in `low..=high`. Returns `low` when the range is empty.
    fn sample_inclusive(&mut self, low: u32, high: u32) -> u32;
}

impl<E: EntropySource + ?Sized> EntropySource for &mut E {
    fn sample_inclusive(&mut self, low: u32, high: u32) -> u32 {
        (**self).sample_inclusive(low, high)
    }
}

impl<E: EntropySource + ?Sized> EntropySource for Box<E> {
    fn sample_inclusive(&mut self, low: u32, high: u32) -> u32 {
        (**self).sample_inclusive(low, high)
    }
}

/// Backed by the thread-local RNG; non-reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadEntropy;

impl EntropySource for ThreadEntropy {
    fn sample_inclusive(&mut self, low: u32, high: u32) -> u32 {
        if low >= high {
            return low;
        }
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Deterministic source seeded from a `u64`.
#[derive(Debug, Clone)]
pub struct SeededEntropy {
    rng: StdRng,
}

impl SeededEntropy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl EntropySource for SeededEntropy {
    fn sample_inclusive(&mut self, low: u32, high: u32) -> u32 {
        if low >= high {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
}

/// How a fresh entropy source is produced for each scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SamplingMode {
    #[default]
    System,
    Seeded(u64),
}

impl SamplingMode {
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(SamplingMode::System, SamplingMode::Seeded)
    }

    pub fn source(&self) -> Box<dyn EntropySource> {
        match *self {
            SamplingMode::System => Box::new(ThreadEntropy),
            SamplingMode::Seeded(seed) => Box::new(SeededEntropy::new(seed)),
        }
    }
}
