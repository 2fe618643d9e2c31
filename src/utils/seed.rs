// Seed selection for proximity clustering

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::Person;

/// Chooses the person a new cluster grows from.
///
/// `candidates` are indices into `people`; the return value is a position
/// in `candidates` and must be smaller than `candidates.len()`.
pub trait SeedSelector {
    fn select(&mut self, candidates: &[usize], people: &[Person]) -> usize;
}

/// Always picks the earliest remaining person, giving reproducible runs
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstRemaining;

impl SeedSelector for FirstRemaining {
    fn select(&mut self, _candidates: &[usize], _people: &[Person]) -> usize {
        0
    }
}

/// Picks a uniformly random remaining person
#[derive(Debug, Clone)]
pub struct RandomSeed {
    rng: StdRng,
}

impl RandomSeed {
    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl SeedSelector for RandomSeed {
    fn select(&mut self, candidates: &[usize], _people: &[Person]) -> usize {
        if candidates.len() <= 1 {
            return 0;
        }
        self.rng.gen_range(0..candidates.len())
    }
}
