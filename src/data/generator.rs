//! Random Walk Generator Module
//! Builds random-walk sequences as the running sum of standard normal noise.

use crate::data::TimeSeries;
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use statrs::distribution::Normal;

/// Name carried by every generated walk.
pub const RANDOM_WALK_NAME: &str = "Random Walk";

/// Generates random walks from an explicit random source.
pub struct RandomWalkGenerator;

impl RandomWalkGenerator {
    /// Draw `n_steps` N(0, 1) increments from `rng` and accumulate them.
    pub fn generate<R: Rng + ?Sized>(n_steps: usize, rng: &mut R) -> TimeSeries {
        let increments: Vec<f64> = Normal::standard()
            .sample_iter(&mut *rng)
            .take(n_steps)
            .collect();

        tracing::debug!(n_steps, "generated random walk increments");
        Self::from_increments(&increments)
    }

    /// Build a walk from caller-supplied increments.
    pub fn from_increments(increments: &[f64]) -> TimeSeries {
        TimeSeries::new(RANDOM_WALK_NAME, Self::cumulative_sum(increments))
    }

    /// Prefix sum: output[i] = values[0] + ... + values[i]
    pub fn cumulative_sum(values: &[f64]) -> Vec<f64> {
        values
            .iter()
            .scan(0.0, |acc, &v| {
                *acc += v;
                Some(*acc)
            })
            .collect()
    }
}

/// Generate a random walk of `n_steps` values using `rng`.
pub fn generate_random_walk<R: Rng + ?Sized>(n_steps: usize, rng: &mut R) -> TimeSeries {
    RandomWalkGenerator::generate(n_steps, rng)
}

/// Reproducible variant of [`generate_random_walk`].
pub fn generate_random_walk_seeded(n_steps: usize, seed: u64) -> TimeSeries {
    let mut rng = StdRng::seed_from_u64(seed);
    RandomWalkGenerator::generate(n_steps, &mut rng)
}
