//! Data module - Sequence representation and random walk generation

mod generator;
mod series;

pub use generator::{
    generate_random_walk, generate_random_walk_seeded, RandomWalkGenerator, RANDOM_WALK_NAME,
};
pub use series::{SeriesError, TimeSeries};
