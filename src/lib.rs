//! Walk Plot - Random Walk Generation & Time Series Plotting
//!
//! Generate random walks from standard normal noise and draw any numeric
//! sequence as a themed line chart, either in a native window or as a PNG.

pub mod charts;
pub mod data;
pub mod gui;

pub use charts::{plot_time_series, Backend, Figure, PlotConfiguration, PlotError, Theme};
pub use data::{generate_random_walk, generate_random_walk_seeded, TimeSeries};
