//! Walk Plot - Random Walk Viewer
//!
//! Generates a random walk and shows it in a ggplot-styled window.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use walk_plot::{generate_random_walk, plot_time_series, PlotConfiguration};

const N_STEPS: usize = 500;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "walk_plot=info".into()),
        )
        .init();

    let walk = generate_random_walk(N_STEPS, &mut rand::thread_rng());
    tracing::info!(steps = walk.len(), "generated random walk");

    let config = PlotConfiguration::default().with_title("Random Walk");
    plot_time_series(&walk, &config)?;

    Ok(())
}
