//! Integration tests for walk_plot

use walk_plot::charts::{StaticChartRenderer, DEFAULT_TITLE};
use walk_plot::data::{RandomWalkGenerator, RANDOM_WALK_NAME};
use walk_plot::{
    generate_random_walk_seeded, plot_time_series, Backend, Figure, PlotConfiguration, Theme,
    TimeSeries,
};

#[test]
fn test_generated_walk_feeds_plotter() {
    let walk = generate_random_walk_seeded(250, 2024);
    let config = PlotConfiguration::default().with_backend(Backend::NonInteractive);

    assert_eq!(walk.len(), 250);
    assert_eq!(walk.name(), RANDOM_WALK_NAME);
    assert!(plot_time_series(&walk, &config).is_ok());
}

#[test]
fn test_figure_from_walk() {
    let walk = RandomWalkGenerator::from_increments(&[1.0, 1.0, 1.0]);
    let figure = Figure::new(&walk, &PlotConfiguration::default());

    assert_eq!(figure.title, DEFAULT_TITLE);
    assert_eq!(figure.series_name, "Random Walk");
    assert_eq!(figure.points, vec![(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);
}

#[test]
fn test_walk_through_polars() {
    let walk = generate_random_walk_seeded(20, 5);
    let series = walk.to_series();
    let back = TimeSeries::try_from(&series).unwrap();

    assert_eq!(back.name(), "Random Walk");
    for (a, b) in walk.values().iter().zip(back.values()) {
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn test_theme_is_per_call() {
    let walk = TimeSeries::new("stub", vec![0.0, 1.0, -0.5]);
    let classic = Figure::new(
        &walk,
        &PlotConfiguration::default().with_theme(Theme::classic()),
    );
    let default = Figure::new(&walk, &PlotConfiguration::default());

    assert_eq!(classic.theme.name, "classic");
    assert_eq!(default.theme.name, "ggplot");
}

#[test]
fn test_render_png_to_buffer() {
    let walk = generate_random_walk_seeded(100, 11);
    let figure = Figure::new(&walk, &PlotConfiguration::default().with_dpi(50));

    let buffer = StaticChartRenderer::render_rgb(&figure).unwrap();
    assert_eq!(buffer.len(), 500 * 300 * 3);
    // Top-left pixel is the figure background (white for ggplot)
    assert_eq!(&buffer[0..3], &[255, 255, 255]);
}

#[test]
fn test_render_empty_series_to_buffer() {
    let figure = Figure::new(
        &TimeSeries::new("empty", vec![]),
        &PlotConfiguration::default().with_dpi(50),
    );

    let buffer = StaticChartRenderer::render_rgb(&figure).unwrap();
    assert_eq!(buffer.len(), 500 * 300 * 3);
    // Grey ggplot panel is drawn even without data
    assert!(buffer.chunks_exact(3).any(|px| px == [0xE5, 0xE5, 0xE5]));
}

#[test]
fn test_plot_png_backend() {
    let dir = std::env::temp_dir();
    let cases = [
        ("walk_plot_empty.png", TimeSeries::new("empty", vec![])),
        ("walk_plot_one.png", TimeSeries::new("one", vec![0.5])),
        ("walk_plot_walk.png", generate_random_walk_seeded(100, 3)),
    ];

    for (file, series) in cases {
        let path = dir.join(file);
        let config = PlotConfiguration::default().with_backend(Backend::Image {
            path: path.clone(),
            open: false,
        });

        plot_time_series(&series, &config).unwrap();
        assert!(path.exists(), "{} was not written", file);
        let _ = std::fs::remove_file(path);
    }
}
