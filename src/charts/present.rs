//! Figure presentation
//! Builds a figure from a series and hands it to the configured backend.

use crate::charts::{Backend, Figure, PlotConfiguration, RenderError, StaticChartRenderer};
use crate::data::TimeSeries;
use crate::gui::FigureWindow;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to render figure: {0}")]
    Render(#[from] RenderError),
    #[error("Failed to open figure window: {0}")]
    Display(String),
    #[error("Failed to open rendered image: {0}")]
    Open(#[from] std::io::Error),
}

/// Plot `series` as a line chart using the title, labels, theme and backend in `config`.
///
/// With [`Backend::Window`] this blocks until the window is closed.
pub fn plot_time_series(series: &TimeSeries, config: &PlotConfiguration) -> Result<(), PlotError> {
    let figure = Figure::new(series, config);
    present(&figure, &config.backend)
}

/// Present an already-built figure.
pub fn present(figure: &Figure, backend: &Backend) -> Result<(), PlotError> {
    match backend {
        Backend::Window => {
            tracing::info!(title = %figure.title, "showing figure window");
            FigureWindow::run(figure.clone()).map_err(|e| PlotError::Display(e.to_string()))
        }
        Backend::Image {
            path,
            open: open_viewer,
        } => {
            StaticChartRenderer::render_png(figure, path)?;
            tracing::info!(title = %figure.title, path = %path.display(), "saved figure");
            if *open_viewer {
                open::that(path)?;
            }
            Ok(())
        }
        Backend::NonInteractive => {
            tracing::warn!(
                title = %figure.title,
                "non-interactive backend, figure cannot be shown"
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headless() -> PlotConfiguration {
        PlotConfiguration::default().with_backend(Backend::NonInteractive)
    }

    #[test]
    fn test_empty_series_does_not_fail() {
        let series = TimeSeries::new("empty", vec![]);
        assert!(plot_time_series(&series, &headless()).is_ok());
    }

    #[test]
    fn test_custom_labels_non_interactive() {
        let series = TimeSeries::new("stub", vec![0.0, 1.0, -0.5]);
        let config = headless().with_title("My Title").with_xlabel("Step");
        assert!(plot_time_series(&series, &config).is_ok());
    }

    #[test]
    fn test_empty_series_renders_png() {
        let path = std::env::temp_dir().join("walk_plot_present_empty.png");
        let config = PlotConfiguration::default().with_backend(Backend::Image {
            path: path.clone(),
            open: false,
        });

        plot_time_series(&TimeSeries::new("empty", vec![]), &config).unwrap();
        assert!(path.exists());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_render_error_converts() {
        let err: PlotError = RenderError::Drawing("boom".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Failed to render figure: Drawing failed: boom"
        );
    }
}
