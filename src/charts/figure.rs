//! Figure Module
//! Plot configuration and the backend-independent description of one line chart.

use crate::charts::Theme;
use crate::data::TimeSeries;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::path::PathBuf;

pub const DEFAULT_TITLE: &str = "Time Series";
pub const DEFAULT_XLABEL: &str = "Time";
pub const DEFAULT_YLABEL: &str = "Value";

/// Fraction of the data span added on each side of an axis
const AXIS_MARGIN: f64 = 0.05;

/// Figure size in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width: f64,
    pub height: f64,
}

impl Default for FigureSize {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 6.0,
        }
    }
}

/// Where a figure is presented
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Backend {
    /// Native window; blocks until closed
    #[default]
    Window,
    /// PNG file, optionally handed to the system image viewer
    Image { path: PathBuf, open: bool },
    /// Build the figure but present nothing
    NonInteractive,
}

/// Options for a single plot call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfiguration {
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    pub size: FigureSize,
    pub dpi: u32,
    pub theme: Theme,
    pub backend: Backend,
}

impl Default for PlotConfiguration {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            xlabel: DEFAULT_XLABEL.to_string(),
            ylabel: DEFAULT_YLABEL.to_string(),
            size: FigureSize::default(),
            dpi: 100,
            theme: Theme::ggplot(),
            backend: Backend::default(),
        }
    }
}

impl PlotConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_xlabel(mut self, xlabel: impl Into<String>) -> Self {
        self.xlabel = xlabel.into();
        self
    }

    pub fn with_ylabel(mut self, ylabel: impl Into<String>) -> Self {
        self.ylabel = ylabel.into();
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = FigureSize { width, height };
        self
    }

    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }
}

/// Everything a backend needs to draw one line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    pub size: FigureSize,
    pub dpi: u32,
    pub theme: Theme,
    pub series_name: String,
    pub points: Vec<(f64, f64)>,
}

impl Figure {
    pub fn new(series: &TimeSeries, config: &PlotConfiguration) -> Self {
        tracing::debug!(
            series = series.name(),
            len = series.len(),
            title = %config.title,
            "building figure"
        );

        Self {
            title: config.title.clone(),
            xlabel: config.xlabel.clone(),
            ylabel: config.ylabel.clone(),
            size: config.size,
            dpi: config.dpi,
            theme: config.theme.clone(),
            series_name: series.name().to_string(),
            points: series.points().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Canvas size in pixels (inches x dpi).
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = self.dpi as f64;
        (
            (self.size.width * dpi).round().max(1.0) as u32,
            (self.size.height * dpi).round().max(1.0) as u32,
        )
    }

    /// Points with both coordinates finite; NaN/Inf leave gaps.
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points
            .iter()
            .copied()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
    }

    pub fn x_range(&self) -> Range<f64> {
        Self::padded_range(self.finite_points().map(|(x, _)| x))
    }

    pub fn y_range(&self) -> Range<f64> {
        Self::padded_range(self.finite_points().map(|(_, y)| y))
    }

    /// Figure metadata as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
        let bounds = values.fold(None, |acc: Option<(f64, f64)>, v| match acc {
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            None => Some((v, v)),
        });

        match bounds {
            None => 0.0..1.0,
            Some((lo, hi)) if hi - lo == 0.0 => (lo - 0.5)..(hi + 0.5),
            Some((lo, hi)) => {
                let pad = (hi - lo) * AXIS_MARGIN;
                (lo - pad)..(hi + pad)
            }
        }
    }
}
