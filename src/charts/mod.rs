//! Charts module - Figure description, themes and rendering backends

mod figure;
mod plotter;
mod present;
mod renderer;
mod theme;

pub use figure::{
    Backend, Figure, FigureSize, PlotConfiguration, DEFAULT_TITLE, DEFAULT_XLABEL, DEFAULT_YLABEL,
};
pub use plotter::ChartPlotter;
pub use present::{plot_time_series, present, PlotError};
pub use renderer::{RenderError, StaticChartRenderer};
pub use theme::{Rgb, Theme};
