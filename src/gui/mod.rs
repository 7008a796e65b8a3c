//! GUI module - Native figure window

mod app;

pub use app::FigureWindow;
