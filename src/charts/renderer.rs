//! Static Chart Renderer
//! Draws a figure as a bitmap using plotters.
//!
//! Layout:
//! 1. Title centered above the axes
//! 2. Themed panel with grid behind the data
//! 3. Series drawn as a connected line in index order
//! 4. Axis descriptions from the figure's x/y labels

use crate::charts::Figure;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

const FONT: &str = "sans-serif";
const TITLE_SIZE: u32 = 24;
const AXIS_DESC_SIZE: u32 = 18;
const TICK_LABEL_SIZE: u32 = 14;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Drawing failed: {0}")]
    Drawing(String),
}

fn drawing_error<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> RenderError {
    RenderError::Drawing(e.to_string())
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render the figure to a PNG file at its pixel size.
    pub fn render_png(figure: &Figure, path: &Path) -> Result<(), RenderError> {
        let root = BitMapBackend::new(path, figure.pixel_size()).into_drawing_area();
        Self::draw(&root, figure)?;
        root.present().map_err(drawing_error)?;

        tracing::debug!(path = %path.display(), "wrote figure image");
        Ok(())
    }

    /// Render the figure into an RGB buffer (3 bytes per pixel).
    pub fn render_rgb(figure: &Figure) -> Result<Vec<u8>, RenderError> {
        let (width, height) = figure.pixel_size();
        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            Self::draw(&root, figure)?;
            root.present().map_err(drawing_error)?;
        }
        Ok(buffer)
    }

    fn draw<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        figure: &Figure,
    ) -> Result<(), RenderError> {
        let theme = &figure.theme;
        let background: RGBColor = theme.background.into();
        let panel: RGBColor = theme.panel.into();
        let grid: RGBColor = theme.grid.into();
        let line: RGBColor = theme.line.into();
        let text: RGBColor = theme.text.into();

        root.fill(&background).map_err(drawing_error)?;

        let mut chart = ChartBuilder::on(root)
            .caption(&figure.title, (FONT, TITLE_SIZE).into_font().color(&text))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(figure.x_range(), figure.y_range())
            .map_err(drawing_error)?;

        chart.plotting_area().fill(&panel).map_err(drawing_error)?;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(figure.xlabel.as_str())
            .y_desc(figure.ylabel.as_str())
            .axis_desc_style((FONT, AXIS_DESC_SIZE).into_font().color(&text))
            .label_style((FONT, TICK_LABEL_SIZE).into_font().color(&text))
            .axis_style(panel.stroke_width(1));
        if theme.show_grid {
            mesh.bold_line_style(grid.stroke_width(1))
                .light_line_style(grid.mix(0.5).stroke_width(1));
        } else {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(drawing_error)?;

        // Non-finite values split the line into separate segments
        let stroke = line.stroke_width(theme.line_width.round().max(1.0) as u32);
        for segment in Self::finite_segments(&figure.points) {
            chart
                .draw_series(LineSeries::new(segment, stroke))
                .map_err(drawing_error)?;
        }

        Ok(())
    }

    /// Split points into runs of finite values.
    fn finite_segments(points: &[(f64, f64)]) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for &(x, y) in points {
            if x.is_finite() && y.is_finite() {
                current.push((x, y));
            } else if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_segments_split_on_nan() {
        let points = [
            (0.0, 1.0),
            (1.0, f64::NAN),
            (2.0, 3.0),
            (3.0, 4.0),
            (4.0, f64::INFINITY),
        ];
        let segments = StaticChartRenderer::finite_segments(&points);
        assert_eq!(
            segments,
            vec![vec![(0.0, 1.0)], vec![(2.0, 3.0), (3.0, 4.0)]]
        );
    }

    #[test]
    fn test_finite_segments_empty() {
        assert!(StaticChartRenderer::finite_segments(&[]).is_empty());
    }
}
