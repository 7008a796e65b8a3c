//! Chart Plotter Module
//! Draws a figure interactively using egui_plot.

use crate::charts::Figure;
use egui::{Color32, RichText};
use egui_plot::{Line, Plot, PlotPoints};

const TITLE_SIZE: f32 = 18.0;

/// Draws figures into an egui UI.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw the title and line chart, filling the available space.
    pub fn draw_figure(ui: &mut egui::Ui, figure: &Figure) {
        let theme = &figure.theme;
        let text_color: Color32 = theme.text.into();

        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(&figure.title)
                    .size(TITLE_SIZE)
                    .color(text_color),
            );
        });

        egui::Frame::none()
            .fill(theme.panel.into())
            .inner_margin(4.0)
            .show(ui, |ui| {
                Self::draw_line_chart(ui, figure);
            });
    }

    /// Line chart of the figure's points in index order.
    pub fn draw_line_chart(ui: &mut egui::Ui, figure: &Figure) {
        let theme = &figure.theme;
        let x_range = figure.x_range();
        let y_range = figure.y_range();

        Plot::new(format!("figure_{}", figure.title))
            .x_axis_label(figure.xlabel.clone())
            .y_axis_label(figure.ylabel.clone())
            .show_grid(theme.show_grid)
            .show_background(false)
            .include_x(x_range.start)
            .include_x(x_range.end)
            .include_y(y_range.start)
            .include_y(y_range.end)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                // NaN in PlotPoints breaks the line at that position
                let points: PlotPoints = figure.points.iter().map(|&(x, y)| [x, y]).collect();

                plot_ui.line(
                    Line::new(points)
                        .color(Color32::from(theme.line))
                        .width(theme.line_width)
                        .name(&figure.series_name),
                );
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::PlotConfiguration;
    use crate::data::TimeSeries;

    fn draw_headless(figure: &Figure) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ChartPlotter::draw_figure(ui, figure);
            });
        });
    }

    #[test]
    fn test_draws_series_without_window() {
        let series = TimeSeries::new("stub", vec![0.0, 1.0, -0.5]);
        draw_headless(&Figure::new(&series, &PlotConfiguration::default()));
    }

    #[test]
    fn test_draws_empty_and_gappy_series() {
        let config = PlotConfiguration::default();
        draw_headless(&Figure::new(&TimeSeries::new("empty", vec![]), &config));
        draw_headless(&Figure::new(
            &TimeSeries::new("gappy", vec![1.0, f64::NAN, 2.0]),
            &config,
        ));
    }
}
