//! Figure Window
//! Native window presenting a single figure.

use crate::charts::{ChartPlotter, Figure};
use egui::CentralPanel;

/// Window showing one figure until the user closes it.
pub struct FigureWindow {
    figure: Figure,
}

impl FigureWindow {
    pub fn new(cc: &eframe::CreationContext<'_>, figure: Figure) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self { figure }
    }

    /// Open the window at the figure's pixel size and block until it closes.
    pub fn run(figure: Figure) -> eframe::Result<()> {
        let (width, height) = figure.pixel_size();
        let title = figure.title.clone();

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([width as f32, height as f32])
                .with_title(&title),
            ..Default::default()
        };

        eframe::run_native(
            &title,
            options,
            Box::new(|cc| Ok(Box::new(FigureWindow::new(cc, figure)))),
        )
    }
}

impl eframe::App for FigureWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let background: egui::Color32 = self.figure.theme.background.into();

        CentralPanel::default()
            .frame(egui::Frame::none().fill(background).inner_margin(12.0))
            .show(ctx, |ui| {
                ChartPlotter::draw_figure(ui, &self.figure);
            });
    }
}
