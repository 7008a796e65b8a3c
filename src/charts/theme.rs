//! Chart Themes
//! Named color sets applied to a figure at render time.

use serde::{Deserialize, Serialize};

/// RGB color shared by the plotters and egui backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
}

impl From<Rgb> for plotters::style::RGBColor {
    fn from(c: Rgb) -> Self {
        plotters::style::RGBColor(c.0, c.1, c.2)
    }
}

impl From<Rgb> for egui::Color32 {
    fn from(c: Rgb) -> Self {
        egui::Color32::from_rgb(c.0, c.1, c.2)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    /// Figure area outside the axes
    pub background: Rgb,
    /// Axes area behind the data
    pub panel: Rgb,
    pub grid: Rgb,
    pub line: Rgb,
    pub text: Rgb,
    pub line_width: f32,
    pub show_grid: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::ggplot()
    }
}

impl Theme {
    /// Grey panel, white grid, red-orange first line.
    pub fn ggplot() -> Self {
        Self {
            name: "ggplot".to_string(),
            background: Rgb::WHITE,
            panel: Rgb(229, 229, 229), // #E5E5E5
            grid: Rgb::WHITE,
            line: Rgb(226, 74, 51), // #E24A33
            text: Rgb(85, 85, 85), // #555555
            line_width: 1.5,
            show_grid: true,
        }
    }

    /// Plain white panel with a light grid.
    pub fn classic() -> Self {
        Self {
            name: "classic".to_string(),
            background: Rgb::WHITE,
            panel: Rgb::WHITE,
            grid: Rgb(220, 220, 220),
            line: Rgb(31, 119, 180), // #1F77B4
            text: Rgb::BLACK,
            line_width: 1.5,
            show_grid: true,
        }
    }

    /// Look up a preset by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "ggplot" => Some(Self::ggplot()),
            "classic" => Some(Self::classic()),
            _ => None,
        }
    }
}
