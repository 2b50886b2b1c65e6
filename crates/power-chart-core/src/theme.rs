// File: crates/power-chart-core/src/theme.rs
// Summary: Stroke, gridline, and text styling for the generation-mix chart.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Outline around every ribbon and legend swatch.
    pub outline: skia::Color,
    pub outline_width: f32,
    pub grid: skia::Color,
    pub grid_width: f32,
    /// On/off lengths of the gridline dash.
    pub grid_dash: [f32; 2],
    pub text: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            outline: skia::Color::from_rgb(0, 0, 0),
            outline_width: 0.2,
            grid: skia::Color::from_rgb(0xcc, 0xcc, 0xcc),
            grid_width: 0.5,
            grid_dash: [2.0, 2.0],
            text: skia::Color::from_rgb(0, 0, 0),
        }
    }

    pub fn outline_paint(&self) -> skia::Paint {
        let mut p = skia::Paint::default();
        p.set_anti_alias(true);
        p.set_style(skia::paint::Style::Stroke);
        p.set_stroke_width(self.outline_width);
        p.set_color(self.outline);
        p
    }

    pub fn grid_paint(&self) -> skia::Paint {
        let mut p = skia::Paint::default();
        p.set_anti_alias(true);
        p.set_style(skia::paint::Style::Stroke);
        p.set_stroke_width(self.grid_width);
        p.set_color(self.grid);
        p.set_path_effect(skia::PathEffect::dash(&self.grid_dash, 0.0));
        p
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
