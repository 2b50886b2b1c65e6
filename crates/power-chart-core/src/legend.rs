// File: crates/power-chart-core/src/legend.rs
// Summary: Centered single-row legend with measured label widths.

use crate::geometry::Point;
use crate::mode::{PatternId, PresentationMode};
use crate::scene::{ChartScene, DrawCommand};
use crate::text::TextMeasure;
use crate::types::{LEGEND_CIRCLE_DIAMETER, LEGEND_GAP, LEGEND_PADDING};

#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    pub label: &'static str,
    pub pattern: PatternId,
    /// Left edge of the item.
    pub x: f64,
    /// Swatch + padding + text.
    pub width: f64,
    pub swatch_center: Point,
    pub text_at: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendLayout {
    pub items: Vec<LegendItem>,
    pub total_width: f64,
    pub start_x: f64,
    /// Top of the legend row, above the chart area (negative).
    pub y: f64,
}

impl LegendLayout {
    /// Groups are taken in draw order and then laid out reversed again, so the
    /// row reads left to right in semantic order and matches the stack.
    pub fn compute(mode: PresentationMode, chart_width: f64, measure: &dyn TextMeasure) -> Self {
        let drawn: Vec<_> = mode.draw_order().collect();
        let item_width = |label: &str| LEGEND_CIRCLE_DIAMETER + LEGEND_PADDING * 2.0 + measure.text_width(label);

        let total_width: f64 = drawn.iter().map(|g| item_width(g.label)).sum();
        let start_x = (chart_width - total_width) / 2.0;
        let y = -LEGEND_CIRCLE_DIAMETER - LEGEND_GAP;
        let radius = LEGEND_CIRCLE_DIAMETER / 2.0;

        let mut x = start_x;
        let items = drawn
            .iter()
            .rev()
            .map(|g| {
                let width = item_width(g.label);
                let item = LegendItem {
                    label: g.label,
                    pattern: g.pattern,
                    x,
                    width,
                    swatch_center: Point::new(x + radius, y + radius),
                    text_at: Point::new(x + LEGEND_CIRCLE_DIAMETER + LEGEND_PADDING, y + LEGEND_CIRCLE_DIAMETER - 2.0),
                };
                x += width;
                item
            })
            .collect();

        Self { items, total_width, start_x, y }
    }

    pub fn push_commands(&self, scene: &mut ChartScene) {
        let radius = LEGEND_CIRCLE_DIAMETER / 2.0;
        for item in &self.items {
            scene.push(DrawCommand::Swatch { center: item.swatch_center, radius, pattern: item.pattern });
            scene.text(item.label, item.text_at);
        }
    }
}
