// File: crates/power-chart-core/src/axis.rs
// Summary: Time- and value-axis gridlines and labels, with last-label overflow suppression.

use tracing::debug;

use crate::geometry::Point;
use crate::scale::ScaleModel;
use crate::scene::ChartScene;
use crate::text::TextMeasure;
use crate::time::TimeGrid;
use crate::types::{Insets, AXIS_LABEL_DIVISOR, VALUE_UNIT_LABEL};

/// Baseline offset of time labels below the chart area.
const TIME_LABEL_OFFSET: f64 = 12.0;
/// Value labels sit just right of the chart area, nudged down to center on the line.
const VALUE_LABEL_DX: f64 = 1.0;
const VALUE_LABEL_DY: f64 = 3.0;

/// A vertical gridline at a six-hour mark.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeTick {
    pub x: f64,
    pub label: String,
    /// False only for a last label that would overflow the right edge.
    pub show_label: bool,
}

/// A horizontal gridline at a multiple of the axis step.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueTick {
    pub value: f64,
    pub y: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisLayout {
    pub time: Vec<TimeTick>,
    pub value: Vec<ValueTick>,
    pub unit_label_at: Point,
}

impl AxisLayout {
    pub fn compute(grid: &TimeGrid, scale: &ScaleModel, insets: &Insets, measure: &dyn TextMeasure) -> Self {
        Self {
            time: time_ticks(grid, scale, measure),
            value: value_ticks(scale),
            unit_label_at: unit_label_position(scale, insets, measure),
        }
    }

    pub fn push_commands(&self, scene: &mut ChartScene, scale: &ScaleModel) {
        let (w, h) = (scale.chart_width, scale.chart_height);
        for tick in &self.time {
            if tick.show_label {
                scene.text(tick.label.clone(), Point::new(tick.x, h + TIME_LABEL_OFFSET));
            }
            scene.grid_line(Point::new(tick.x, 0.0), Point::new(tick.x, h));
        }
        for tick in &self.value {
            scene.text(tick.label.clone(), Point::new(w + VALUE_LABEL_DX, tick.y + VALUE_LABEL_DY));
            scene.grid_line(Point::new(0.0, tick.y), Point::new(w, tick.y));
        }
        scene.text(VALUE_UNIT_LABEL, self.unit_label_at);
    }
}

/// Gridlines every six hours on the hour. Only the last label is checked for
/// overflow; earlier labels are always drawn.
pub fn time_ticks(grid: &TimeGrid, scale: &ScaleModel, measure: &dyn TextMeasure) -> Vec<TimeTick> {
    let mut ticks: Vec<TimeTick> = grid
        .iter()
        .filter(|b| b.is_label_slot())
        .map(|b| TimeTick { x: scale.bucket_x(b.index), label: b.label(), show_label: true })
        .collect();
    if let Some(last) = ticks.last_mut() {
        let width = measure.text_width(&last.label);
        if scale.chart_width - last.x < width {
            debug!(label = %last.label, x = last.x, width, "suppressing overflowing time label");
            last.show_label = false;
        }
    }
    ticks
}

/// One tick per step from 0 through the axis max, labelled in thousands.
pub fn value_ticks(scale: &ScaleModel) -> Vec<ValueTick> {
    scale
        .ticks()
        .map(|value| ValueTick {
            value,
            y: scale.to_px(value),
            label: format!("{}", (value / AXIS_LABEL_DIVISOR).trunc() as i64),
        })
        .collect()
}

/// Right-aligned to the canvas edge, raised above the chart area by its own height.
pub fn unit_label_position(scale: &ScaleModel, insets: &Insets, measure: &dyn TextMeasure) -> Point {
    let x = scale.chart_width + f64::from(insets.right) - measure.text_width(VALUE_UNIT_LABEL);
    let y = -measure.text_height(VALUE_UNIT_LABEL);
    Point::new(x, y)
}
