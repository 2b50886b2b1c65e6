// File: crates/power-chart-core/src/scale.rs
// Summary: Value-axis bounds and value -> pixel transform for the stacked chart.

use crate::types::AXIS_STEP;

/// Value Y coordinate (generation, MW).
pub type Value = f64;

/// Upper bound on horizontal gridlines; beyond it ticks land on every k-th step.
const MAX_VALUE_TICKS: usize = 1_000;

/// Linear vertical scale anchored at the chart baseline.
///
/// `max_axis_value` is the smallest multiple of the step covering every total.
/// A zero maximum gives a zero scale: every bar collapses onto the baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleModel {
    pub step: Value,
    pub max_axis_value: Value,
    /// Pixels per unit of value.
    pub value_scale: f64,
    pub bar_width: f64,
    pub chart_width: f64,
    pub chart_height: f64,
}

impl ScaleModel {
    pub fn new(totals: &[Value], chart_width: f64, chart_height: f64) -> Self {
        Self::with_step(totals, AXIS_STEP, chart_width, chart_height)
    }

    pub fn with_step(totals: &[Value], step: Value, chart_width: f64, chart_height: f64) -> Self {
        let max_axis_value = axis_max(totals, step);
        let value_scale = if max_axis_value > 0.0 { chart_height / max_axis_value } else { 0.0 };
        let bar_width = if totals.is_empty() { 0.0 } else { chart_width / totals.len() as f64 };
        Self { step, max_axis_value, value_scale, bar_width, chart_width, chart_height }
    }

    /// Height in pixels of a value stacked from the baseline.
    #[inline]
    pub fn to_height(&self, v: Value) -> f64 {
        v * self.value_scale
    }

    /// Y pixel of a value, with the baseline at `chart_height`.
    #[inline]
    pub fn to_px(&self, v: Value) -> f64 {
        self.chart_height - self.to_height(v)
    }

    /// Left edge of bucket `index`.
    #[inline]
    pub fn bucket_x(&self, index: usize) -> f64 {
        index as f64 * self.bar_width
    }

    /// Axis values from 0 through `max_axis_value`, one per step.
    ///
    /// An absurd maximum (a corrupt reading) widens the stride to a multiple of
    /// the step so the count stays within `MAX_VALUE_TICKS`.
    pub fn ticks(&self) -> impl Iterator<Item = Value> + '_ {
        let steps = if self.step > 0.0 { (self.max_axis_value / self.step).round() } else { 0.0 };
        let stride = (steps / MAX_VALUE_TICKS as f64).ceil().max(1.0);
        let count = (steps / stride).floor() as usize;
        (0..=count).map(move |i| i as f64 * stride * self.step)
    }
}

/// `ceil(max / step) * step`; zero when there is nothing positive to show.
pub fn axis_max(totals: &[Value], step: Value) -> Value {
    let max = totals.iter().copied().filter(|v| v.is_finite()).fold(0.0_f64, f64::max);
    if max <= 0.0 || step <= 0.0 {
        return 0.0;
    }
    (max / step).ceil() * step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_up_to_step() {
        assert_eq!(axis_max(&[1.0, 27_400.0, 300.0], 5000.0), 30_000.0);
        assert_eq!(axis_max(&[30_000.0], 5000.0), 30_000.0);
    }

    #[test]
    fn degenerate_scale_is_zero() {
        let s = ScaleModel::new(&[0.0, 0.0], 100.0, 50.0);
        assert_eq!(s.max_axis_value, 0.0);
        assert_eq!(s.value_scale, 0.0);
        assert_eq!(s.to_px(1234.0), 50.0);
        assert_eq!(s.ticks().collect::<Vec<_>>(), vec![0.0]);
    }

    #[test]
    fn ticks_cover_axis() {
        let s = ScaleModel::new(&[12_000.0], 100.0, 300.0);
        assert_eq!(s.ticks().collect::<Vec<_>>(), vec![0.0, 5000.0, 10_000.0, 15_000.0]);
        assert!(s.to_px(15_000.0).abs() < 1e-9);
        assert_eq!(s.bar_width, 100.0);
    }

    #[test]
    fn corrupt_total_keeps_tick_count_bounded() {
        let s = ScaleModel::new(&[1e300, 12_000.0], 100.0, 300.0);
        let ticks: Vec<_> = s.ticks().collect();
        assert!(ticks.len() <= MAX_VALUE_TICKS + 1, "{} ticks", ticks.len());
        assert_eq!(ticks[0], 0.0);
        assert!(ticks.windows(2).all(|w| w[1] > w[0]));
        assert!(ticks.iter().all(|t| *t <= s.max_axis_value));

        let s = ScaleModel::new(&[f64::MAX], 100.0, 300.0);
        assert!(s.ticks().count() <= MAX_VALUE_TICKS + 1);
    }
}
