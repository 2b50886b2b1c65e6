// File: crates/power-chart-core/src/types.rs
// Summary: Shared constants (default sizes, axis/bucket steps, legend metrics) and margins.

/// Default surface width in pixels.
pub const WIDTH: i32 = 780;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 460;

/// Value-axis step; one gridline per multiple.
pub const AXIS_STEP: f64 = 5000.0;
/// Value-axis labels are printed in thousands.
pub const AXIS_LABEL_DIVISOR: f64 = 1000.0;

/// Spacing between time buckets, in minutes.
pub const BUCKET_MINUTES: i64 = 10;
/// Display window length, in hours.
pub const LOOKBACK_HOURS: i64 = 36;
/// Time-axis labels land on hours divisible by this.
pub const LABEL_HOUR_INTERVAL: u32 = 6;

pub const LEGEND_CIRCLE_DIAMETER: f64 = 12.0;
pub const LEGEND_PADDING: f64 = 5.0;
/// Gap between the legend row and the top of the chart area.
pub const LEGEND_GAP: f64 = 4.0;

/// Unit annotation above the value axis; labels are MW / 1000, i.e. million kW.
pub const VALUE_UNIT_LABEL: &str = "百萬瓩";

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }

    /// Size of the chart area left after removing the margins from a `width` x `height` canvas.
    pub fn inner_size(&self, width: i32, height: i32) -> (f64, f64) {
        (
            f64::from(width) - f64::from(self.hsum()),
            f64::from(height) - f64::from(self.vsum()),
        )
    }
}

impl Default for Insets {
    /// Top reserves room for the legend; right and bottom for axis labels.
    fn default() -> Self {
        Self::new(10, 24, 55, 20)
    }
}
