// File: crates/power-chart-core/src/path.rs
// Summary: Build one closed ribbon polygon per stacked group across all buckets.

use crate::aggregate::Aggregation;
use crate::geometry::{Point, Polygon};
use crate::scale::ScaleModel;

/// Accumulates top and bottom edges per group while walking buckets left to right.
#[derive(Clone, Debug, Default)]
pub struct PathBuilder {
    tops: Vec<Vec<Point>>,
    bottoms: Vec<Vec<Point>>,
}

impl PathBuilder {
    pub fn new(groups: usize, buckets: usize) -> Self {
        Self {
            tops: vec![Vec::with_capacity(buckets * 2); groups],
            bottoms: vec![Vec::with_capacity(buckets * 2); groups],
        }
    }

    /// Stack `groups` (draw order, top layer first) downward from `top_y`.
    pub fn push_bucket(&mut self, x: f64, bar_width: f64, top_y: f64, groups: &[f64], scale: &ScaleModel) {
        let mut y = top_y;
        for ((value, top), bottom) in groups.iter().zip(self.tops.iter_mut()).zip(self.bottoms.iter_mut()) {
            let h = scale.to_height(*value);
            top.push(Point::new(x, y));
            top.push(Point::new(x + bar_width, y));
            bottom.push(Point::new(x, y + h));
            bottom.push(Point::new(x + bar_width, y + h));
            y += h;
        }
    }

    /// Top edge in bucket order, then bottom edge reversed; closing is implicit.
    pub fn finish(self) -> Vec<Polygon> {
        self.tops
            .into_iter()
            .zip(self.bottoms)
            .map(|(mut top, bottom)| {
                top.extend(bottom.into_iter().rev());
                Polygon::new(top)
            })
            .collect()
    }
}

/// One polygon per group, in draw order (index 0 is the top layer).
pub fn build_paths(agg: &Aggregation, scale: &ScaleModel) -> Vec<Polygon> {
    let mut builder = PathBuilder::new(agg.group_count(), agg.len());
    for stack in &agg.buckets {
        let x = scale.bucket_x(stack.bucket.index);
        let top_y = scale.to_px(stack.total);
        builder.push_bucket(x, scale.bar_width, top_y, &stack.groups, scale);
    }
    builder.finish()
}
