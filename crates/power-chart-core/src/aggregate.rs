// File: crates/power-chart-core/src/aggregate.rs
// Summary: Collapse a sparse series table into per-bucket stacked group values (gap-filled).

use crate::mode::PresentationMode;
use crate::series::{Reading, SeriesTable};
use crate::time::{TimeBucket, TimeGrid};

/// One bucket's stacked values.
#[derive(Clone, Debug, PartialEq)]
pub struct BucketStack {
    pub bucket: TimeBucket,
    /// False when the table had no row for this bucket (all values zero).
    pub present: bool,
    /// Sum of all 13 categories.
    pub total: f64,
    /// Group values in draw order: index 0 is the top layer.
    pub groups: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Aggregation {
    pub mode: PresentationMode,
    pub buckets: Vec<BucketStack>,
}

impl Aggregation {
    /// Grand totals per bucket, in bucket order.
    pub fn totals(&self) -> Vec<f64> {
        self.buckets.iter().map(|b| b.total).collect()
    }

    pub fn group_count(&self) -> usize {
        self.mode.group_count()
    }

    pub fn len(&self) -> usize { self.buckets.len() }
    pub fn is_empty(&self) -> bool { self.buckets.is_empty() }
}

/// Group values for one reading in semantic order (before the draw-order reversal).
pub fn group_values(reading: &Reading, mode: PresentationMode) -> Vec<f64> {
    mode.groups().iter().map(|g| reading.sum_of(g.categories)).collect()
}

/// Walk every grid bucket; missing buckets still take their slot with zeros.
pub fn aggregate(table: &SeriesTable, mode: PresentationMode, grid: &TimeGrid) -> Aggregation {
    let empty = Reading::new();
    let buckets = grid
        .iter()
        .map(|bucket| {
            let found = table.get(&bucket.key());
            let reading = found.unwrap_or(&empty);
            let mut groups = group_values(reading, mode);
            groups.reverse();
            BucketStack {
                bucket,
                present: found.is_some(),
                total: reading.grand_total(),
                groups,
            }
        })
        .collect();
    Aggregation { mode, buckets }
}
