// File: crates/power-chart-core/src/time.rs
// Summary: Canonical 10-minute time buckets over the 36-hour display window.

use chrono::{Duration, NaiveDateTime, Timelike};

use crate::types::{BUCKET_MINUTES, LABEL_HOUR_INTERVAL, LOOKBACK_HOURS};

/// Second-precision, timezone-naive key format shared with the series store.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// The display window: from `now - 36h` (truncated to the hour) through `now`.
///
/// Iterating a grid is cheap and restartable; buckets are recomputed on demand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeGrid {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeGrid {
    pub fn ending_at(now: NaiveDateTime) -> Self {
        let start = truncate_to_hour(now - Duration::hours(LOOKBACK_HOURS));
        Self { start, end: now }
    }

    pub fn start(&self) -> NaiveDateTime { self.start }
    pub fn end(&self) -> NaiveDateTime { self.end }

    /// Number of buckets; never zero since the start never passes `now`.
    pub fn len(&self) -> usize {
        let minutes = (self.end - self.start).num_minutes().max(0);
        usize::try_from(minutes / BUCKET_MINUTES).unwrap_or(0) + 1
    }

    pub fn is_empty(&self) -> bool { false }

    pub fn iter(&self) -> Buckets {
        Buckets { next: self.start, end: self.end, index: 0 }
    }

    /// Bucket keys, formatted like the series table's timestamps.
    pub fn timestamps(&self) -> impl Iterator<Item = String> {
        self.iter().map(|b| b.key())
    }
}

impl<'a> IntoIterator for &'a TimeGrid {
    type Item = TimeBucket;
    type IntoIter = Buckets;

    fn into_iter(self) -> Buckets {
        self.iter()
    }
}

/// One x-axis slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeBucket {
    pub index: usize,
    pub at: NaiveDateTime,
}

impl TimeBucket {
    pub fn key(&self) -> String {
        self.at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// `MM-DD HH:MM`, as printed under the time axis.
    pub fn label(&self) -> String {
        self.at.format("%m-%d %H:%M").to_string()
    }

    /// On the hour, every six hours.
    pub fn is_label_slot(&self) -> bool {
        self.at.minute() == 0 && self.at.hour() % LABEL_HOUR_INTERVAL == 0
    }
}

#[derive(Clone, Debug)]
pub struct Buckets {
    next: NaiveDateTime,
    end: NaiveDateTime,
    index: usize,
}

impl Iterator for Buckets {
    type Item = TimeBucket;

    fn next(&mut self) -> Option<TimeBucket> {
        if self.next > self.end {
            return None;
        }
        let bucket = TimeBucket { index: self.index, at: self.next };
        self.next += Duration::minutes(BUCKET_MINUTES);
        self.index += 1;
        Some(bucket)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.next > self.end {
            return (0, Some(0));
        }
        let minutes = (self.end - self.next).num_minutes();
        let n = usize::try_from(minutes / BUCKET_MINUTES).unwrap_or(0) + 1;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Buckets {}

fn truncate_to_hour(t: NaiveDateTime) -> NaiveDateTime {
    t - Duration::minutes(i64::from(t.minute()))
        - Duration::seconds(i64::from(t.second()))
        - Duration::nanoseconds(i64::from(t.nanosecond()))
}

/// Parse a store key (`YYYY-MM-DDTHH:MM:SS`, optional fraction / trailing `Z`).
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim().trim_end_matches('Z');
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .ok()
}
