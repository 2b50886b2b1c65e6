// File: crates/power-chart-core/src/series.rs
// Summary: Time-series table of per-category generation readings, plus the store-facing row contract.
// Notes:
// - Category keys stay as raw strings so rows with keys outside the closed set
//   (e.g. `EnergyStorageSystemLoad`) survive ingestion; only the 13 known
//   categories are ever summed.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::category::CategoryId;
use crate::error::{ChartError, Result};

/// One subtotal row as returned by the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesRow {
    pub timestamp: String,
    #[serde(rename = "type")]
    pub category: String,
    pub generation: f64,
}

/// One category's value at one timestamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationSample {
    pub category: CategoryId,
    pub value: f64,
}

/// All category values at one timestamp.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reading(BTreeMap<String, f64>);

impl Reading {
    pub fn new() -> Self { Self::default() }

    /// Keeps the first value seen for a key.
    pub fn insert(&mut self, category: impl Into<String>, value: f64) {
        self.0.entry(category.into()).or_insert(value);
    }

    /// Missing categories read as zero.
    pub fn value(&self, category: CategoryId) -> f64 {
        self.0.get(category.as_str()).copied().unwrap_or(0.0)
    }

    pub fn sum_of(&self, categories: &[CategoryId]) -> f64 {
        categories.iter().map(|&c| self.value(c)).sum()
    }

    /// Sum of the 13 recognized categories; unrecognized keys are ignored.
    pub fn grand_total(&self) -> f64 {
        self.sum_of(&CategoryId::ALL)
    }

    pub fn samples(&self) -> impl Iterator<Item = GenerationSample> + '_ {
        CategoryId::ALL.into_iter().map(|category| GenerationSample { category, value: self.value(category) })
    }

    pub fn raw(&self) -> &BTreeMap<String, f64> { &self.0 }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Reading {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut r = Reading::new();
        for (k, v) in iter {
            r.insert(k, v);
        }
        r
    }
}

/// `timestamp -> category -> value`, ordered by timestamp key.
///
/// Keys are compared as strings; the store writes them in a fixed-width ISO
/// format so lexical order is chronological.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesTable(BTreeMap<String, Reading>);

impl SeriesTable {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, timestamp: impl Into<String>, category: impl Into<String>, value: f64) {
        self.0.entry(timestamp.into()).or_default().insert(category, value);
    }

    /// Group store rows by timestamp. A repeated (timestamp, category) keeps its first value.
    pub fn from_rows(rows: impl IntoIterator<Item = SeriesRow>) -> Self {
        let mut table = SeriesTable::new();
        for row in rows {
            table.insert(row.timestamp, row.category, row.generation);
        }
        table
    }

    /// Exact-key lookup.
    pub fn get(&self, timestamp: &str) -> Option<&Reading> {
        self.0.get(timestamp)
    }

    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Reading)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn latest_timestamp(&self) -> Result<&str> {
        self.0.keys().next_back().map(String::as_str).ok_or(ChartError::EmptySeries)
    }

    /// Total generation at the latest timestamp.
    pub fn plot_info(&self) -> Result<PlotInfo> {
        let (timestamp, reading) = self.0.iter().next_back().ok_or(ChartError::EmptySeries)?;
        Ok(PlotInfo {
            // truncation toward zero matches the integer the summary endpoint reports
            total_generation: reading.grand_total().trunc() as i64,
            timestamp: timestamp.clone(),
        })
    }
}

/// Headline numbers for the newest reading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotInfo {
    pub total_generation: i64,
    pub timestamp: String,
}

/// Where subtotal rows come from (a database, a CSV dump, a test fixture).
pub trait SeriesSource {
    /// All subtotal rows with `start <= timestamp <= end`, ordered by timestamp.
    fn subtotal_rows(&self, start: &str, end: &str) -> Result<Vec<SeriesRow>>;

    fn load_table(&self, start: &str, end: &str) -> Result<SeriesTable> {
        Ok(SeriesTable::from_rows(self.subtotal_rows(start, end)?))
    }
}

/// Query range covering the display window: two days back through tomorrow.
pub fn summary_window(today: NaiveDate) -> (String, String) {
    let start = today - Duration::days(2);
    let end = today + Duration::days(1);
    (start.format("%Y-%m-%d").to_string(), end.format("%Y-%m-%d").to_string())
}
