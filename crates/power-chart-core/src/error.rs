// File: crates/power-chart-core/src/error.rs
// Summary: Typed errors for the chart engine.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// The source table has no timestamps, so nothing can be rendered.
    #[error("series table is empty; no latest timestamp")]
    EmptySeries,

    /// A pattern tile could not be read or decoded. Never fatal to a render.
    #[error("pattern asset {path} failed to load: {reason}")]
    AssetLoad { path: PathBuf, reason: String },

    /// `plot_type` outside 0..=3; raised by the calling layer only.
    #[error("invalid plot type {0} (expected 0-3)")]
    InvalidPlotType(u8),

    #[error("config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("surface: {0}")]
    Surface(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
