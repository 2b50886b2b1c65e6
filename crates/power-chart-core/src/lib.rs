// File: crates/power-chart-core/src/lib.rs
// Summary: Core library entry point; exports the generation-mix chart engine.

pub mod aggregate;
pub mod axis;
pub mod category;
pub mod chart;
pub mod config;
pub mod error;
pub mod geometry;
pub mod legend;
pub mod mode;
pub mod path;
pub mod pattern;
pub mod scale;
pub mod scene;
pub mod series;
pub mod text;
pub mod theme;
pub mod time;
pub mod types;

pub use aggregate::{aggregate, Aggregation, BucketStack};
pub use axis::AxisLayout;
pub use category::CategoryId;
pub use chart::ChartRenderer;
pub use config::{RenderConfig, RenderRequest};
pub use error::{ChartError, Result};
pub use legend::LegendLayout;
pub use mode::{GroupSpec, PatternId, PresentationMode};
pub use path::{build_paths, PathBuilder};
pub use scale::ScaleModel;
pub use scene::{ChartScene, DrawCommand};
pub use series::{PlotInfo, Reading, SeriesRow, SeriesSource, SeriesTable};
pub use text::{FixedAdvance, TextMeasure, TextShaper};
pub use time::{TimeBucket, TimeGrid};
