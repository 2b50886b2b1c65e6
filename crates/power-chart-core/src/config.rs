// File: crates/power-chart-core/src/config.rs
// Summary: Renderer configuration (TOML) and the per-request query parameters.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::mode::PresentationMode;
use crate::text::DEFAULT_FONT_FAMILIES;
use crate::types::{HEIGHT, WIDTH};

/// Where assets live and where charts are written.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub output_dir: PathBuf,
    pub asset_dir: PathBuf,
    pub font_size: f32,
    pub font_families: Vec<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("www"),
            asset_dir: PathBuf::from("www").join("img"),
            font_size: 12.0,
            font_families: DEFAULT_FONT_FAMILIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl RenderConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Output is keyed by pixel size. Two concurrent renders of the same size
    /// write the same file; the last writer wins.
    pub fn output_path(&self, width: i32, height: i32) -> PathBuf {
        self.output_dir.join(format!("plot_{width}x{height}.svg"))
    }
}

/// The chart endpoint's query parameters, already validated by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderRequest {
    pub width: i32,
    pub height: i32,
    #[serde(rename = "plot_type")]
    pub mode: PresentationMode,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, mode: PresentationMode::ShowAll }
    }
}

impl RenderRequest {
    pub fn new(width: i32, height: i32, mode: PresentationMode) -> Self {
        Self { width, height, mode }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = RenderConfig::from_toml_str("output_dir = \"/tmp/out\"\n").expect("parse");
        assert_eq!(cfg.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(cfg.asset_dir, PathBuf::from("www").join("img"));
        assert_eq!(cfg.font_size, 12.0);
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        let err = RenderConfig::from_toml_str("font_size = \"big\"").expect_err("type mismatch");
        assert!(matches!(err, crate::ChartError::Config(_)));
    }

    #[test]
    fn output_path_keyed_by_size() {
        let cfg = RenderConfig::default();
        assert_eq!(cfg.output_path(780, 460), PathBuf::from("www").join("plot_780x460.svg"));
    }

    #[test]
    fn request_defaults() {
        let r = RenderRequest::default();
        assert_eq!((r.width, r.height, r.mode), (780, 460, PresentationMode::ShowAll));
    }
}
