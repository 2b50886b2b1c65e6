// File: crates/power-chart-core/src/pattern.rs
// Summary: Load indexed gray pattern tiles as repeating Skia shaders.

use std::collections::HashMap;
use std::path::PathBuf;

use skia_safe as skia;
use tracing::warn;

use crate::error::{ChartError, Result};
use crate::mode::PatternId;

/// Directory of `gray-<id>.png` tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternAssets {
    dir: PathBuf,
}

impl PatternAssets {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, id: PatternId) -> PathBuf {
        self.dir.join(format!("gray-{}.png", id.0))
    }

    /// Read and decode one tile.
    pub fn load(&self, id: PatternId) -> Result<skia::Image> {
        let path = self.path_for(id);
        let bytes = std::fs::read(&path).map_err(|e| ChartError::AssetLoad { path: path.clone(), reason: e.to_string() })?;
        skia::images::deferred_from_encoded_data(skia::Data::new_copy(&bytes), None).ok_or_else(|| ChartError::AssetLoad {
            path,
            reason: "not a decodable image".to_string(),
        })
    }

    /// Tile as a shader repeating in both directions.
    pub fn shader(&self, id: PatternId) -> Result<skia::Shader> {
        let image = self.load(id)?;
        image
            .to_shader((skia::TileMode::Repeat, skia::TileMode::Repeat), skia::SamplingOptions::default(), None)
            .ok_or_else(|| ChartError::AssetLoad { path: self.path_for(id), reason: "shader creation failed".to_string() })
    }
}

/// Per-render memo of loaded shaders; a failed tile is logged once and remembered as missing.
pub struct PatternCache<'a> {
    assets: &'a PatternAssets,
    shaders: HashMap<PatternId, Option<skia::Shader>>,
}

impl<'a> PatternCache<'a> {
    pub fn new(assets: &'a PatternAssets) -> Self {
        Self { assets, shaders: HashMap::new() }
    }

    pub fn get(&mut self, id: PatternId) -> Option<skia::Shader> {
        let assets = self.assets;
        self.shaders
            .entry(id)
            .or_insert_with(|| match assets.shader(id) {
                Ok(s) => Some(s),
                Err(e) => {
                    warn!(pattern = id.0, error = %e, "could not load pattern image; skipping fill");
                    None
                }
            })
            .clone()
    }
}
