// File: crates/power-chart-core/src/chart.rs
// Summary: ChartRenderer: aggregate -> scale -> paths -> axes -> legend, then flush the scene to an SVG canvas.

use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use skia_safe as skia;
use tracing::{debug, info};

use crate::aggregate::aggregate;
use crate::axis::AxisLayout;
use crate::config::{RenderConfig, RenderRequest};
use crate::error::Result;
use crate::geometry::{Point, Polygon};
use crate::legend::LegendLayout;
use crate::path::build_paths;
use crate::pattern::{PatternAssets, PatternCache};
use crate::scale::ScaleModel;
use crate::scene::{ChartScene, DrawCommand};
use crate::series::SeriesTable;
use crate::text::{TextMeasure, TextShaper};
use crate::theme::Theme;
use crate::time::TimeGrid;
use crate::types::Insets;

/// Renders a series table into a stacked generation-mix SVG.
///
/// Holds only read-only configuration. Every render builds its own scene,
/// text shaper, and pattern cache, so renders can run in parallel.
#[derive(Clone, Debug)]
pub struct ChartRenderer {
    config: RenderConfig,
    assets: PatternAssets,
    insets: Insets,
    theme: Theme,
}

impl ChartRenderer {
    pub fn new(config: RenderConfig) -> Self {
        let assets = PatternAssets::new(config.asset_dir.clone());
        Self { config, assets, insets: Insets::default(), theme: Theme::default() }
    }

    /// Lay out the whole chart as draw commands. Pure: no I/O, no clock.
    ///
    /// Fails with `EmptySeries` when the table has no timestamps.
    pub fn build_scene(
        &self,
        table: &SeriesTable,
        request: &RenderRequest,
        now: NaiveDateTime,
        measure: &dyn TextMeasure,
    ) -> Result<ChartScene> {
        let latest = table.latest_timestamp()?;
        let grid = TimeGrid::ending_at(now);
        let (chart_width, chart_height) = self.insets.inner_size(request.width, request.height);

        let agg = aggregate(table, request.mode, &grid);
        let scale = ScaleModel::new(&agg.totals(), chart_width, chart_height);
        debug!(
            buckets = agg.len(),
            latest,
            max_axis_value = scale.max_axis_value,
            mode = ?request.mode,
            "chart layout"
        );

        let origin = Point::new(f64::from(self.insets.left), f64::from(self.insets.top));
        let mut scene = ChartScene::new(request.width, request.height, origin);

        for (polygon, group) in build_paths(&agg, &scale).into_iter().zip(request.mode.draw_order()) {
            if polygon.is_empty() {
                continue;
            }
            scene.push(DrawCommand::Ribbon { polygon, pattern: group.pattern });
        }
        AxisLayout::compute(&grid, &scale, &self.insets, measure).push_commands(&mut scene, &scale);
        LegendLayout::compute(request.mode, chart_width, measure).push_commands(&mut scene);
        Ok(scene)
    }

    /// Render to SVG bytes without touching the output directory.
    pub fn render_to_svg_bytes(&self, table: &SeriesTable, request: &RenderRequest, now: NaiveDateTime) -> Result<Vec<u8>> {
        let shaper = TextShaper::new(&self.config.font_families, self.config.font_size);
        let scene = self.build_scene(table, request, now, &shaper)?;
        Ok(self.flush_svg(&scene, &shaper))
    }

    /// Render and write `plot_<w>x<h>.svg`; returns the written path.
    pub fn render_at(&self, table: &SeriesTable, request: &RenderRequest, now: NaiveDateTime) -> Result<PathBuf> {
        let bytes = self.render_to_svg_bytes(table, request, now)?;
        let path = self.config.output_path(request.width, request.height);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, bytes)?;
        info!(path = %path.display(), "wrote chart");
        Ok(path)
    }

    /// Render against the local wall clock.
    pub fn render(&self, table: &SeriesTable, request: &RenderRequest) -> Result<PathBuf> {
        self.render_at(table, request, Local::now().naive_local())
    }

    fn flush_svg(&self, scene: &ChartScene, shaper: &TextShaper) -> Vec<u8> {
        let canvas = skia::svg::Canvas::new(skia::Rect::from_iwh(scene.width, scene.height), None);
        let mut patterns = PatternCache::new(&self.assets);
        let outline = self.theme.outline_paint();
        let grid = self.theme.grid_paint();

        canvas.save();
        canvas.translate((scene.origin.x as f32, scene.origin.y as f32));
        for cmd in &scene.commands {
            match cmd {
                DrawCommand::Ribbon { polygon, pattern } => {
                    let path = to_skia_path(polygon);
                    if let Some(shader) = patterns.get(*pattern) {
                        canvas.draw_path(&path, &pattern_fill(shader));
                    }
                    canvas.draw_path(&path, &outline);
                }
                DrawCommand::GridLine { from, to } => {
                    canvas.draw_line(to_skia_point(*from), to_skia_point(*to), &grid);
                }
                DrawCommand::Text { text, at } => {
                    shaper.draw_left(&canvas, text, at.x as f32, at.y as f32, self.theme.text);
                }
                DrawCommand::Swatch { center, radius, pattern } => {
                    // a missing tile drops the swatch; its label is still drawn
                    if let Some(shader) = patterns.get(*pattern) {
                        let c = to_skia_point(*center);
                        canvas.draw_circle(c, *radius as f32, &pattern_fill(shader));
                        canvas.draw_circle(c, *radius as f32, &outline);
                    }
                }
            }
        }
        canvas.restore();
        canvas.end().as_bytes().to_vec()
    }
}

fn pattern_fill(shader: skia::Shader) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    p.set_shader(shader);
    p
}

fn to_skia_point(p: Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

fn to_skia_path(polygon: &Polygon) -> skia::Path {
    let pts: Vec<skia::Point> = polygon.points.iter().copied().map(to_skia_point).collect();
    skia::Path::polygon(&pts, true, None, None)
}
