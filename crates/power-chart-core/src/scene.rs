// File: crates/power-chart-core/src/scene.rs
// Summary: Immutable draw commands accumulated per render, flushed to a surface in one pass.

use crate::geometry::{Point, Polygon};
use crate::mode::PatternId;

/// Coordinates are relative to the chart area (after the margin translation).
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Pattern-filled, outlined stacked region.
    Ribbon { polygon: Polygon, pattern: PatternId },
    /// Light dashed gridline.
    GridLine { from: Point, to: Point },
    /// Text with its baseline starting at `at`.
    Text { text: String, at: Point },
    /// Pattern-filled legend circle with a thin outline.
    Swatch { center: Point, radius: f64, pattern: PatternId },
}

/// Everything one render draws, in order. Owned by a single render call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartScene {
    pub width: i32,
    pub height: i32,
    /// Translation applied before drawing commands (left/top margins).
    pub origin: Point,
    pub commands: Vec<DrawCommand>,
}

impl ChartScene {
    pub fn new(width: i32, height: i32, origin: Point) -> Self {
        Self { width, height, origin, commands: Vec::new() }
    }

    pub fn push(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }

    pub fn text(&mut self, text: impl Into<String>, at: Point) {
        self.push(DrawCommand::Text { text: text.into(), at });
    }

    pub fn grid_line(&mut self, from: Point, to: Point) {
        self.push(DrawCommand::GridLine { from, to });
    }

    pub fn ribbons(&self) -> impl Iterator<Item = (&Polygon, PatternId)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Ribbon { polygon, pattern } => Some((polygon, *pattern)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Point)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, at } => Some((text.as_str(), *at)),
            _ => None,
        })
    }

    pub fn grid_lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::GridLine { from, to } => Some((*from, *to)),
            _ => None,
        })
    }
}
