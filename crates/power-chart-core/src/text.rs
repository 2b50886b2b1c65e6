// File: crates/power-chart-core/src/text.rs
// Summary: Text measurement seam plus a Skia textlayout shaper for labels (CJK-capable font fallback).

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Measures label text so layout can place and suppress labels.
pub trait TextMeasure {
    /// Advance width in pixels.
    fn text_width(&self, text: &str) -> f64;
    /// Ink height in pixels; the unit label is raised by this much.
    fn text_height(&self, text: &str) -> f64;
}

/// Every character advances the same amount. Used for headless layout and tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvance {
    pub advance: f64,
    pub ascent: f64,
}

impl FixedAdvance {
    pub const fn new(advance: f64, ascent: f64) -> Self {
        Self { advance, ascent }
    }
}

impl TextMeasure for FixedAdvance {
    fn text_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.advance
    }
    fn text_height(&self, _text: &str) -> f64 {
        self.ascent
    }
}

pub const DEFAULT_FONT_FAMILIES: &[&str] = &["Noto Sans TC", "Noto Sans CJK TC", "DejaVu Sans", "Arial", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
    families: Vec<String>,
    size: f32,
}

impl TextShaper {
    pub fn new(families: &[String], size: f32) -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        let families = if families.is_empty() {
            DEFAULT_FONT_FAMILIES.iter().map(|s| s.to_string()).collect()
        } else {
            families.to_vec()
        };
        Self { fonts: fc, families, size: size.max(1.0) }
    }

    fn make_style(&self, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(self.size);
        ts.set_color(color);
        ts.set_font_families(self.families.as_slice());
        ts
    }

    pub fn layout(&self, text: &str, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&self.make_style(color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` with its baseline starting at (`x`, `y`).
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, color: skia::Color) {
        let mut p = self.layout(text, color);
        let ascent = p.alphabetic_baseline();
        p.paint(canvas, (x, y - ascent));
    }
}

impl TextMeasure for TextShaper {
    fn text_width(&self, text: &str) -> f64 {
        let p = self.layout(text, skia::Color::TRANSPARENT);
        // width of the longest line
        f64::from(p.longest_line())
    }

    /// Ink height of the shaped glyphs; falls back to the ascent when nothing has bounds.
    fn text_height(&self, text: &str) -> f64 {
        let mut p = self.layout(text, skia::Color::TRANSPARENT);
        let (mut top, mut bottom) = (f32::INFINITY, f32::NEG_INFINITY);
        p.visit(|_, info| {
            let Some(info) = info else { return };
            let glyphs = info.glyphs();
            let mut bounds = vec![skia::Rect::default(); glyphs.len()];
            info.font().get_bounds(glyphs, &mut bounds, None);
            for b in bounds.iter().filter(|b| !b.is_empty()) {
                top = top.min(b.top);
                bottom = bottom.max(b.bottom);
            }
        });
        if top <= bottom {
            f64::from(bottom - top)
        } else {
            f64::from(p.alphabetic_baseline())
        }
    }
}
