// File: crates/power-chart-core/tests/layout.rs
// Purpose: Axis scaling, ribbon geometry, label suppression, legend centering, and scene idempotence.

use chrono::NaiveDateTime;
use power_chart_core::axis::time_ticks;
use power_chart_core::geometry::Polygon;
use power_chart_core::scale::axis_max;
use power_chart_core::time::parse_timestamp;
use power_chart_core::{
    aggregate, build_paths, CategoryId, ChartError, ChartRenderer, DrawCommand, FixedAdvance, LegendLayout,
    PresentationMode, RenderConfig, RenderRequest, ScaleModel, SeriesTable, TimeGrid,
};
use proptest::prelude::*;

const NOON: &str = "2023-05-15T12:00:00";
const CHART_W: f64 = 746.0;
const CHART_H: f64 = 385.0;

fn now() -> NaiveDateTime {
    parse_timestamp(NOON).expect("valid")
}

fn measure() -> FixedAdvance {
    FixedAdvance::new(6.0, 9.0)
}

/// A table where every other hour is missing, with a solar bump at midday.
fn sample_table() -> SeriesTable {
    let mut table = SeriesTable::new();
    for (i, bucket) in TimeGrid::ending_at(now()).iter().enumerate() {
        if (i / 6) % 2 == 1 {
            continue;
        }
        let key = bucket.key();
        table.insert(key.as_str(), "coal", 9000.0 + i as f64 * 10.0);
        table.insert(key.as_str(), "lng", 12000.0);
        table.insert(key.as_str(), "nuclear", 1800.0);
        table.insert(key.as_str(), "solar", if (60..150).contains(&i) { 4000.0 } else { 0.0 });
        table.insert(key.as_str(), "wind", 700.0);
    }
    table
}

/// Top edge stays above the bottom edge column by column, and x never runs backward.
fn assert_simple_ribbon(p: &Polygon) {
    let n = p.points.len();
    assert_eq!(n % 4, 0);
    let half = n / 2;
    let (top, bottom_rev) = p.points.split_at(half);
    for (i, t) in top.iter().enumerate() {
        let b = bottom_rev[half - 1 - i];
        assert_eq!(t.x, b.x);
        assert!(t.y <= b.y + 1e-9, "top {} below bottom {}", t.y, b.y);
    }
    for w in top.windows(2) {
        assert!(w[1].x >= w[0].x);
    }
}

#[test]
fn axis_max_from_totals() {
    let table = sample_table();
    let agg = aggregate(&table, PresentationMode::ShowAll, &TimeGrid::ending_at(now()));
    let scale = ScaleModel::new(&agg.totals(), CHART_W, CHART_H);
    let max_total = agg.totals().into_iter().fold(0.0, f64::max);
    assert_eq!(scale.max_axis_value, 30_000.0);
    assert!(scale.max_axis_value >= max_total);
    assert!((scale.bar_width - CHART_W / 217.0).abs() < 1e-9);
}

#[test]
fn ribbons_tile_each_bar_exactly() {
    let table = sample_table();
    let grid = TimeGrid::ending_at(now());
    for mode in PresentationMode::ALL {
        let agg = aggregate(&table, mode, &grid);
        let scale = ScaleModel::new(&agg.totals(), CHART_W, CHART_H);
        let polys = build_paths(&agg, &scale);
        assert_eq!(polys.len(), mode.group_count());
        for p in &polys {
            assert_simple_ribbon(p);
        }
        // bottom edge of the lowest ribbon sits on the baseline everywhere
        let lowest = polys.last().expect("at least one group");
        let half = lowest.points.len() / 2;
        assert!(lowest.points[half..].iter().all(|pt| (pt.y - CHART_H).abs() < 1e-6));
    }
}

#[test]
fn missing_bucket_has_zero_height_in_its_slot() {
    let table = sample_table();
    let grid = TimeGrid::ending_at(now());
    let agg = aggregate(&table, PresentationMode::ShowAll, &grid);
    let scale = ScaleModel::new(&agg.totals(), CHART_W, CHART_H);
    let polys = build_paths(&agg, &scale);

    let idx = 7; // hour 1 of the window is absent
    assert!(!agg.buckets[idx].present);
    let top_layer = &polys[0];
    let left = top_layer.points[idx * 2];
    let right = top_layer.points[idx * 2 + 1];
    assert!((left.x - idx as f64 * scale.bar_width).abs() < 1e-9);
    assert!((right.x - left.x - scale.bar_width).abs() < 1e-9);
    assert_eq!(left.y, CHART_H);
    let n = top_layer.points.len();
    assert_eq!(top_layer.points[n - 1 - idx * 2].y, CHART_H);
}

#[test]
fn ribbon_area_scales_linearly() {
    let table = sample_table();
    let agg = aggregate(&table, PresentationMode::LngCoalAndOther, &TimeGrid::ending_at(now()));
    let small = ScaleModel::new(&agg.totals(), CHART_W, CHART_H);
    let large = ScaleModel::new(&agg.totals(), CHART_W, CHART_H * 2.0);
    assert!((large.value_scale / small.value_scale - 2.0).abs() < 1e-9);
    for (a, b) in build_paths(&agg, &small).iter().zip(build_paths(&agg, &large).iter()) {
        assert!((b.area() - 2.0 * a.area()).abs() < 1e-6 * b.area().max(1.0));
    }
}

#[test]
fn last_time_label_suppressed_on_overflow() {
    let grid = TimeGrid::ending_at(now());
    let scale = ScaleModel::new(&vec![1.0; grid.len()], CHART_W, CHART_H);
    let ticks = time_ticks(&grid, &scale, &measure());
    assert_eq!(ticks.len(), 7);
    let (last, earlier) = ticks.split_last().expect("ticks");
    assert!(!last.show_label);
    assert!(earlier.iter().all(|t| t.show_label));

    // the gridline survives in the scene, the label text does not
    let renderer = ChartRenderer::new(RenderConfig::default());
    let scene = renderer
        .build_scene(&sample_table(), &RenderRequest::default(), now(), &measure())
        .expect("scene");
    let vertical_lines = scene.grid_lines().filter(|(a, b)| a.x == b.x).count();
    assert_eq!(vertical_lines, 7);
    assert!(!scene.texts().any(|(t, _)| t == "05-15 12:00"));
    assert!(scene.texts().any(|(t, _)| t == "05-15 06:00"));
}

#[test]
fn last_time_label_kept_when_it_fits() {
    let grid = TimeGrid::ending_at(parse_timestamp("2023-05-15T16:00:00").expect("valid"));
    let scale = ScaleModel::new(&vec![1.0; grid.len()], CHART_W, CHART_H);
    let ticks = time_ticks(&grid, &scale, &measure());
    assert!(ticks.iter().all(|t| t.show_label));
}

#[test]
fn legend_centered_in_semantic_order() {
    let legend = LegendLayout::compute(PresentationMode::ShowAll, CHART_W, &measure());
    let labels: Vec<_> = legend.items.iter().map(|i| i.label).collect();
    assert_eq!(labels, vec!["燃煤", "燃氣", "燃油", "水力", "風力", "太陽能", "核能、其他再生、儲能"]);
    // 7 items * (12 + 2 * 5) + 23 chars * 6
    assert_eq!(legend.total_width, 292.0);
    assert_eq!(legend.start_x, (CHART_W - 292.0) / 2.0);
    assert_eq!(legend.items[0].x, legend.start_x);
    let last = legend.items.last().expect("items");
    assert!((last.x + last.width - (legend.start_x + legend.total_width)).abs() < 1e-9);
    assert_eq!(legend.y, -16.0);
}

#[test]
fn legend_patterns_follow_mode_table() {
    let legend = LegendLayout::compute(PresentationMode::LngCoalAndOther, CHART_W, &measure());
    let patterns: Vec<u8> = legend.items.iter().map(|i| i.pattern.0).collect();
    assert_eq!(patterns, vec![1, 4, 6]);
}

#[test]
fn value_axis_has_one_line_per_step() {
    let renderer = ChartRenderer::new(RenderConfig::default());
    let scene = renderer
        .build_scene(&sample_table(), &RenderRequest::default(), now(), &measure())
        .expect("scene");
    let horizontal = scene.grid_lines().filter(|(a, b)| a.y == b.y).count();
    assert_eq!(horizontal, 7); // 0, 5k, ... 30k
    for label in ["0", "5", "30", "百萬瓩"] {
        assert!(scene.texts().any(|(t, _)| t == label), "missing {label}");
    }
}

#[test]
fn ribbons_drawn_top_layer_first() {
    let renderer = ChartRenderer::new(RenderConfig::default());
    let request = RenderRequest::new(780, 460, PresentationMode::LngCoalAndOther);
    let scene = renderer.build_scene(&sample_table(), &request, now(), &measure()).expect("scene");
    let patterns: Vec<u8> = scene.ribbons().map(|(_, p)| p.0).collect();
    assert_eq!(patterns, vec![6, 4, 1]);
    assert!(matches!(scene.commands.first(), Some(DrawCommand::Ribbon { .. })));
}

#[test]
fn scene_is_idempotent() {
    let renderer = ChartRenderer::new(RenderConfig::default());
    let table = sample_table();
    for mode in PresentationMode::ALL {
        let request = RenderRequest::new(640, 400, mode);
        let a = renderer.build_scene(&table, &request, now(), &measure()).expect("scene");
        let b = renderer.build_scene(&table, &request, now(), &measure()).expect("scene");
        assert_eq!(a, b);
    }
}

#[test]
fn all_zero_totals_collapse_to_baseline() {
    let mut table = SeriesTable::new();
    table.insert(NOON, CategoryId::Coal.as_str(), 0.0);
    let renderer = ChartRenderer::new(RenderConfig::default());
    let scene = renderer
        .build_scene(&table, &RenderRequest::default(), now(), &measure())
        .expect("degenerate scale is not an error");
    for (poly, _) in scene.ribbons() {
        assert!(poly.points.iter().all(|p| p.y == CHART_H));
    }
    let horizontal = scene.grid_lines().filter(|(a, b)| a.y == b.y).count();
    assert_eq!(horizontal, 1);
}

#[test]
fn empty_series_is_rejected() {
    let renderer = ChartRenderer::new(RenderConfig::default());
    let err = renderer
        .build_scene(&SeriesTable::new(), &RenderRequest::default(), now(), &measure())
        .expect_err("empty table");
    assert!(matches!(err, ChartError::EmptySeries));
}

proptest! {
    #[test]
    fn axis_max_is_a_covering_multiple(totals in proptest::collection::vec(0.0f64..200_000.0, 0..300)) {
        let m = axis_max(&totals, 5000.0);
        let max = totals.iter().copied().fold(0.0, f64::max);
        prop_assert!(m >= 0.0);
        prop_assert!(m >= max);
        prop_assert_eq!(m % 5000.0, 0.0);
        prop_assert!(m - max < 5000.0 || max == 0.0);
    }
}
