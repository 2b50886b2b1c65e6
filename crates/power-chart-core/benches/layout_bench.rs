use chrono::NaiveDateTime;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use power_chart_core::time::parse_timestamp;
use power_chart_core::{
    aggregate, build_paths, CategoryId, ChartRenderer, FixedAdvance, PresentationMode, RenderConfig, RenderRequest,
    ScaleModel, SeriesTable, TimeGrid,
};

fn now() -> NaiveDateTime {
    parse_timestamp("2023-05-15T12:00:00").unwrap_or_default()
}

fn full_table() -> SeriesTable {
    let mut t = SeriesTable::new();
    for bucket in &TimeGrid::ending_at(now()) {
        let key = bucket.key();
        for (k, c) in CategoryId::ALL.iter().enumerate() {
            let v = 500.0 + (bucket.index * 7 + k * 13) as f64 % 900.0;
            t.insert(key.as_str(), c.as_str(), v);
        }
    }
    t
}

fn bench_layout(c: &mut Criterion) {
    let table = full_table();
    let grid = TimeGrid::ending_at(now());
    let mut group = c.benchmark_group("layout");
    for mode in PresentationMode::ALL {
        group.bench_function(format!("paths_{}", u8::from(mode)), |b| {
            b.iter(|| {
                let agg = aggregate(&table, mode, &grid);
                let scale = ScaleModel::new(&agg.totals(), 746.0, 385.0);
                black_box(build_paths(&agg, &scale));
            });
        });
    }
    let renderer = ChartRenderer::new(RenderConfig::default());
    let measure = FixedAdvance::new(6.0, 9.0);
    group.bench_function("scene_show_all", |b| {
        let request = RenderRequest::default();
        b.iter(|| black_box(renderer.build_scene(&table, &request, now(), &measure)));
    });
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
