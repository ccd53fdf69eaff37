// File: crates/miniplot-core/benches/render_bench.rs
// Summary: Layout and PNG encoding cost for line and bar charts of growing size.

use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use miniplot_core::{Chart, ChartKind, ChartParams, ChartSpec, DecodedSeries, RenderOptions, Series};

fn build_chart(kind: ChartKind, n: usize) -> Result<Chart> {
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let y: Vec<f64> = (0..n).map(|i| (i as f64 * 0.01).sin() * 10.0 + i as f64 * 0.0001).collect();
    let decoded = DecodedSeries::new("bench", vec![Series::from_numbers(&x), Series::from_numbers(&y)]);
    Ok(Chart::new(ChartSpec::build(kind, decoded, ChartParams::default())?))
}

fn bench_render(c: &mut Criterion) {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;

    let mut group = c.benchmark_group("render_png_bytes");
    for &(kind, n) in &[(ChartKind::Line, 10_000usize), (ChartKind::Line, 50_000), (ChartKind::Bar, 500)] {
        group.bench_function(format!("{}_{n}", kind.slug()), |b| {
            let chart = build_chart(kind, n).expect("bench chart");
            b.iter(|| -> Result<()> {
                let bytes = chart.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();

    let chart = build_chart(ChartKind::Area, 50_000).expect("bench chart");
    c.bench_function("layout_area_50000", |b| b.iter(|| black_box(chart.scene(&opts))));
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
