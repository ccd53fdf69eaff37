// File: crates/miniplot-core/benches/histogram_bench.rs
// Summary: Binning throughput for the histogram chart.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use miniplot_core::spec::default_bin_count;
use miniplot_core::Histogram;

fn gen_data(n: usize) -> Vec<f64> {
    // Deterministic, roughly bell-shaped samples
    (0..n)
        .map(|i| {
            let t = i as f64 * 0.618_033_988_75;
            (t.fract() + (t * 1.7).fract() + (t * 2.3).fract()) * 100.0
        })
        .collect()
}

fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram_compute");
    for &n in &[10_000usize, 100_000, 1_000_000] {
        let data = gen_data(n);
        let bins = default_bin_count(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter(|| black_box(Histogram::compute(black_box(data), bins)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_histogram);
criterion_main!(benches);
