//! Criterion benchmarks for cadence-dtw: full match with path, rolling distance, and warping.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use cadence_dtw::{Matcher, MatcherConfig, SignalBuffer, WarpingWindow};

fn make_sine_signal(n: usize, phase: f64) -> SignalBuffer {
    let values: Vec<f64> = (0..n).map(|i| (i as f64 * 0.1 + phase).sin()).collect();
    SignalBuffer::new(values, 16_000)
}

fn bench_compute(c: &mut Criterion) {
    let lengths = [64usize, 256, 1024];
    let windows: &[(WarpingWindow, &str)] = &[
        (WarpingWindow::Unconstrained, "unconstrained"),
        (WarpingWindow::SakoeChiba { radius: 10 }, "band_r10"),
    ];

    let mut group = c.benchmark_group("compute");

    for &len in &lengths {
        for &(window, label) in windows {
            let id = BenchmarkId::new(format!("len{len}"), label);
            let x = make_sine_signal(len, 0.0);
            let y = make_sine_signal(len, 0.5);
            let config = MatcherConfig::new().with_window(window);

            group.bench_with_input(id, &(x, y, config), |bencher, (x, y, config)| {
                bencher.iter(|| {
                    let mut matcher = Matcher::with_config(x, y, *config);
                    matcher.compute().map(|r| r.distance()).unwrap()
                });
            });
        }
    }

    group.finish();
}

fn bench_distance_only(c: &mut Criterion) {
    let x = make_sine_signal(1024, 0.0);
    let y = make_sine_signal(1024, 0.5);

    c.bench_function("distance_only_len1024", |b| {
        b.iter(|| Matcher::new(&x, &y).distance_only().unwrap());
    });
}

fn bench_warp(c: &mut Criterion) {
    let x = make_sine_signal(512, 0.0);
    let y = make_sine_signal(384, 1.0);
    let mut matcher = Matcher::new(&x, &y);
    matcher.compute().unwrap();

    c.bench_function("warp_signals_512x384", |b| {
        b.iter(|| matcher.warp_signals().unwrap());
    });
}

criterion_group!(benches, bench_compute, bench_distance_only, bench_warp);
criterion_main!(benches);
