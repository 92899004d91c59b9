//! Criterion benchmarks for `SurfaceSpiral::update` (projection, spline
//! resampling and ribbon framing) against an analytic wave field.
//! Build with `--features parallel` to compare against the rayon path.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::Vector2;
use surface_spiral::api::SurfaceSpiral;

fn waves(p: Vector2<f64>) -> f64 {
    (p.x * 1.7).sin() * (p.y * 0.9).cos() + 0.25 * (p.x * 5.0 + p.y * 3.0).sin()
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("ribbon");
    for &tol in &[0.1f64, 0.01, 0.001] {
        let mut s = SurfaceSpiral::new();
        s.setup(1.0, 5.0, 3.0, 0.05, 0.05).unwrap();
        s.set_sampling_tolerance(tol).unwrap();
        group.bench_with_input(BenchmarkId::new("update", tol), &tol, |b, _| {
            b.iter(|| s.update(&waves, 0.5, Vector2::new(0.3, -0.2)).unwrap())
        });
    }
    let mut wire_only = SurfaceSpiral::new();
    wire_only.setup(1.0, 5.0, 3.0, 0.05, 0.05).unwrap();
    wire_only.enable_path(false);
    group.bench_function(BenchmarkId::new("update_wire_only", 0.05), |b| {
        b.iter(|| wire_only.update(&waves, 0.5, Vector2::zeros()).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_update);
criterion_main!(benches);
