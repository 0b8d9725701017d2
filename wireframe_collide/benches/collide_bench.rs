use criterion::{criterion_group, criterion_main, Bencher, BenchmarkId, Criterion};
use wireframe_collide::{shapes_collide, Pose, Shape, Vector2};

/// Regular polygon outline with `n` vertices on a circle of `radius`.
fn regular_outline(n: usize, radius: f64) -> Shape<f64> {
    let points = (0..n)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / n as f64;
            Vector2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();
    Shape::from_points(points).expect("regular outline")
}

fn bench_collide_disjoint(b: &mut Bencher, n: usize) {
    // disjoint shapes force the full all-pairs edge scan (the negative path
    // never short-circuits)
    let mut s1 = regular_outline(n, 1.0);
    let mut s2 = regular_outline(n, 1.0);
    s1.update(&Pose::identity());
    s2.update(&Pose::new(100.0, 100.0, 0.0));

    b.iter(|| shapes_collide(&s1, &s2));
}

fn bench_collide_overlapping(b: &mut Bencher, n: usize) {
    let mut s1 = regular_outline(n, 1.0);
    let mut s2 = regular_outline(n, 1.0);
    s1.update(&Pose::identity());
    s2.update(&Pose::new(0.5, 0.5, 0.2));

    b.iter(|| shapes_collide(&s1, &s2));
}

fn shapes_collide_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("shapes_collide");
    let vertex_counts = &[4, 8, 16, 32];
    for &n in vertex_counts {
        group.bench_with_input(BenchmarkId::new("disjoint_full_scan", n), &n, |b, n| {
            bench_collide_disjoint(b, *n)
        });
        group.bench_with_input(BenchmarkId::new("overlapping_early_exit", n), &n, |b, n| {
            bench_collide_overlapping(b, *n)
        });
    }

    group.finish();
}

criterion_group!(shapes_collide_benches, shapes_collide_group,);
criterion_main!(shapes_collide_benches);
