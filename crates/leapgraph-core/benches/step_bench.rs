use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use leapgraph_core::{LeapEngine, Params};

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for &n in &[8usize, 32, 64] {
        group.bench_with_input(BenchmarkId::new("calm", n), &n, |b, &n| {
            let params = Params {
                h0: 0.0,
                ..Params::default()
            };
            let mut engine = LeapEngine::new(n, params, 42).unwrap();
            let mut tick = 0u64;
            b.iter(|| {
                let drive = 0.9 + 0.5 * (0.04 * tick as f64).sin();
                tick += 1;
                black_box(engine.step(black_box(drive), 0.1))
            });
        });

        group.bench_with_input(BenchmarkId::new("jumpy", n), &n, |b, &n| {
            let params = Params {
                h0: 5.0,
                theta0: 0.1,
                eps_noise: 0.05,
                ..Params::default()
            };
            let mut engine = LeapEngine::new(n, params, 42).unwrap();
            b.iter(|| black_box(engine.step(black_box(1.0), 0.1)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
