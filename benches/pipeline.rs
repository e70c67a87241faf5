use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cmb_fnl::sky::{separate_components, simulate_sky};
use cmb_fnl::{FnlAnalysis, GaussianField};

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("cmb_fnl");
    group.sample_size(20);
    group.bench_function("reference_run", |b| {
        b.iter(|| {
            let report = FnlAnalysis::new().run().unwrap();
            black_box(report.summary.bayes_factor)
        });
    });

    let mut field = GaussianField::seeded(42);
    let sim = simulate_sky(&mut field, 1000, -0.416, &[1.0, 0.8, 0.6, 0.5, 0.7, 1.2]);
    group.bench_function("component_separation", |b| {
        b.iter(|| black_box(separate_components(&sim.channels).unwrap().map.len()));
    });
    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
