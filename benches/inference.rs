use criterion::{black_box, criterion_group, criterion_main, Criterion};
use soil_quality::core::{FuzzySystem, SoilSample};
use soil_quality::dataset::default_samples;
use soil_quality::inference::DefuzzMethod;

fn bench_evaluate_discretized(c: &mut Criterion) {
    let system = FuzzySystem::builtin();
    let sample = SoilSample::new(6.5, 150.0, 12.0, 3.0);
    c.bench_function("evaluate_discretized", |b| {
        b.iter(|| system.evaluate(black_box(&sample)))
    });
}

fn bench_evaluate_closed_form(c: &mut Criterion) {
    let system = FuzzySystem::soil_quality(DefuzzMethod::ClosedForm).unwrap();
    let sample = SoilSample::new(6.5, 150.0, 12.0, 3.0);
    c.bench_function("evaluate_closed_form", |b| {
        b.iter(|| system.evaluate(black_box(&sample)))
    });
}

fn bench_trace(c: &mut Criterion) {
    let system = FuzzySystem::builtin();
    let sample = SoilSample::new(5.5, 50.0, 25.0, 1.0);
    c.bench_function("trace_discretized", |b| {
        b.iter(|| system.trace(black_box(&sample)))
    });
}

fn bench_batch_1000(c: &mut Criterion) {
    let system = FuzzySystem::builtin();
    let samples: Vec<SoilSample> = default_samples()
        .into_iter()
        .cycle()
        .take(1000)
        .map(|row| row.sample)
        .collect();
    c.bench_function("evaluate_batch_1000", |b| {
        b.iter(|| system.evaluate_batch(black_box(&samples)))
    });
}

criterion_group!(
    benches,
    bench_evaluate_discretized,
    bench_evaluate_closed_form,
    bench_trace,
    bench_batch_1000,
);
criterion_main!(benches);
