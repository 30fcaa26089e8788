use criterion::{criterion_group, criterion_main, Criterion};
use impactcalc::{Calculator, InputKey};
use std::hint::black_box;

fn bench_engine(c: &mut Criterion) {
    let mut calc = Calculator::default();

    c.bench_function("calculate", |b| b.iter(|| black_box(calc.calculate())));

    c.bench_function("table_data", |b| {
        b.iter(|| black_box(calc.generate_table_data()))
    });

    c.bench_function("compare_to_baseline", |b| {
        b.iter(|| black_box(calc.compare_to_baseline()))
    });

    let values: Vec<f64> = (0..100).map(|i| i as f64 * 250_000.0).collect();
    c.bench_function("sensitivity_100", |b| {
        b.iter(|| black_box(calc.sensitivity_analysis(InputKey::Vsl, black_box(&values))))
    });
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
