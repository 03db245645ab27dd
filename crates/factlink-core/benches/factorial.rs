//! Criterion bench for the core function.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use factlink_core::factorial;

fn bench_factorial(c: &mut Criterion) {
    c.bench_function("factorial_20", |b| b.iter(|| factorial(black_box(20))));
}

criterion_group!(benches, bench_factorial);
criterion_main!(benches);
