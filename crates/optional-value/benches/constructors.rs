//! Benchmarks for zero-aware `Optional` constructors.

use std::{collections::BTreeMap, hint::black_box};

use criterion::{Criterion, criterion_group, criterion_main};
use optional_value::{Optional, ZeroValue};

#[derive(Debug, Clone, Default, PartialEq, ZeroValue)]
struct Endpoint {
    host: String,
    port: u16,
    headers: BTreeMap<String, String>,
}

fn bench_scalars(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar");
    group.bench_function("of_nonzero", |b| {
        b.iter(|| Optional::of_nonzero(black_box(42_u64)));
    });
    group.bench_function("of_nonzero_deep", |b| {
        b.iter(|| Optional::of_nonzero_deep(black_box(42_u64)));
    });
    group.bench_function("of_nonzero/zero", |b| {
        b.iter(|| Optional::of_nonzero(black_box(0_u64)));
    });
    group.finish();
}

fn bench_composites(c: &mut Criterion) {
    let endpoint = Endpoint {
        host: "localhost".into(),
        port: 8080,
        headers: BTreeMap::new(),
    };

    let mut group = c.benchmark_group("composite");
    group.bench_function("of_nonzero", |b| {
        b.iter(|| Optional::of_nonzero(black_box(endpoint.clone())));
    });
    group.bench_function("of_nonzero_deep", |b| {
        b.iter(|| Optional::of_nonzero_deep(black_box(endpoint.clone())));
    });
    group.bench_function("of_nonzero_deep/zero", |b| {
        b.iter(|| Optional::of_nonzero_deep(black_box(Endpoint::default())));
    });
    group.finish();
}

criterion_group!(benches, bench_scalars, bench_composites);
criterion_main!(benches);
