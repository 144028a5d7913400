//! Benchmark for the capability dispatch layer.
//!
//! The combinators are supposed to compile down to the underlying native
//! operations; these benchmarks pit each combinator against the direct std
//! call it forwards to.

use catena::combinators::{fmap, lift_m, seq};
use catena::Monad;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn benchmark_map_dispatch(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_dispatch");

    group.bench_function("fmap_option", |bencher| {
        bencher.iter(|| fmap(|n: i32| n.wrapping_mul(2), black_box(Some(21))));
    });

    group.bench_function("std_option_map", |bencher| {
        bencher.iter(|| black_box(Some(21)).map(|n: i32| n.wrapping_mul(2)));
    });

    group.finish();
}

fn benchmark_bind_dispatch(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("bind_dispatch");

    group.bench_function("bind_chain", |bencher| {
        bencher.iter(|| {
            black_box(Some(1))
                .bind(|n: i32| Some(n.wrapping_add(1)))
                .bind(|n| Some(n.wrapping_mul(3)))
        });
    });

    group.bench_function("std_and_then_chain", |bencher| {
        bencher.iter(|| {
            black_box(Some(1))
                .and_then(|n: i32| Some(n.wrapping_add(1)))
                .and_then(|n| Some(n.wrapping_mul(3)))
        });
    });

    group.finish();
}

fn benchmark_sequencing(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sequencing");

    group.bench_function("seq_option", |bencher| {
        bencher.iter(|| seq(black_box(Some(3)), black_box(Some("a"))));
    });

    group.bench_function("lift_m_option", |bencher| {
        bencher.iter(|| lift_m(|n: i32| n.wrapping_add(1), black_box(Some(5))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_map_dispatch,
    benchmark_bind_dispatch,
    benchmark_sequencing
);
criterion_main!(benches);
