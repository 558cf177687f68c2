//! Benchmark for piping and composition.
//!
//! Compares `pipe!`, the tuple and `Vec` forms of `pipe`, and `ErasedChain`
//! against hand-written nested calls, and measures the async forms on a
//! current-thread Tokio runtime.

#![cfg(all(feature = "compose", feature = "async"))]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pipe_compose::compose::{ErasedChain, compose, lift, pipe, pipe_async};
use std::hint::black_box;

fn add_one(value: u64) -> u64 {
    value.wrapping_add(1)
}

fn double(value: u64) -> u64 {
    value.wrapping_mul(2)
}

fn square(value: u64) -> u64 {
    value.wrapping_mul(value)
}

// =============================================================================
// Short Chain Benchmark
// =============================================================================

fn benchmark_short_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pipe_short_chain");

    group.bench_function("pipe_macro", |bencher| {
        bencher.iter(|| black_box(pipe!(black_box(7_u64), add_one, double, square)));
    });

    group.bench_function("pipe_tuple", |bencher| {
        bencher.iter(|| black_box(pipe(black_box(7_u64), (add_one, double, square))));
    });

    let composed = compose((add_one, double, square));
    group.bench_function("compose_tuple", |bencher| {
        bencher.iter(|| black_box(composed(black_box(7_u64))));
    });

    group.bench_function("hand_written", |bencher| {
        bencher.iter(|| black_box(square(double(add_one(black_box(7_u64))))));
    });

    group.finish();
}

// =============================================================================
// Long Chain Benchmark
// =============================================================================

fn benchmark_long_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pipe_long_chain");

    for length in [10, 100, 1_000] {
        let steps: Vec<fn(u64) -> u64> = (0..length).map(|_| add_one as fn(u64) -> u64).collect();

        group.bench_with_input(BenchmarkId::new("vec", length), &steps, |bencher, steps| {
            let composed = compose(steps.clone());
            bencher.iter(|| black_box(composed(black_box(0))));
        });

        let erased: ErasedChain = (0..length).fold(ErasedChain::new(), |chain, _| chain.then(add_one));
        group.bench_with_input(BenchmarkId::new("erased", length), &erased, |bencher, erased| {
            bencher.iter(|| black_box(erased.run_as::<u64, u64>(black_box(0))));
        });

        group.bench_with_input(BenchmarkId::new("loop", length), &length, |bencher, &length| {
            bencher.iter(|| {
                let mut value = black_box(0_u64);
                for _ in 0..length {
                    value = add_one(value);
                }
                black_box(value)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Async Benchmark
// =============================================================================

fn benchmark_async_chain(criterion: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("failed to build runtime");
    let mut group = criterion.benchmark_group("pipe_async_chain");

    group.bench_function("pipe_async_macro", |bencher| {
        bencher.to_async(&runtime).iter(|| async {
            black_box(pipe_async!(black_box(7_u64), => add_one, |v| async move { double(v) }, => square).await)
        });
    });

    group.bench_function("pipe_async_lifted_tuple", |bencher| {
        bencher.to_async(&runtime).iter(|| async {
            black_box(pipe_async(black_box(7_u64), (lift(add_one), lift(double), lift(square))).await)
        });
    });

    group.bench_function("hand_written_await", |bencher| {
        bencher.to_async(&runtime).iter(|| async {
            let value = async { add_one(black_box(7_u64)) }.await;
            let value = async { double(value) }.await;
            black_box(async { square(value) }.await)
        });
    });

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_short_chain,
    benchmark_long_chain,
    benchmark_async_chain
);

criterion_main!(benches);
