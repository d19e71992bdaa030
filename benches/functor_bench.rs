//! Benchmark for the functor combinators.
//!
//! Compares the slice, iterator and traversal combinators against the
//! hand-written loops they replace.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ftoolz::functor::traverse::{sequence_seq, traverse_seq};
use ftoolz::functor::{iter, seq};
use std::hint::black_box;

// =============================================================================
// fmap
// =============================================================================

fn benchmark_fmap(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fmap");

    for size in [100, 10_000] {
        let elements: Vec<i64> = (0..size).collect();
        group.throughput(Throughput::Elements(elements.len() as u64));

        group.bench_with_input(BenchmarkId::new("seq_fmap", size), &elements, |bencher, elements| {
            bencher.iter(|| black_box(seq::fmap(|x: &i64| x * 2, black_box(elements))));
        });

        group.bench_with_input(BenchmarkId::new("iter_fmap", size), &elements, |bencher, elements| {
            bencher.iter(|| {
                let mapped: Vec<i64> = iter::fmap(|x: &i64| x * 2, black_box(elements)).collect();
                black_box(mapped)
            });
        });

        group.bench_with_input(BenchmarkId::new("manual_loop", size), &elements, |bencher, elements| {
            bencher.iter(|| {
                let mut mapped = Vec::with_capacity(elements.len());
                for element in black_box(elements) {
                    mapped.push(element * 2);
                }
                black_box(mapped)
            });
        });
    }

    group.finish();
}

// =============================================================================
// fmap2 / product
// =============================================================================

fn benchmark_fmap2(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fmap2");
    let first: Vec<i32> = (0..100).collect();
    let second: Vec<i32> = (0..100).collect();

    group.bench_function("seq_fmap2", |bencher| {
        bencher.iter(|| black_box(seq::fmap2(|a: &i32, b: &i32| a + b, &first, &second)));
    });

    group.bench_function("iter_fmap2", |bencher| {
        bencher.iter(|| {
            let combined: Vec<i32> =
                iter::fmap2(|a: &i32, b: &i32| a + b, first.iter(), second.iter()).collect();
            black_box(combined)
        });
    });

    group.bench_function("seq_product", |bencher| {
        bencher.iter(|| black_box(seq::product(&first, &second)));
    });

    group.finish();
}

// =============================================================================
// traverse / sequence
// =============================================================================

fn benchmark_traverse(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("traverse");
    let present: Vec<Option<u32>> = (0..10_000).map(Some).collect();
    let mut absent_first = present.clone();
    absent_first[0] = None;

    group.bench_function("sequence_all_present", |bencher| {
        bencher.iter(|| black_box(sequence_seq(black_box(&present))));
    });

    group.bench_function("sequence_absent_first", |bencher| {
        bencher.iter(|| black_box(sequence_seq(black_box(&absent_first))));
    });

    group.bench_function("collect_option_vec", |bencher| {
        bencher.iter(|| {
            let collected: Option<Vec<u32>> = black_box(&present).iter().copied().collect();
            black_box(collected)
        });
    });

    group.bench_function("traverse_checked_add", |bencher| {
        bencher.iter(|| black_box(traverse_seq(|x: &Option<u32>| x.and_then(|n| n.checked_add(1)), &present)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_fmap, benchmark_fmap2, benchmark_traverse);
criterion_main!(benches);
