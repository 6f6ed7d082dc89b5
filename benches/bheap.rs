//! Benchmarks for the paged heap.
//!
//! Compares push/pop throughput against std's BinaryHeap across heap sizes
//! that fit in cache and sizes that don't, where the paged layout is
//! supposed to pay off.

use std::collections::BinaryHeap;

use bheap::BHeap;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn values(n: usize) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    (0..n).map(|_| rng.gen()).collect()
}

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");

    for &n in &[1 << 10, 1 << 16, 1 << 20] {
        let input = values(n);
        group.throughput(Throughput::Elements(n as u64));

        for &page_size in &[512usize, 4096] {
            let name = format!("bheap/{page_size}");
            group.bench_with_input(BenchmarkId::new(name, n), &input, |b, input| {
                let bh = BHeap::new(page_size);
                b.iter(|| {
                    let mut items: Vec<u64> = Vec::with_capacity(input.len());
                    for &v in input {
                        bh.push(&mut items, black_box(v));
                    }
                    items
                });
            });
        }

        group.bench_with_input(BenchmarkId::new("std_binary_heap", n), &input, |b, input| {
            b.iter(|| {
                let mut heap = BinaryHeap::with_capacity(input.len());
                for &v in input {
                    heap.push(black_box(v));
                }
                heap
            });
        });
    }

    group.finish();
}

fn bench_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("pop");

    for &n in &[1 << 10, 1 << 16, 1 << 20] {
        let input = values(n);
        group.throughput(Throughput::Elements(n as u64));

        for &page_size in &[512usize, 4096] {
            let name = format!("bheap/{page_size}");
            group.bench_with_input(BenchmarkId::new(name, n), &input, |b, input| {
                let bh = BHeap::new(page_size);
                let mut filled: Vec<u64> = Vec::with_capacity(input.len());
                for &v in input {
                    bh.push(&mut filled, v);
                }
                b.iter_batched(
                    || filled.clone(),
                    |mut items| {
                        while let Some(v) = bh.pop(&mut items) {
                            black_box(v);
                        }
                    },
                    criterion::BatchSize::LargeInput,
                );
            });
        }

        group.bench_with_input(BenchmarkId::new("std_binary_heap", n), &input, |b, input| {
            let filled: BinaryHeap<u64> = input.iter().copied().collect();
            b.iter_batched(
                || filled.clone(),
                |mut heap| {
                    while let Some(v) = heap.pop() {
                        black_box(v);
                    }
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_duplicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("duplicates");
    const N: usize = 10_000;
    group.throughput(Throughput::Elements(N as u64));

    group.bench_function("bheap/512", |b| {
        let bh = BHeap::new(512);
        b.iter(|| {
            let mut items: Vec<u64> = Vec::with_capacity(N);
            for _ in 0..N {
                bh.push(&mut items, black_box(0));
            }
            while bh.pop(&mut items).is_some() {}
        });
    });

    group.finish();
}

criterion_group!(benches, bench_push, bench_pop, bench_duplicates);
criterion_main!(benches);
