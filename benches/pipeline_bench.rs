//! Benchmarks for lazy pipelines.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use klink::Klink;
use std::hint::black_box;

fn benchmark_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain");

    for size in [100i64, 10_000, 1_000_000].iter() {
        group.bench_with_input(BenchmarkId::new("klink", size), size, |b, &size| {
            b.iter(|| {
                Klink::range(0, black_box(size), 1)
                    .filter(|i| i % 3 == 0)
                    .map(|i| i * 2)
                    .skip_while(|i| *i < 100)
                    .sum(|i| i)
            });
        });

        group.bench_with_input(BenchmarkId::new("std", size), size, |b, &size| {
            b.iter(|| (0..=black_box(size)).filter(|i| i % 3 == 0).map(|i| i * 2).skip_while(|i| *i < 100).sum::<i64>());
        });
    }

    group.finish();
}

fn benchmark_short_circuit(c: &mut Criterion) {
    let mut group = c.benchmark_group("short_circuit");
    let data: Vec<i64> = (0..100_000).collect();

    group.bench_function("filter_first", |b| {
        b.iter(|| Klink::new(data.iter()).map(|i| i * 2).filter(|i| *i > 1000).first())
    });

    group.bench_function("to_vec_then_first", |b| {
        b.iter(|| Klink::new(data.iter()).map(|i| i * 2).to_vec().into_iter().find(|i| *i > 1000))
    });

    group.bench_function("reverse_first", |b| {
        b.iter(|| Klink::new(data.iter()).map(|i| i * 2).reverse().first())
    });

    group.finish();
}

fn benchmark_terminals(c: &mut Criterion) {
    let mut group = c.benchmark_group("terminals");

    group.bench_function("group_by", |b| b.iter(|| Klink::range(0, black_box(100_000), 1).group_by(|i| i % 16)));
    group.bench_function("to_dictionary", |b| {
        b.iter(|| Klink::range(0, black_box(100_000), 1).to_dictionary(|i| *i, |i| i * 2))
    });
    group.bench_function("average", |b| b.iter(|| Klink::range(0, black_box(100_000), 1).average(|i| i as f64)));

    group.finish();
}

criterion_group!(benches, benchmark_chain, benchmark_short_circuit, benchmark_terminals);
criterion_main!(benches);
