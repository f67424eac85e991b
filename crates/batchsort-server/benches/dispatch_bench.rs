//! Sequential vs concurrent dispatch benchmarks.
//!
//! Run with: cargo bench -p batchsort-server
//!
//! These benchmarks compare both strategies over batch shapes that favor
//! each of them:
//! - many short sequences (task overhead dominates)
//! - few long sequences (sort work dominates)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tokio::runtime::Runtime;

use batchsort_domain::{Batch, Sequence, Strategy};
use batchsort_server::Dispatcher;

/// Deterministic pseudo-random batch (xorshift), so runs are comparable.
fn make_batch(sequences: usize, length: usize) -> Batch {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state as i64
    };
    (0..sequences)
        .map(|_| (0..length).map(|_| next()).collect::<Sequence>())
        .collect::<Vec<_>>()
        .into()
}

fn bench_strategies(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let dispatcher = Dispatcher::new();

    let mut group = c.benchmark_group("dispatch");
    let shapes = [(1_000, 16), (100, 1_000), (8, 100_000)];

    for (sequences, length) in shapes {
        let batch = make_batch(sequences, length);
        group.throughput(Throughput::Elements((sequences * length) as u64));

        for strategy in Strategy::ALL {
            group.bench_with_input(
                BenchmarkId::new(strategy.as_str(), format!("{sequences}x{length}")),
                &batch,
                |b, batch| {
                    b.to_async(&rt).iter(|| async {
                        let dispatched = dispatcher
                            .run(black_box(batch.clone()), strategy)
                            .await
                            .unwrap();
                        black_box(dispatched.time_ns())
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
