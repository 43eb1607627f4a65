use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use rand::Rng;
use salerank::prelude::*;
use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;

fn bench_100k_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("100k Records");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(30));

    let mut rng = rand::rng();
    let count = 100_000;

    // Shared references, the way the controller sorts cached batches.
    let input: Vec<Arc<Record>> = (0..count as u64)
        .map(|id| {
            let total = (rng.random_range(0..100_000_000) as f64) / 100.0;
            Arc::new(Record::new(id, total, format!("Client {id}")))
        })
        .collect();

    group.throughput(Throughput::Elements(count as u64));

    // BubbleSort is left out: quadratic at this size.
    for algorithm in [Algorithm::QuickSort, Algorithm::MergeSort] {
        group.bench_function(algorithm.as_str(), |b| {
            b.iter(|| sort(algorithm, black_box(&input), Direction::Descending))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_100k_records);
criterion_main!(benches);
