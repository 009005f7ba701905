use criterion::{criterion_group, criterion_main, Criterion};

use affinity::similarity::{sim_distance, sim_pearson};
use affinity::store::synthetic::{rater_name, synthetic_store};

fn similarity_group(c: &mut Criterion) {
    // dense enough that a pair shares most items
    let store = synthetic_store(100, 400, 0.5);
    let a = rater_name(0);
    let b = rater_name(1);

    let mut group = c.benchmark_group("similarity");
    group.bench_function("pearson 400", |bench| {
        bench.iter(|| sim_pearson(&store, &a, &b))
    });
    group.bench_function("distance 400", |bench| {
        bench.iter(|| sim_distance(&store, &a, &b))
    });

    group.finish();
}

fn sparse_similarity_group(c: &mut Criterion) {
    let store = synthetic_store(100, 2000, 0.05);
    let a = rater_name(0);
    let b = rater_name(1);

    let mut group = c.benchmark_group("sparse similarity");
    group.bench_function("pearson 2000 sparse", |bench| {
        bench.iter(|| sim_pearson(&store, &a, &b))
    });
    group.bench_function("distance 2000 sparse", |bench| {
        bench.iter(|| sim_distance(&store, &a, &b))
    });

    group.finish();
}

criterion_group!(benches, similarity_group, sparse_similarity_group);
criterion_main!(benches);
