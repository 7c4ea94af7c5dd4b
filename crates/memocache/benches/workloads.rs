use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use memocache::{
    fibonacci, make_queries, random_array, run_queries, warm, Invalidation, LruCache,
    QueryConfig, RangeSumCache, SplayTree, UncachedArray,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const ARRAY_LEN: usize = 10_000;
const QUERIES: usize = 2_000;

fn bench_range_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_sum");
    group.sample_size(20);
    group.throughput(Throughput::Elements(QUERIES as u64));

    let mut rng = StdRng::seed_from_u64(42);
    let values = random_array(ARRAY_LEN, &mut rng);
    let queries = make_queries(ARRAY_LEN, QUERIES, &QueryConfig::default(), &mut rng);

    group.bench_function("uncached", |b| {
        b.iter(|| {
            let mut array = UncachedArray::new(values.clone());
            black_box(run_queries(&mut array, &queries).unwrap());
        });
    });

    let strategies = [
        ("lru_scan", Invalidation::Scan),
        ("lru_indexed", Invalidation::Indexed),
    ];
    for (name, invalidation) in strategies {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut array = RangeSumCache::new(values.clone(), 1000, invalidation).unwrap();
                black_box(run_queries(&mut array, &queries).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_fib_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("fib_lookup");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    for n in [50u64, 100, 180] {
        group.bench_function(format!("lru_{}", n), |b| {
            let mut cache: LruCache<u64, u128> = LruCache::new(n as usize + 1).unwrap();
            warm(n, &mut cache).unwrap();
            b.iter(|| black_box(fibonacci(black_box(n), &mut cache).unwrap()));
        });

        group.bench_function(format!("splay_{}", n), |b| {
            let mut tree: SplayTree<u64, u128> = SplayTree::new();
            warm(n, &mut tree).unwrap();
            b.iter(|| black_box(fibonacci(black_box(n), &mut tree).unwrap()));
        });
    }

    group.finish();
}

fn bench_splay_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("splay");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("find_cycling_1k", |b| {
        let mut tree = SplayTree::new();
        for key in 0..1_000u64 {
            tree.insert(key, key);
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(tree.find(&(counter % 1_000)));
            counter += 7;
        });
    });

    group.finish();
}

criterion_group!(benches, bench_range_sum, bench_fib_lookup, bench_splay_access);
criterion_main!(benches);
