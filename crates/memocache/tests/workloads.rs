use memocache::{
    fibonacci, make_queries, random_array, run_queries, warm, Invalidation, LruCache, Query,
    QueryConfig, RangeSum, RangeSumCache, SplayTree, UncachedArray,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn cached_backends_match_uncached() {
    let mut rng = StdRng::seed_from_u64(2024);
    let len = 500;
    let values = random_array(len, &mut rng);
    let config = QueryConfig {
        hot_pool: 10,
        p_hot: 0.9,
        p_update: 0.1,
    };
    let queries = make_queries(len, 3_000, &config, &mut rng);

    let mut plain = UncachedArray::new(values.clone());
    let mut scan = RangeSumCache::new(values.clone(), 16, Invalidation::Scan).unwrap();
    let mut indexed = RangeSumCache::new(values, 16, Invalidation::Indexed).unwrap();

    for query in &queries {
        match *query {
            Query::Range { left, right } => {
                let expected = plain.range_sum(left, right).unwrap();
                assert_eq!(scan.range_sum(left, right).unwrap(), expected);
                assert_eq!(indexed.range_sum(left, right).unwrap(), expected);
            }
            Query::Update { index, value } => {
                plain.update(index, value).unwrap();
                scan.update(index, value).unwrap();
                indexed.update(index, value).unwrap();
            }
        }
        assert!(scan.cache_len() <= 16);
        assert!(indexed.cache_len() <= 16);
    }

    let reads = queries
        .iter()
        .filter(|q| matches!(q, Query::Range { .. }))
        .count() as u64;
    for cache in [&scan, &indexed] {
        let stats = cache.stats();
        assert_eq!(stats.hits() + stats.misses(), reads);
        assert_eq!(stats.inserts(), stats.misses());
        assert!(stats.hits() > 0);
    }
    // Both strategies drop the same entries
    assert_eq!(scan.stats(), indexed.stats());
    assert_eq!(plain.values(), scan.values());
}

#[test]
fn run_queries_checksums_agree() {
    let mut rng = StdRng::seed_from_u64(99);
    let len = 1_000;
    let values = random_array(len, &mut rng);
    let queries = make_queries(len, 2_000, &QueryConfig::default(), &mut rng);

    let mut plain = UncachedArray::new(values.clone());
    let mut cached = RangeSumCache::new(values, 50, Invalidation::Scan).unwrap();

    let expected = run_queries(&mut plain, &queries).unwrap();
    assert_eq!(run_queries(&mut cached, &queries).unwrap(), expected);
    assert!(cached.stats().hits() > 0);
}

#[test]
fn run_queries_stops_on_error() {
    let mut cached = RangeSumCache::new(vec![1, 2, 3], 4, Invalidation::Scan).unwrap();
    let queries = [Query::Range { left: 0, right: 1 }, Query::Range { left: 0, right: 3 }];

    assert!(run_queries(&mut cached, &queries).is_err());
    assert_eq!(cached.stats().misses(), 1);
}

#[test]
fn fibonacci_backends_agree() {
    let mut tree: SplayTree<u64, u128> = SplayTree::new();
    let mut cache: LruCache<u64, u128> = LruCache::new(187).unwrap();

    assert_eq!(warm(186, &mut tree).unwrap(), warm(186, &mut cache).unwrap());
    for n in (0..=186).rev() {
        assert_eq!(fibonacci(n, &mut tree).unwrap(), fibonacci(n, &mut cache).unwrap());
    }
    assert_eq!(tree.len(), 185);
    assert_eq!(cache.len(), 185);
}
