//! Benchmark Harness Tests
//!
//! Tests verify:
//! - Data generation shape and reproducibility
//! - Each benchmark runs against a populated store
//! - Full seeded runs and config validation

use rand::rngs::StdRng;
use rand::SeedableRng;

use keyindex::harness::{
    self, benchmark_btree, benchmark_hash_table, benchmark_hash_table_with, benchmark_indexing,
    generate_random_data, KEY_ALPHABET,
};
use keyindex::store::IndexSlot;
use keyindex::{BenchConfig, EntryStore, IndexError};

// =============================================================================
// Helper Functions
// =============================================================================

fn seeded_store(seed: u64, count: usize) -> EntryStore {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_random_data(count, 5, 1..=100, &mut rng).into_iter().collect()
}

// =============================================================================
// Data Generation Tests
// =============================================================================

#[test]
fn test_generate_exact_count() {
    let mut rng = StdRng::seed_from_u64(1);
    let data = generate_random_data(100, 5, 1..=100, &mut rng);
    assert_eq!(data.len(), 100);
}

#[test]
fn test_generate_respects_bounds() {
    let mut rng = StdRng::seed_from_u64(2);
    let data = generate_random_data(500, 8, -5..=5, &mut rng);

    for (key, value) in &data {
        assert_eq!(key.len(), 8);
        assert!(key.bytes().all(|b| KEY_ALPHABET.contains(&b)));
        assert!((-5..=5).contains(value));
    }
}

#[test]
fn test_duplicates_collapse_on_load() {
    // One-letter keys guarantee collisions
    let mut rng = StdRng::seed_from_u64(3);
    let data = generate_random_data(500, 1, 1..=100, &mut rng);
    let last_value = data
        .iter()
        .rev()
        .find(|(k, _)| k == &data[0].0)
        .map(|(_, v)| *v)
        .unwrap();

    let store: EntryStore = data.clone().into_iter().collect();

    assert!(store.len() <= KEY_ALPHABET.len());
    assert!(store.len() < data.len());
    assert_eq!(store.search(&data[0].0), Some(last_value));
}

#[test]
fn test_generate_zero_entries() {
    let mut rng = StdRng::seed_from_u64(4);
    assert!(generate_random_data(0, 5, 1..=100, &mut rng).is_empty());
}

// =============================================================================
// Benchmark Function Tests
// =============================================================================

#[test]
fn test_benchmarks_return_elapsed_seconds() {
    let store = seeded_store(5, 100);

    let store_secs = benchmark_indexing(&store);
    let tree_secs = benchmark_btree(&store);
    let table_secs = benchmark_hash_table(&store);

    for secs in [store_secs, tree_secs, table_secs] {
        assert!(secs.is_finite());
        assert!(secs >= 0.0);
    }
}

#[test]
fn test_benchmarks_leave_store_untouched() {
    let store = seeded_store(6, 100);
    let before: Vec<(String, i64)> = {
        let mut v: Vec<_> = store.items().map(|(k, v)| (k.to_string(), v)).collect();
        v.sort();
        v
    };

    benchmark_indexing(&store);
    benchmark_btree(&store);
    benchmark_hash_table(&store);

    let mut after: Vec<_> = store.items().map(|(k, v)| (k.to_string(), v)).collect();
    after.sort();
    assert_eq!(before, after);
}

#[test]
fn test_hash_table_benchmark_bucket_validation() {
    let store = seeded_store(7, 10);

    assert!(benchmark_hash_table_with(&store, 32).is_ok());
    assert!(matches!(
        benchmark_hash_table_with(&store, 0),
        Err(IndexError::InvalidBucketCount(0))
    ));
}

// =============================================================================
// Full Run Tests
// =============================================================================

#[test]
fn test_seeded_run_is_reproducible() {
    let config = BenchConfig::builder().seed(99).build();

    let a = harness::run(&config).unwrap();
    let b = harness::run(&config).unwrap();

    assert_eq!(a.generated, 100);
    assert_eq!(a.store.len(), b.store.len());
    for (key, value) in a.store.items() {
        assert_eq!(b.store.search(key), Some(value));
    }
}

#[test]
fn test_run_builds_index() {
    let config = BenchConfig::builder().seed(11).num_entries(50).build();
    let run = harness::run(&config).unwrap();

    assert!(run.store.len() <= 50);
    for key in run.store.keys() {
        assert!(matches!(run.store.index_slot(key), Some(IndexSlot::Slot(_))));
    }
}

#[test]
fn test_run_rejects_invalid_config() {
    let config = BenchConfig::builder().key_len(0).build();
    assert!(matches!(harness::run(&config), Err(IndexError::Config(_))));

    let config = BenchConfig::builder().bucket_count(0).build();
    assert!(matches!(harness::run(&config), Err(IndexError::InvalidBucketCount(0))));
}
