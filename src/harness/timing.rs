//! Per-structure timing
//!
//! Each function returns elapsed wall-clock seconds. Lookup results are
//! passed through `black_box` so the optimizer cannot drop the searches.

use std::hint::black_box;
use std::time::Instant;

use crate::error::Result;
use crate::hashtable::ChainedHashTable;
use crate::store::EntryStore;
use crate::tree::BinaryTree;

/// Time one `search` per stored item against the store itself
pub fn benchmark_indexing(store: &EntryStore) -> f64 {
    let start = Instant::now();
    for (key, _) in store.items() {
        black_box(store.search(key));
    }
    let elapsed = start.elapsed().as_secs_f64();

    tracing::debug!(entries = store.len(), elapsed, "entry store benchmark finished");
    elapsed
}

/// Time building a fresh tree from the store and searching every key
///
/// Both phases fall inside the timed interval.
pub fn benchmark_btree(store: &EntryStore) -> f64 {
    let mut tree = BinaryTree::new();

    let start = Instant::now();
    for (key, value) in store.items() {
        tree.insert(key.to_string(), value);
    }
    for key in store.keys() {
        black_box(tree.search(key));
    }
    let elapsed = start.elapsed().as_secs_f64();

    tracing::debug!(
        nodes = tree.len(),
        height = tree.height(),
        elapsed,
        "binary tree benchmark finished"
    );
    elapsed
}

/// Time building a fresh default-sized hash table from the store and
/// searching every key of the store
pub fn benchmark_hash_table(store: &EntryStore) -> f64 {
    let table = ChainedHashTable::new();
    time_hash_table(store, table)
}

/// Same as `benchmark_hash_table` with a custom bucket count
pub fn benchmark_hash_table_with(store: &EntryStore, bucket_count: usize) -> Result<f64> {
    let table = ChainedHashTable::with_bucket_count(bucket_count)?;
    Ok(time_hash_table(store, table))
}

fn time_hash_table(store: &EntryStore, mut table: ChainedHashTable<String, i64>) -> f64 {
    let start = Instant::now();
    for (key, value) in store.items() {
        table.insert(key.to_string(), value);
    }
    for key in store.keys() {
        black_box(table.search(key));
    }
    let elapsed = start.elapsed().as_secs_f64();

    tracing::debug!(
        entries = table.len(),
        buckets = table.bucket_count(),
        load_factor = table.load_factor(),
        elapsed,
        "hash table benchmark finished"
    );
    elapsed
}
