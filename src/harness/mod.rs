//! Benchmark Harness Module
//!
//! Generates synthetic entries and times lookups across the three
//! structures.
//!
//! ## Flow
//! ```text
//! generate_random_data ──▶ EntryStore ──▶ build_index
//!                              │
//!        ┌─────────────────────┼──────────────────────┐
//!        ▼                     ▼                      ▼
//!  benchmark_indexing    benchmark_btree    benchmark_hash_table
//!  (search only)         (build + search)   (build + search)
//! ```
//!
//! The three timings are not measured on equal footing: the store is
//! already populated, while the tree and the hash table are built inside
//! their timed interval. Each tree / table is built fresh and dropped
//! after its run.

mod data;
mod timing;
mod run;

pub use data::{generate_random_data, KEY_ALPHABET};
pub use timing::{benchmark_btree, benchmark_hash_table, benchmark_hash_table_with, benchmark_indexing};
pub use run::run;

use crate::store::EntryStore;

/// Elapsed wall-clock seconds per structure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkReport {
    /// `EntryStore::search` over every stored key
    pub store_secs: f64,

    /// Fresh `BinaryTree`: insert every item, then search every key
    pub tree_secs: f64,

    /// Fresh `ChainedHashTable`: insert every item, then search every key
    pub hash_table_secs: f64,
}

/// Outcome of a full harness run
#[derive(Debug)]
pub struct BenchmarkRun {
    /// The populated, indexed store the benchmarks ran against
    pub store: EntryStore,

    /// Number of entries generated before duplicate keys collapsed
    pub generated: usize,

    pub report: BenchmarkReport,
}
