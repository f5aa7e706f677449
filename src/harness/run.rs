//! End-to-end harness run

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{benchmark_btree, benchmark_hash_table_with, benchmark_indexing, generate_random_data};
use super::{BenchmarkReport, BenchmarkRun};
use crate::config::BenchConfig;
use crate::error::Result;
use crate::store::EntryStore;

/// Generate data, load and index the store, then time all three structures
///
/// With `config.seed` set, the dataset (and therefore the store contents
/// and bucket layout) is reproducible; only the timings vary.
pub fn run(config: &BenchConfig) -> Result<BenchmarkRun> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let data = generate_random_data(
        config.num_entries,
        config.key_len,
        config.value_range.clone(),
        &mut rng,
    );
    let generated = data.len();

    let mut store: EntryStore = data.into_iter().collect();
    store.build_index();

    tracing::info!(
        generated,
        distinct = store.len(),
        seed = ?config.seed,
        "store populated and indexed"
    );

    let report = BenchmarkReport {
        store_secs: benchmark_indexing(&store),
        tree_secs: benchmark_btree(&store),
        hash_table_secs: benchmark_hash_table_with(&store, config.bucket_count)?,
    };

    Ok(BenchmarkRun {
        store,
        generated,
        report,
    })
}
