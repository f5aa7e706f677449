//! Console report
//!
//! ```text
//! Index built for 98 entries
//! Key: AbCdE, Value: 17
//! ...
//! Entry store search time: 0.00001 seconds
//! Binary tree search time: 0.00004 seconds
//! Hash table search time: 0.00003 seconds
//! ```

use std::fmt;
use std::io::Write;

use crate::error::Result;
use crate::harness::BenchmarkReport;
use crate::hashtable::ChainedHashTable;
use crate::store::EntryStore;

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Entry store search time: {:.5} seconds", self.store_secs)?;
        writeln!(f, "Binary tree search time: {:.5} seconds", self.tree_secs)?;
        write!(f, "Hash table search time: {:.5} seconds", self.hash_table_secs)
    }
}

/// Write every stored pair, one per line, sorted by key
pub fn write_store<W: Write>(out: &mut W, store: &EntryStore) -> Result<()> {
    writeln!(out, "Index built for {} entries", store.len())?;

    let mut items: Vec<_> = store.items().collect();
    items.sort_unstable_by(|a, b| a.0.cmp(b.0));

    for (key, value) in items {
        writeln!(out, "Key: {}, Value: {}", key, value)?;
    }
    Ok(())
}

/// Write the bucket layout of a table, one line per bucket
pub fn write_buckets<W: Write>(out: &mut W, table: &ChainedHashTable<String, i64>) -> Result<()> {
    for (index, bucket) in table.buckets() {
        let entries: Vec<String> = bucket
            .iter()
            .map(|(key, value)| format!("({}, {})", key, value))
            .collect();
        writeln!(out, "Index {}: [{}]", index, entries.join(", "))?;
    }
    Ok(())
}

/// Write the three timing lines
pub fn write_timings<W: Write>(out: &mut W, report: &BenchmarkReport) -> Result<()> {
    writeln!(out, "{}", report)?;
    Ok(())
}
