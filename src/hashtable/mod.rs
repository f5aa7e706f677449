//! Chained Hash Table Module
//!
//! Fixed bucket count, separate chaining, built independently from the
//! entry store.
//!
//! ## Layout
//! ```text
//! buckets ┌───┐
//!       0 │ ──┼──▶ [(k, v), (k, v)]
//!       1 │ ──┼──▶ []
//!       2 │ ──┼──▶ [(k, v)]
//!     ... │   │
//!     n-1 │ ──┼──▶ [(k, v), (k, v), (k, v)]
//!         └───┘
//! ```
//!
//! A key lives in bucket `crc32(key) mod bucket_count` and appears there at
//! most once. The table never resizes, so a lookup scans
//! `1 + len / bucket_count` entries on average and degrades linearly as the
//! table fills.

mod table;

pub use table::ChainedHashTable;

/// Bucket count used by `ChainedHashTable::new`
pub const DEFAULT_BUCKET_COUNT: usize = 10;
