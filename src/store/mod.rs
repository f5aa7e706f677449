//! Entry Store Module
//!
//! The authoritative key → value mapping.
//!
//! ## Responsibilities
//! - Insert / overwrite, search and delete by key
//! - Keep a parallel per-key metadata slot (the "index")
//! - Hand out its items so other structures can be rebuilt from it
//!
//! ## Index Semantics
//! The index is derivative bookkeeping. `search` never reads it, and it is
//! only brought up to date by an explicit bulk `build_index` pass. A key
//! inserted after the last pass carries a `Pending` slot until the next one.

mod entry_store;

pub use entry_store::{EntryStore, INDEX_SLOTS};

/// Value type held by the store
pub type Value = i64;

/// Per-key metadata slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexSlot {
    /// Written by `insert`; no index pass has covered this key yet
    Pending,

    /// `hash(key) mod INDEX_SLOTS`, written by `build_index`
    Slot(u8),
}
