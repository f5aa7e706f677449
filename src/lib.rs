//! # keyindex
//!
//! Three independent ways to index a set of string/integer pairs, and a
//! harness that times lookups across them:
//! - Entry store: a direct mapping with a derivative per-key metadata slot
//! - Binary search tree: unbalanced, ordered, keyed lookup
//! - Chained hash table: fixed bucket count, linear scan per bucket
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Benchmark Harness                         │
//! │          (generate → load → build_index → time)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌───────────────┐
//!               │  Entry Store  │   authoritative data + index
//!               └───────┬───────┘
//!                       │ items() (rebuilt per measured run)
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌──────────────┐
//!   │ BinaryTree  │          │ ChainedHash  │
//!   │   (BST)     │          │    Table     │
//!   └─────────────┘          └──────────────┘
//! ```
//!
//! None of the structures share state; each owns its own copy of the data.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod hashing;
pub mod store;
pub mod tree;
pub mod hashtable;
pub mod harness;
pub mod report;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{IndexError, Result};
pub use config::BenchConfig;
pub use store::{EntryStore, IndexSlot};
pub use tree::{BinaryTree, TreeNode};
pub use hashtable::ChainedHashTable;
pub use harness::{BenchmarkReport, BenchmarkRun};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of keyindex
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
