//! Error types for keyindex
//!
//! Lookups never fail: a missing key is `None`, not an error. The variants
//! here cover configuration and report output only.

use thiserror::Error;

/// Result type alias using IndexError
pub type Result<T> = std::result::Result<T, IndexError>;

/// Unified error type for keyindex operations
#[derive(Debug, Error)]
pub enum IndexError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Hash Table Errors
    // -------------------------------------------------------------------------
    #[error("Invalid bucket count: {0} (must be at least 1)")]
    InvalidBucketCount(usize),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
