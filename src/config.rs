//! Configuration for the benchmark harness
//!
//! Centralized configuration with sensible defaults.

use std::ops::RangeInclusive;

use crate::error::{IndexError, Result};
use crate::hashtable::DEFAULT_BUCKET_COUNT;

/// Configuration for one benchmark run
#[derive(Debug, Clone)]
pub struct BenchConfig {
    // -------------------------------------------------------------------------
    // Data Generation
    // -------------------------------------------------------------------------
    /// Number of entries to generate (duplicates collapse on load, so the
    /// store may end up smaller)
    pub num_entries: usize,

    /// Length of each generated key, in ASCII letters
    pub key_len: usize,

    /// Inclusive range for generated values
    pub value_range: RangeInclusive<i64>,

    /// RNG seed; `None` draws from OS entropy
    pub seed: Option<u64>,

    // -------------------------------------------------------------------------
    // Hash Table
    // -------------------------------------------------------------------------
    /// Bucket count for the hash table benchmark
    pub bucket_count: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            num_entries: 100,
            key_len: 5,
            value_range: 1..=100,
            seed: None,
            bucket_count: DEFAULT_BUCKET_COUNT,
        }
    }
}

impl BenchConfig {
    /// Create a new config builder
    pub fn builder() -> BenchConfigBuilder {
        BenchConfigBuilder::default()
    }

    /// Check that the config can drive a run
    pub fn validate(&self) -> Result<()> {
        if self.key_len == 0 {
            return Err(IndexError::Config("key length must be at least 1".to_string()));
        }

        if self.value_range.is_empty() {
            return Err(IndexError::Config(format!(
                "value range {}..={} is empty",
                self.value_range.start(),
                self.value_range.end()
            )));
        }

        if self.bucket_count == 0 {
            return Err(IndexError::InvalidBucketCount(self.bucket_count));
        }

        Ok(())
    }
}

/// Builder for BenchConfig
#[derive(Default)]
pub struct BenchConfigBuilder {
    config: BenchConfig,
}

impl BenchConfigBuilder {
    /// Set the number of entries to generate
    pub fn num_entries(mut self, count: usize) -> Self {
        self.config.num_entries = count;
        self
    }

    /// Set the generated key length
    pub fn key_len(mut self, len: usize) -> Self {
        self.config.key_len = len;
        self
    }

    /// Set the inclusive value range
    pub fn value_range(mut self, range: RangeInclusive<i64>) -> Self {
        self.config.value_range = range;
        self
    }

    /// Fix the RNG seed for a reproducible dataset
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Set the hash table bucket count
    pub fn bucket_count(mut self, count: usize) -> Self {
        self.config.bucket_count = count;
        self
    }

    pub fn build(self) -> BenchConfig {
        self.config
    }
}
