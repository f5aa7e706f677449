//! ChainedHashTable implementation

use std::borrow::Borrow;

use super::DEFAULT_BUCKET_COUNT;
use crate::error::{IndexError, Result};
use crate::hashing;

/// Hash table resolving collisions by chaining into per-bucket vectors
#[derive(Debug, Clone)]
pub struct ChainedHashTable<K, V> {
    /// Fixed for the lifetime of the table
    buckets: Vec<Vec<(K, V)>>,

    /// Total entries across all buckets
    len: usize,
}

impl<K, V> ChainedHashTable<K, V> {
    /// Create a table with `DEFAULT_BUCKET_COUNT` empty buckets
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKET_COUNT)
    }

    /// Create a table with `bucket_count` empty buckets
    pub fn with_bucket_count(bucket_count: usize) -> Result<Self> {
        if bucket_count == 0 {
            return Err(IndexError::InvalidBucketCount(bucket_count));
        }
        Ok(Self::with_buckets(bucket_count))
    }

    fn with_buckets(bucket_count: usize) -> Self {
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, Vec::new);
        Self { buckets, len: 0 }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Entries per bucket
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Contents of one bucket, in insertion order
    pub fn bucket(&self, index: usize) -> Option<&[(K, V)]> {
        self.buckets.get(index).map(Vec::as_slice)
    }

    /// Every bucket with its index, including empty ones
    pub fn buckets(&self) -> impl Iterator<Item = (usize, &[(K, V)])> + '_ {
        self.buckets.iter().map(Vec::as_slice).enumerate()
    }
}

impl<K, V> ChainedHashTable<K, V>
where
    K: AsRef<[u8]> + Eq,
{
    fn bucket_index(&self, key: &[u8]) -> usize {
        hashing::bucket_of(key, self.buckets.len())
    }

    /// Insert a pair, updating the value in place if the key is present
    pub fn insert(&mut self, key: K, value: V) {
        let index = self.bucket_index(key.as_ref());
        let bucket = &mut self.buckets[index];

        if let Some(slot) = bucket.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
            return;
        }

        bucket.push((key, value));
        self.len += 1;
    }

    /// Value stored under `key`
    pub fn search<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: AsRef<[u8]> + Eq + ?Sized,
    {
        let index = self.bucket_index(key.as_ref());
        self.buckets[index]
            .iter()
            .find(|(k, _)| Borrow::<Q>::borrow(k) == key)
            .map(|(_, v)| v)
    }

    /// Remove `key`, keeping the remaining bucket entries in order
    ///
    /// Returns the removed value; deleting an absent key is a no-op.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: AsRef<[u8]> + Eq + ?Sized,
    {
        let index = self.bucket_index(key.as_ref());
        let bucket = &mut self.buckets[index];

        let position = bucket.iter().position(|(k, _)| Borrow::<Q>::borrow(k) == key)?;
        let (_, value) = bucket.remove(position);
        self.len -= 1;
        Some(value)
    }
}

impl<K, V> Default for ChainedHashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for ChainedHashTable<K, V>
where
    K: AsRef<[u8]> + Eq,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}
