//! Key hashing
//!
//! CRC-32 over the key bytes. Unlike `std`'s randomly seeded `SipHash`,
//! the result is identical across processes, so index slots and bucket
//! layouts are reproducible for a seeded dataset.

/// Hash a key to 32 bits
#[inline]
pub fn hash_key(key: &[u8]) -> u32 {
    crc32fast::hash(key)
}

/// Map a key onto one of `slots` positions
///
/// `slots` must be non-zero.
#[inline]
pub fn bucket_of(key: &[u8], slots: usize) -> usize {
    hash_key(key) as usize % slots
}
