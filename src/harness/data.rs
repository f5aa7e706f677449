//! Synthetic data generation

use std::ops::RangeInclusive;

use rand::Rng;

/// Characters generated keys are drawn from
pub const KEY_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate `count` entries with random letter keys of length `key_len`
/// and values drawn uniformly from `values`
///
/// Keys may repeat. Pairs are returned in generation order, so loading them
/// into a map keeps the last value for a repeated key.
pub fn generate_random_data<R: Rng + ?Sized>(
    count: usize,
    key_len: usize,
    values: RangeInclusive<i64>,
    rng: &mut R,
) -> Vec<(String, i64)> {
    (0..count)
        .map(|_| {
            let key: String = (0..key_len)
                .map(|_| KEY_ALPHABET[rng.gen_range(0..KEY_ALPHABET.len())] as char)
                .collect();
            let value = rng.gen_range(values.clone());
            (key, value)
        })
        .collect()
}
