//! Workload builders shared by the corral benchmarks.
//!
//! - [`shuffled_keys`]: a seeded permutation of `0..n`
//! - [`filled_vector`], [`filled_map`], [`filled_sorted`]: structures
//!   pre-populated from such a permutation

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use corral_seq::Vector;
use corral_sorted::SortedSet;
use corral_table::HashMap;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic Fisher-Yates permutation of `0..n`.
pub fn shuffled_keys(n: u32, seed: u64) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut keys: Vec<u32> = (0..n).collect();
    for i in (1..keys.len()).rev() {
        let j = (rng.next_u64() % (i as u64 + 1)) as usize;
        keys.swap(i, j);
    }
    keys
}

/// A vector holding `0..n` in shuffled order.
pub fn filled_vector(n: u32, seed: u64) -> Vector<u32> {
    shuffled_keys(n, seed).into_iter().collect()
}

/// A map from each key in a shuffled `0..n` to its square.
pub fn filled_map(n: u32, seed: u64) -> HashMap<u32, u64> {
    shuffled_keys(n, seed)
        .into_iter()
        .map(|k| (k, u64::from(k) * u64::from(k)))
        .collect()
}

/// A naturally ordered set of `0..n`, inserted in shuffled order.
pub fn filled_sorted(n: u32, seed: u64) -> SortedSet<u32> {
    shuffled_keys(n, seed).into_iter().collect()
}
