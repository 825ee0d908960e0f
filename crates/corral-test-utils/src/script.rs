//! Seeded random operation scripts.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One step of a churn workload against a `u32 -> u32` map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChurnOp {
    Put { key: u32, value: u32 },
    Remove { key: u32 },
    Get { key: u32 },
}

/// A deterministic script of `len` operations over keys `[0, key_space)`.
///
/// Roughly half the steps are puts, three in ten removes and the rest
/// lookups. A small key space gives frequent updates and re-insertions
/// of removed keys. The same seed always yields the same script.
pub fn churn_script(seed: u64, len: usize, key_space: u32) -> Vec<ChurnOp> {
    let key_space = key_space.max(1);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            let key = rng.next_u32() % key_space;
            match rng.next_u32() % 10 {
                0..=4 => ChurnOp::Put {
                    key,
                    value: rng.next_u32(),
                },
                5..=7 => ChurnOp::Remove { key },
                _ => ChurnOp::Get { key },
            }
        })
        .collect()
}
