//! Key equality and hashing contracts for hashed storage.
//!
//! A [`KeyContract`] pairs a deterministic equality test with a hash
//! function consistent with it: keys that compare equal must hash equal.
//! Hashed structures are generic over the contract so callers can choose
//! between Rust's own `Hash + Eq` ([`Structural`]), an object-style
//! [`Hashable`] capability ([`ByHashable`]), or ad-hoc closures
//! ([`FnContract`]).

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Equality and hash contract consumed by hashed storage.
///
/// Implementations must be deterministic and consistent:
/// `keys_equal(a, b)` implies `hash_key(a) == hash_key(b)`.
pub trait KeyContract<K: ?Sized> {
    /// Hash a key.
    fn hash_key(&self, key: &K) -> u64;

    /// Whether two keys identify the same entry.
    fn keys_equal(&self, a: &K, b: &K) -> bool;
}

/// Structural equality via the key type's `Hash + Eq` implementations.
///
/// Hashing uses `DefaultHasher::new()`, which is keyed with fixed values,
/// so hashes are stable across runs of the same build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Structural;

impl<K: Hash + Eq + ?Sized> KeyContract<K> for Structural {
    fn hash_key(&self, key: &K) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    fn keys_equal(&self, a: &K, b: &K) -> bool {
        a == b
    }
}

/// Object-style hash/equality capability.
///
/// For key types whose identity is not their structural `Eq`, e.g. records
/// compared by a subset of their fields.
pub trait Hashable {
    /// A hash value consistent with [`Hashable::equals`].
    fn hash_code(&self) -> u64;

    /// Whether `self` and `other` identify the same key.
    fn equals(&self, other: &Self) -> bool;
}

/// Contract that defers to the key's [`Hashable`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ByHashable;

impl<K: Hashable + ?Sized> KeyContract<K> for ByHashable {
    fn hash_key(&self, key: &K) -> u64 {
        key.hash_code()
    }

    fn keys_equal(&self, a: &K, b: &K) -> bool {
        a.equals(b)
    }
}

/// Contract built from caller-supplied hash and equality closures.
#[derive(Clone, Copy)]
pub struct FnContract<H, E> {
    hash: H,
    eq: E,
}

impl<H, E> FnContract<H, E> {
    /// Build a contract from a hash function and an equality test.
    ///
    /// The caller is responsible for consistency between the two.
    pub fn new(hash: H, eq: E) -> Self {
        Self { hash, eq }
    }
}

impl<K, H, E> KeyContract<K> for FnContract<H, E>
where
    K: ?Sized,
    H: Fn(&K) -> u64,
    E: Fn(&K, &K) -> bool,
{
    fn hash_key(&self, key: &K) -> u64 {
        (self.hash)(key)
    }

    fn keys_equal(&self, a: &K, b: &K) -> bool {
        (self.eq)(a, b)
    }
}

impl<H, E> fmt::Debug for FnContract<H, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnContract").finish_non_exhaustive()
    }
}
