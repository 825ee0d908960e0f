//! Keys whose hashes always collide.

use std::hash::{Hash, Hasher};

use corral_core::Hashable;

/// Hash code reported by every [`CollidingKey`].
pub const COLLIDING_HASH: u64 = 0x5EED;

/// A key that hashes identically to every other `CollidingKey`.
///
/// Identity is the `id` alone. Both the `Hash` impl and the [`Hashable`]
/// impl are constant, so every key lands in the same bucket under either
/// contract and lookups must fall back to equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollidingKey(pub u32);

impl Hash for CollidingKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        COLLIDING_HASH.hash(state);
    }
}

impl Hashable for CollidingKey {
    fn hash_code(&self) -> u64 {
        COLLIDING_HASH
    }

    fn equals(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corral_core::{KeyContract, Structural};

    #[test]
    fn distinct_keys_share_a_hash() {
        let a = CollidingKey(1);
        let b = CollidingKey(2);
        assert_eq!(Structural.hash_key(&a), Structural.hash_key(&b));
        assert_eq!(a.hash_code(), b.hash_code());
        assert!(!a.equals(&b));
    }
}
