//! Corral: arena-backed collections with pluggable key identity.
//!
//! This is the top-level facade crate that re-exports the public API from
//! every corral sub-crate. For most users, adding `corral` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use corral::prelude::*;
//!
//! let mut numbers = Vector::new();
//! numbers.push_all([1, 2, 3]);
//! assert_eq!(numbers.pop(), Ok(3));
//! numbers.insert(1, 0).unwrap();
//! assert_eq!(numbers.to_vec(), vec![1, 0, 2]);
//!
//! let mut ages = HashMap::new();
//! ages.put("ada", 36);
//! ages.put("alan", 41);
//! assert_eq!(ages.get(&"alan"), Ok(&41));
//!
//! let ordered: SortedSet<i32> = [5, 3, 8, 3].into_iter().collect();
//! assert_eq!(ordered.to_vec(), vec![3, 5, 8]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `corral-core` | Errors, capability traits, key contracts, comparators |
//! | [`alloc`] | `corral-alloc` | Slot arena `Allocation` and its `Read` iterator |
//! | [`seq`] | `corral-seq` | `Vector` and the `Stack`/`Queue`/`Deque` adapters |
//! | [`table`] | `corral-table` | `HashTable` engine with `HashMap`/`HashSet` views |
//! | [`sorted`] | `corral-sorted` | Comparator-ordered `SortedSet` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Errors, capability traits, key contracts and comparators (`corral-core`).
///
/// The capability traits ([`types::Collection`], [`types::Sequence`],
/// [`types::Map`], [`types::Set`]) are also in the [`prelude`].
pub use corral_core as types;

/// Fixed-capacity slot arena (`corral-alloc`).
pub use corral_alloc as alloc;

/// Growable vector and its adapters (`corral-seq`).
///
/// [`seq::Vector`] grows by 1.5x (minimum 8 slots) and halves once less
/// than a quarter full.
pub use corral_seq as seq;

/// Hashed associative storage (`corral-table`).
///
/// [`table::HashMap`] and [`table::HashSet`] enumerate in insertion order.
pub use corral_table as table;

/// Comparator-ordered sets (`corral-sorted`).
pub use corral_sorted as sorted;

/// Common imports for typical corral usage.
///
/// ```rust
/// use corral::prelude::*;
/// ```
pub mod prelude {
    // Errors and capabilities
    pub use corral_core::{
        Arrayable, Collection, CollectionError, Map, Positional, Sequence, Set, Sortable,
    };

    // Identity and order
    pub use corral_core::{ByHashable, Comparator, FnContract, Hashable, KeyContract, Natural};

    // Structures
    pub use corral_alloc::Allocation;
    pub use corral_seq::{Deque, Queue, Stack, Vector};
    pub use corral_sorted::SortedSet;
    pub use corral_table::{HashMap, HashSet};

    // Configuration
    pub use corral_seq::VectorConfig;
    pub use corral_sorted::SortedSetConfig;
    pub use corral_table::TableConfig;
}
