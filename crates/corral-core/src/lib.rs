//! Core types and traits for corral collections.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the abstractions shared by every structure in the workspace: the
//! error taxonomy, capability traits, key equality/hash contracts, and
//! comparators.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod order;
pub mod traits;

pub use contract::{ByHashable, FnContract, Hashable, KeyContract, Structural};
pub use error::CollectionError;
pub use order::{Comparator, Natural};
pub use traits::{Arrayable, Collection, Map, Positional, Sequence, Set, Sortable};
