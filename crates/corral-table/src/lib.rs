//! Hashed associative storage for corral collections.
//!
//! [`HashTable`] is the engine: a bucketed hash index over an
//! insertion-ordered entry log. [`HashMap`] and [`HashSet`] are thin views
//! that present map and set capabilities on top of it, including set
//! algebra.
//!
//! Key identity is pluggable through [`KeyContract`](corral_core::KeyContract):
//! structural `Hash + Eq` by default, or an object-style
//! [`Hashable`](corral_core::Hashable) capability, or closures.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod map;
pub mod set;
pub mod table;

pub use config::TableConfig;
pub use map::HashMap;
pub use set::HashSet;
pub use table::HashTable;
