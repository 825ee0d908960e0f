//! Growable sequences for corral collections.
//!
//! [`Vector`] is the general-purpose sequence: values live contiguously in
//! an [`Allocation`](corral_alloc::Allocation) and are addressed by
//! position. [`Stack`], [`Queue`] and [`Deque`] wrap a vector and expose
//! only the operations of their access discipline.
//!
//! Growth follows [`VectorConfig`]: capacity becomes
//! `max(required, 8, capacity × 1.5)` when full and halves when the vector
//! drops below a quarter full.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adapters;
pub mod config;
pub mod iter;
pub mod slice;
pub mod vector;

pub use adapters::{Deque, Queue, Stack};
pub use config::VectorConfig;
pub use iter::{IntoIter, Iter};
pub use vector::Vector;
