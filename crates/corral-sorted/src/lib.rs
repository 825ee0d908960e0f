//! Comparator-ordered sets for corral collections.
//!
//! [`SortedSet`] keeps unique values in a [`Vector`](corral_seq::Vector)
//! ordered by a [`Comparator`](corral_core::Comparator). Inserts are
//! batched: new values collect in a short unsorted tail that is folded
//! into the sorted prefix lazily, while every query still sees the exact
//! ordered contents.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod set;

pub use config::SortedSetConfig;
pub use set::{Iter, SortedSet};
