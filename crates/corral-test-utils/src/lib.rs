//! Test utilities for corral development.
//!
//! - [`keys`]: key types with degenerate hashing, for forcing bucket
//!   collisions.
//! - [`model`]: [`ModelTable`], an `IndexMap`-backed reference used in
//!   differential tests of the hashed structures.
//! - [`script`]: seeded random operation scripts for churn tests and
//!   benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod keys;
pub mod model;
pub mod script;

pub use keys::{CollidingKey, COLLIDING_HASH};
pub use model::ModelTable;
pub use script::{churn_script, ChurnOp};
