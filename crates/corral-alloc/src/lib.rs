//! Bounds-checked slot arena backing corral sequences.
//!
//! An [`Allocation`] is the storage layer under every growable structure in
//! the workspace: a fixed-capacity block of slots addressed by integer
//! position, resized only on explicit request.
//!
//! # Architecture
//!
//! ```text
//! Allocation<T>
//! └── Vec<Option<T>>   (one slot per position, vacant or occupied)
//!     └── Read<'_, T>  (lazy, restartable view over a slot run)
//! ```
//!
//! Slots are modelled as `Option<T>` rather than raw memory: there is no
//! uninitialised state to track, and every access goes through a bounds
//! check that reports [`CollectionError::OutOfRange`](corral_core::CollectionError)
//! instead of panicking.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod allocation;
pub mod read;

pub use allocation::Allocation;
pub use read::Read;
