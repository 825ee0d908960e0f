//! Error types for corral collections.
//!
//! Every fallible operation in the workspace reports one of the
//! [`CollectionError`] variants below. Errors are raised synchronously at
//! the violating call and never leave a structure partially mutated.

use std::error::Error;
use std::fmt;

/// Errors raised by collection operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CollectionError {
    /// An index fell outside the valid bounds for the operation.
    ///
    /// Valid indices are `[0, len)`. Operations that accept the one-past-end
    /// position (e.g. `insert`) report `len` as their exclusive bound plus one.
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// Exclusive upper bound of the valid index range.
        len: usize,
    },
    /// A removal or peek was attempted on an empty structure.
    Underflow,
    /// A key lookup found no matching entry.
    NotFound,
    /// An argument was structurally invalid (bad range, bad config value).
    InvalidArgument {
        /// Description of the rejected argument.
        reason: String,
    },
    /// The operation is not supported by this structure.
    Unsupported {
        /// Name of the rejected operation.
        operation: &'static str,
    },
}

impl CollectionError {
    /// Shorthand for [`CollectionError::InvalidArgument`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Check `index < len`, returning [`CollectionError::OutOfRange`] otherwise.
    pub fn check_index(index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(Self::OutOfRange { index, len })
        }
    }
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range: expected 0 <= index < {len}")
            }
            Self::Underflow => write!(f, "collection is empty"),
            Self::NotFound => write!(f, "key not found"),
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::Unsupported { operation } => {
                write!(f, "operation not supported: {operation}")
            }
        }
    }
}

impl Error for CollectionError {}
