//! Deferred-sort configuration for [`SortedSet`](crate::SortedSet).

use corral_core::CollectionError;

/// How much unsorted work a sorted set may defer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortedSetConfig {
    /// Maximum number of appended values kept outside the sorted prefix.
    ///
    /// Each `add` scans the pending tail linearly and every read merges it
    /// in, so the bound trades insert throughput against query cost. Zero
    /// keeps the set fully sorted after every insert.
    ///
    /// Default: 32. Must not exceed [`SortedSetConfig::MAX_PENDING_LIMIT`].
    pub max_pending: usize,
}

impl SortedSetConfig {
    /// Default pending-tail bound.
    pub const DEFAULT_MAX_PENDING: usize = 32;

    /// Largest accepted pending-tail bound.
    pub const MAX_PENDING_LIMIT: usize = 4096;

    /// Create a config with the default bound.
    pub fn new() -> Self {
        Self {
            max_pending: Self::DEFAULT_MAX_PENDING,
        }
    }

    /// Check the bound.
    pub fn validate(&self) -> Result<(), CollectionError> {
        if self.max_pending > Self::MAX_PENDING_LIMIT {
            return Err(CollectionError::invalid(format!(
                "max_pending must be <= {}, got {}",
                Self::MAX_PENDING_LIMIT,
                self.max_pending
            )));
        }
        Ok(())
    }
}

impl Default for SortedSetConfig {
    fn default() -> Self {
        Self::new()
    }
}
