//! Bucket and compaction configuration for [`HashTable`](crate::HashTable).

use corral_core::CollectionError;

/// Sizing parameters for a hash table.
#[derive(Clone, Debug, PartialEq)]
pub struct TableConfig {
    /// Bucket count of an empty table.
    ///
    /// Default: 8. Must be at least 1.
    pub initial_buckets: usize,

    /// Bucket count doubles once `count / buckets` exceeds this.
    ///
    /// Default: 0.75. Must lie in `(0, 1]`.
    pub load_factor: f64,

    /// Removed entries leave tombstones in the insertion-order log. The
    /// log is compacted once tombstones exceed `compaction_ratio × count`.
    ///
    /// Default: 1.0. Must be finite and non-negative.
    pub compaction_ratio: f64,
}

impl TableConfig {
    /// Default initial bucket count.
    pub const DEFAULT_INITIAL_BUCKETS: usize = 8;

    /// Default maximum load factor.
    pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

    /// Default tombstone-to-entry ratio that triggers compaction.
    pub const DEFAULT_COMPACTION_RATIO: f64 = 1.0;

    /// Create a config with default parameters.
    pub fn new() -> Self {
        Self {
            initial_buckets: Self::DEFAULT_INITIAL_BUCKETS,
            load_factor: Self::DEFAULT_LOAD_FACTOR,
            compaction_ratio: Self::DEFAULT_COMPACTION_RATIO,
        }
    }

    /// Check every parameter, reporting the first invalid one.
    pub fn validate(&self) -> Result<(), CollectionError> {
        if self.initial_buckets == 0 {
            return Err(CollectionError::invalid("initial_buckets must be at least 1"));
        }
        if !(self.load_factor > 0.0 && self.load_factor <= 1.0) {
            return Err(CollectionError::invalid(format!(
                "load_factor must lie in (0, 1], got {}",
                self.load_factor
            )));
        }
        if !self.compaction_ratio.is_finite() || self.compaction_ratio < 0.0 {
            return Err(CollectionError::invalid(format!(
                "compaction_ratio must be finite and >= 0, got {}",
                self.compaction_ratio
            )));
        }
        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new()
    }
}
