//! Growth policy configuration for [`Vector`](crate::Vector).

use corral_core::CollectionError;

/// Capacity growth parameters for a vector.
///
/// When an operation needs more room than the allocation has, the new
/// capacity is `max(required, min_capacity, capacity × growth_factor)`.
/// Shrinking is fixed: once the length drops below a quarter of the
/// capacity, the capacity is halved.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorConfig {
    /// Smallest non-zero capacity the vector will grow to.
    ///
    /// Default: 8. Must be at least 1.
    pub min_capacity: usize,

    /// Multiplier applied to the current capacity on growth.
    ///
    /// Default: 1.5. Must be finite and greater than 1.
    pub growth_factor: f64,
}

impl VectorConfig {
    /// Default lowest non-zero capacity.
    pub const DEFAULT_MIN_CAPACITY: usize = 8;

    /// Default growth multiplier.
    pub const DEFAULT_GROWTH_FACTOR: f64 = 1.5;

    /// Shrink is triggered when `len < capacity / SHRINK_TRIGGER_DIVISOR`.
    pub const SHRINK_TRIGGER_DIVISOR: usize = 4;

    /// On shrink, capacity becomes `capacity / SHRINK_DIVISOR`.
    pub const SHRINK_DIVISOR: usize = 2;

    /// Create a config with the default growth parameters.
    pub fn new() -> Self {
        Self {
            min_capacity: Self::DEFAULT_MIN_CAPACITY,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        }
    }

    /// Check that the parameters describe a growing policy.
    pub fn validate(&self) -> Result<(), CollectionError> {
        if self.min_capacity == 0 {
            return Err(CollectionError::invalid("min_capacity must be at least 1"));
        }
        if !self.growth_factor.is_finite() || self.growth_factor <= 1.0 {
            return Err(CollectionError::invalid(format!(
                "growth_factor must be finite and > 1, got {}",
                self.growth_factor
            )));
        }
        Ok(())
    }

    /// The capacity to grow to from `capacity` so that `required` slots fit.
    pub fn grown_capacity(&self, capacity: usize, required: usize) -> usize {
        let scaled = (capacity as f64 * self.growth_factor) as usize;
        required.max(self.min_capacity).max(scaled)
    }

    /// The capacity to shrink to, if `len` is low enough to warrant it.
    pub fn shrunk_capacity(&self, capacity: usize, len: usize) -> Option<usize> {
        if len < capacity / Self::SHRINK_TRIGGER_DIVISOR {
            Some(capacity / Self::SHRINK_DIVISOR)
        } else {
            None
        }
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self::new()
    }
}
