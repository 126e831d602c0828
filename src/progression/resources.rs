//! Resource pools
//!
//! Clamped gauges (hp, energy) with spend, restore, and regeneration.

use serde::{Deserialize, Serialize};

use crate::error::ResourceError;

/// A clamped numeric gauge in [0, max]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    current: i32,
    max: i32,
}

impl Resource {
    /// Create a full pool
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    /// Pay a cost, or fail without any change
    pub fn spend(&mut self, cost: i32) -> Result<(), ResourceError> {
        if self.current < cost {
            return Err(ResourceError::Insufficient { current: self.current, cost });
        }
        self.current -= cost;
        Ok(())
    }

    /// Add, clamped to max. A no-op once full.
    pub fn restore(&mut self, amount: i32) {
        self.current = (self.current + amount).min(self.max);
    }

    /// Set directly, clamped into [0, max]
    pub fn set(&mut self, value: i32) {
        self.current = value.clamp(0, self.max);
    }

    /// Halve the remaining amount (defeat penalty)
    pub fn halve(&mut self) {
        self.current /= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spend_rejects_without_mutation() {
        let mut pool = Resource::new(30);
        pool.set(10);
        let err = pool.spend(11).unwrap_err();
        assert_eq!(err, ResourceError::Insufficient { current: 10, cost: 11 });
        assert_eq!(pool.current(), 10);
    }

    #[test]
    fn test_spend_to_exactly_zero() {
        let mut pool = Resource::new(30);
        assert!(pool.spend(30).is_ok());
        assert_eq!(pool.current(), 0);
    }

    #[test]
    fn test_restore_clamps_to_max() {
        let mut pool = Resource::new(50);
        pool.set(45);
        pool.restore(20);
        assert_eq!(pool.current(), 50);
        pool.restore(5); // no-op at max
        assert_eq!(pool.current(), 50);
    }

    #[test]
    fn test_halve() {
        let mut pool = Resource::new(100);
        pool.set(31);
        pool.halve();
        assert_eq!(pool.current(), 15);
    }
}
