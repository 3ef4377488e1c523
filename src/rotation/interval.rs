// SPDX-License-Identifier: MPL-2.0
//! Tick interval domain type for automatic rotation.
//!
//! This module provides a type-safe wrapper for the period between two
//! automatic advances, in milliseconds.

use crate::config::{MAX_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS};
use std::time::Duration;

/// Period between automatic advances of a rotation.
///
/// User-configured values are clamped to the valid range (1–60 seconds).
///
/// # Example
///
/// ```
/// use podium::rotation::TickInterval;
///
/// let interval = TickInterval::new(3000);
/// assert_eq!(interval.millis(), 3000);
///
/// // Values outside range are clamped
/// let too_fast = TickInterval::new(10);
/// assert_eq!(too_fast.millis(), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickInterval(u64);

impl TickInterval {
    /// Creates a new interval, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS))
    }

    /// Creates an interval from a fixed constant without clamping.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}
