//! Regeneration tick source
//!
//! An explicit, injectable scheduler fed simulated time. Tests advance it
//! with `Duration`s instead of depending on wall-clock timers.

use std::time::Duration;

/// Fixed-interval tick source
#[derive(Debug, Clone)]
pub struct Ticker {
    /// Interval between ticks, in seconds
    interval: f32,
    since_last: f32,
}

impl Ticker {
    pub fn new(interval: f32) -> Self {
        Self { interval, since_last: 0.0 }
    }

    /// Advance by `delta` and return how many ticks elapsed
    pub fn update(&mut self, delta: Duration) -> u32 {
        self.since_last += delta.as_secs_f32();
        let mut ticks = 0;
        while self.since_last >= self.interval {
            self.since_last -= self.interval;
            ticks += 1;
        }
        ticks
    }

    pub fn reset(&mut self) {
        self.since_last = 0.0;
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(1.0)
    }
}
