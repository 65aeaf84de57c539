//! Time sources for the eating cooldown.
//!
//! The cooldown is measured in seconds. [`WallClock`] reads real elapsed time;
//! [`TickClock`] derives time from the tick counter so seeded runs replay
//! identically regardless of how fast the host executes them.

use std::time::Instant;

pub trait Clock: Send {
    /// Seconds since the clock started, at the given tick.
    fn now(&self, tick: u64) -> f64;
}

#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    started: Instant,
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Clock for WallClock {
    fn now(&self, _tick: u64) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    seconds_per_tick: f64,
}

impl TickClock {
    /// Values of `ticks_per_second` below 1 are treated as 1.
    pub fn new(ticks_per_second: i64) -> Self {
        Self {
            seconds_per_tick: 1.0 / ticks_per_second.max(1) as f64,
        }
    }
}

impl Clock for TickClock {
    fn now(&self, tick: u64) -> f64 {
        tick as f64 * self.seconds_per_tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_clock_is_linear() {
        let c = TickClock::new(60);
        assert_eq!(c.now(0), 0.0);
        assert!((c.now(60) - 1.0).abs() < 1e-12);
        assert!((TickClock::new(0).now(3) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_wall_clock_is_monotonic() {
        let c = WallClock::new();
        let a = c.now(0);
        let b = c.now(0);
        assert!(b >= a);
    }
}
