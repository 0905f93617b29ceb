use std::time::{Duration, Instant};

/// Monotonic time since boot.
pub trait Clock {
    fn now(&self) -> Duration;
}

pub struct MonotonicClock {
    boot: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            boot: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.boot.elapsed()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Runs an action at most once per interval.
///
/// Each call site owns its own ticker. Intervals that pass without a call
/// are skipped, nothing is queued up to catch up later.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    last: Duration,
}

impl Ticker {
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Duration::ZERO,
        }
    }

    /// Returns true if `action` ran.
    pub fn every<F: FnOnce()>(&mut self, now: Duration, action: F) -> bool {
        // fires once a full interval has elapsed, including exactly on it
        if now.saturating_sub(self.last) < self.interval {
            return false;
        }
        self.last = now;
        action();
        true
    }
}
