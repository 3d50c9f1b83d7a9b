//! Time source and blocking waits.
//!
//! Every strobe hold and actuator ramp step goes through [`Clock`], so the
//! control core never touches a hardware timer directly. On target the
//! [`EmbassyClock`] blocks on the `embassy-time` driver; on host the
//! [`VirtualClock`] jumps straight to each deadline.

use embassy_time::{Duration, Instant, block_for};

/// Monotonic time source with "wait until" semantics
pub trait Clock {
    /// Current time
    fn now(&self) -> Instant;

    /// Block until `deadline` has passed
    ///
    /// Returns immediately if the deadline is already in the past.
    fn wait_until(&mut self, deadline: Instant);

    /// Block for `duration` starting from now
    fn delay(&mut self, duration: Duration) {
        let deadline = self.now() + duration;
        self.wait_until(deadline);
    }
}

/// Blocking clock backed by the `embassy-time` driver
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn wait_until(&mut self, deadline: Instant) {
        if let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
            block_for(remaining);
        }
    }
}

/// Simulated clock: waiting advances time instantly
#[derive(Debug, Clone, Copy)]
pub struct VirtualClock {
    now: Instant,
}

impl Default for VirtualClock {
    fn default() -> Self {
        Self::new(Instant::from_ticks(0))
    }
}

impl VirtualClock {
    pub const fn new(start: Instant) -> Self {
        Self { now: start }
    }

    /// Move time forward without anyone waiting
    pub fn advance(&mut self, duration: Duration) {
        self.now += duration;
    }
}

impl Clock for VirtualClock {
    fn now(&self) -> Instant {
        self.now
    }

    fn wait_until(&mut self, deadline: Instant) {
        if deadline > self.now {
            self.now = deadline;
        }
    }
}
