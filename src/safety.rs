//! Runtime ceiling for the pump and magnet.
//!
//! There is no flow or level sensor, so the only protection against the
//! reservoir running dry is a cap on continuous runtime. Once the cap is
//! hit the timer latches until the user turns the knob to another mode.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Latching runtime ceiling
#[derive(Debug, Clone)]
pub struct ShutdownTimer {
    ceiling: Duration,
    reset_at: Instant,
    expired: bool,
}

impl ShutdownTimer {
    /// Start counting from `now` (power-on)
    pub const fn new(ceiling: Duration, now: Instant) -> Self {
        Self {
            ceiling,
            reset_at: now,
            expired: false,
        }
    }

    /// Clear the latch and restart counting from `now`
    pub fn on_mode_change(&mut self, now: Instant) {
        self.reset_at = now;
        self.expired = false;
    }

    /// Evaluate the ceiling once per tick
    ///
    /// `engaged` tells whether the current mode wants the actuators running.
    /// Returns the latched state.
    pub fn update(&mut self, now: Instant, engaged: bool) -> bool {
        if self.expired || !engaged {
            return self.expired;
        }
        if self.elapsed(now) >= self.ceiling {
            #[cfg(feature = "esp32-log")]
            println!(
                "[ShutdownTimer.update] runtime ceiling reached after {} s",
                self.elapsed(now).as_secs()
            );
            self.expired = true;
            self.reset_at = now;
        }
        self.expired
    }

    /// Time since the last reset
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.checked_duration_since(self.reset_at)
            .unwrap_or(Duration::from_ticks(0))
    }

    pub const fn is_expired(&self) -> bool {
        self.expired
    }

    pub const fn ceiling(&self) -> Duration {
        self.ceiling
    }
}
