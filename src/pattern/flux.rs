//! Mode 12: tour of the water-stream modes.
//!
//! Flux does not render anything itself. It hands each tick to one of the
//! stream generators and moves on to the next one, in order, once the
//! interval has passed.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::ModeId;

/// Modes Flux visits, in visiting order
pub const FLUX_SEQUENCE: [ModeId; 10] = [
    ModeId::Helix,
    ModeId::Ghost,
    ModeId::Spectrum,
    ModeId::VolcanicLightning,
    ModeId::Chrome,
    ModeId::Vaporwave,
    ModeId::Unicorn,
    ModeId::NorthernLights,
    ModeId::Tropical,
    ModeId::VaporwaveDusk,
];

/// Sequential round-robin over [`FLUX_SEQUENCE`]
#[derive(Debug, Clone)]
pub struct FluxDispatcher {
    interval: Duration,
    count: usize,
    index: usize,
    switched_at: Option<Instant>,
}

impl FluxDispatcher {
    /// `count` is clamped to `1..=FLUX_SEQUENCE.len()`
    pub fn new(interval: Duration, count: u8) -> Self {
        Self {
            interval,
            count: usize::from(count).clamp(1, FLUX_SEQUENCE.len()),
            index: 0,
            switched_at: None,
        }
    }

    /// Mode to render this tick
    ///
    /// Moves at most one step per call, however long the gap since the
    /// last switch.
    pub fn select(&mut self, now: Instant) -> ModeId {
        match self.switched_at {
            None => self.switched_at = Some(now),
            Some(at) => {
                let due = now
                    .checked_duration_since(at)
                    .is_some_and(|elapsed| elapsed >= self.interval);
                if due {
                    self.index = (self.index + 1) % self.count;
                    self.switched_at = Some(now);
                    #[cfg(feature = "esp32-log")]
                    println!(
                        "[FluxDispatcher.select] switching to {}",
                        self.current().as_str()
                    );
                }
            }
        }
        self.current()
    }

    pub const fn current(&self) -> ModeId {
        FLUX_SEQUENCE[self.index]
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn count(&self) -> usize {
        self.count
    }
}
