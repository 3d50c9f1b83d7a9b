//! Slow tick-driven counters shared by the generators.

use crate::math8::wave8;

/// Fires once every `every` ticks
#[derive(Debug, Clone, Copy)]
pub struct Cadence {
    count: u16,
    every: u16,
}

impl Cadence {
    pub const fn new(every: u16) -> Self {
        Self {
            count: 0,
            every: if every == 0 { 1 } else { every },
        }
    }

    /// Count one tick; true when the cadence elapses
    pub fn tick(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.every {
            self.count = 0;
            return true;
        }
        false
    }
}

/// Phase accumulator fed through a sine lookup
///
/// The phase advances by one step per cadence, so a full wave takes
/// `256 * cadence` ticks.
#[derive(Debug, Clone, Copy)]
pub struct Oscillator {
    phase: u8,
    cadence: Cadence,
}

impl Oscillator {
    pub const fn new(cadence: u16) -> Self {
        Self {
            phase: 0,
            cadence: Cadence::new(cadence),
        }
    }

    pub fn tick(&mut self) {
        if self.cadence.tick() {
            self.phase = self.phase.wrapping_add(1);
        }
    }

    pub const fn phase(&self) -> u8 {
        self.phase
    }

    /// Current wave value (0-255)
    pub fn wave(&self) -> u8 {
        wave8(self.phase)
    }

    /// `base` plus the wave's share of `swing`
    pub fn modulate(&self, base: u64, swing: u64) -> u64 {
        base + swing * u64::from(self.wave()) / 255
    }
}
