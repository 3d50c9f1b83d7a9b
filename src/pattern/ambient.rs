//! Mode 1: mood light without water.
//!
//! The strip glows steadily at reduced brightness while the hue walks
//! around the wheel. Nothing is strobed, so the pump stays off.

use rand::RngCore;

use super::{Pattern, oscillator::Cadence};
use crate::{
    color::{hsv, hsv2rgb},
    strobe::{Fill, Frame},
};

/// Length of one ambient tick
pub const AMBIENT_PERIOD_US: u64 = 20_000;
/// Ticks per hue step
pub const AMBIENT_HUE_TICKS: u16 = 6;
/// Brightness scale relative to the global brightness
pub const AMBIENT_BRIGHTNESS: u8 = 48;

#[derive(Debug, Clone)]
pub struct AmbientPattern {
    hue: u8,
    cadence: Cadence,
}

impl Default for AmbientPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl AmbientPattern {
    pub const fn new() -> Self {
        Self {
            hue: 0,
            cadence: Cadence::new(AMBIENT_HUE_TICKS),
        }
    }

    pub const fn hue(&self) -> u8 {
        self.hue
    }
}

impl Pattern for AmbientPattern {
    const ENGAGES_ACTUATORS: bool = false;

    fn advance(&mut self, _rng: &mut dyn RngCore) -> Frame {
        if self.cadence.tick() {
            self.hue = self.hue.wrapping_add(1);
        }

        let color = hsv2rgb(hsv(self.hue, 255, 255));
        let mut frame = Frame::new(AMBIENT_PERIOD_US).with_brightness(AMBIENT_BRIGHTNESS);
        frame.push(Fill::Solid(color), AMBIENT_PERIOD_US);
        frame
    }
}
