//! Mode 10: seven streams spread around the color wheel.
//!
//! The hues sit evenly around the wheel starting from a slowly rising base
//! hue. The dark gaps between streams are twice the trailing gap, which
//! spreads the streams apart.

use rand::RngCore;

use super::{
    Pattern,
    oscillator::{Cadence, Oscillator},
};
use crate::{
    color::{hsv, hsv2rgb},
    strobe::{Fill, Frame, portion},
};

pub const TROPICAL_STREAMS: u64 = 7;
/// Hue distance between neighbouring streams
pub const TROPICAL_HUE_STEP: u8 = 36;
/// Ticks per base hue step
pub const TROPICAL_HUE_TICKS: u16 = 3;
pub const TROPICAL_BASE_PERIOD_US: u64 = 16_000;
pub const TROPICAL_PERIOD_SWING_US: u64 = 800;
pub const TROPICAL_OSCILLATION_TICKS: u16 = 5;
/// Lit fraction of the whole sequence
pub const TROPICAL_ON_PERMILLE: u64 = 150;
/// Weight of an inner gap relative to the trailing gap
pub const TROPICAL_GAP_WEIGHT: u64 = 2;

#[derive(Debug, Clone)]
pub struct TropicalPattern {
    oscillator: Oscillator,
    drift: Cadence,
    base_hue: u8,
}

impl Default for TropicalPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl TropicalPattern {
    pub const fn new() -> Self {
        Self {
            oscillator: Oscillator::new(TROPICAL_OSCILLATION_TICKS),
            drift: Cadence::new(TROPICAL_HUE_TICKS),
            base_hue: 0,
        }
    }

    pub const fn base_hue(&self) -> u8 {
        self.base_hue
    }
}

impl Pattern for TropicalPattern {
    #[allow(clippy::cast_possible_truncation)]
    fn advance(&mut self, _rng: &mut dyn RngCore) -> Frame {
        self.oscillator.tick();
        if self.drift.tick() {
            self.base_hue = self.base_hue.wrapping_add(1);
        }

        let period = self
            .oscillator
            .modulate(TROPICAL_BASE_PERIOD_US, TROPICAL_PERIOD_SWING_US);
        let lit = period * TROPICAL_ON_PERMILLE / 1000;
        let dark = period - lit;
        let inner_gaps = TROPICAL_STREAMS - 1;
        let inner_gap = dark / (inner_gaps * TROPICAL_GAP_WEIGHT + 1) * TROPICAL_GAP_WEIGHT;
        let trailing_gap = dark - inner_gap * inner_gaps;

        let mut frame = Frame::new(period);
        for stream in 0..TROPICAL_STREAMS {
            let hue = self
                .base_hue
                .wrapping_add(TROPICAL_HUE_STEP.wrapping_mul(stream as u8));
            frame.push(
                Fill::Solid(hsv2rgb(hsv(hue, 255, 255))),
                portion(lit, TROPICAL_STREAMS, stream),
            );
            let gap = if stream + 1 == TROPICAL_STREAMS {
                trailing_gap
            } else {
                inner_gap
            };
            frame.push(Fill::Clear, gap);
        }
        frame
    }
}
