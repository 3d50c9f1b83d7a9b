//! Mode 2: a single stream slowly twisting.

use rand::RngCore;

use super::{Pattern, oscillator::Oscillator};
use crate::{
    color::{Rgb, rgb_from_u32},
    strobe::{Fill, Frame, StrobeTiming},
};

#[allow(clippy::unreadable_literal)]
pub const HELIX_COLOR: Rgb = rgb_from_u32(0x00A0FF);
/// Strobe period at the bottom of the oscillation
pub const HELIX_BASE_PERIOD_US: u64 = 10_000;
/// Extra period at the top of the oscillation
pub const HELIX_PERIOD_SWING_US: u64 = 400;
/// Ticks per oscillator step
pub const HELIX_OSCILLATION_TICKS: u16 = 3;
/// Lit fraction of each period
pub const HELIX_ON_PERMILLE: u16 = 50;

#[derive(Debug, Clone)]
pub struct HelixPattern {
    oscillator: Oscillator,
}

impl Default for HelixPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl HelixPattern {
    pub const fn new() -> Self {
        Self {
            oscillator: Oscillator::new(HELIX_OSCILLATION_TICKS),
        }
    }
}

impl Pattern for HelixPattern {
    fn advance(&mut self, _rng: &mut dyn RngCore) -> Frame {
        self.oscillator.tick();
        let period = self
            .oscillator
            .modulate(HELIX_BASE_PERIOD_US, HELIX_PERIOD_SWING_US);

        let mut frame = Frame::new(period);
        frame.flash(
            Fill::Solid(HELIX_COLOR),
            StrobeTiming::split(period, HELIX_ON_PERMILLE),
        );
        frame
    }
}
