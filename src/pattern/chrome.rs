//! Mode 6: four shimmering quadrants.
//!
//! Every quadrant holds its own color and slowly chases a target. Every
//! few ticks one random quadrant is handed one of four random chrome hues
//! as its new target. A longer lit fraction gives the stream a fuzzy look.

use rand::RngCore;

use super::{
    Pattern,
    oscillator::{Cadence, Oscillator},
};
use crate::{
    color::{Rgb, nudge_colors, rgb_from_u32},
    strobe::{Fill, Frame, StrobeTiming},
};

pub const CHROME_QUADRANTS: usize = 4;
#[allow(clippy::unreadable_literal)]
pub const CHROME_TARGETS: [Rgb; 4] = [
    rgb_from_u32(0xC0D8FF), // Ice
    rgb_from_u32(0x40FFE0), // Mint
    rgb_from_u32(0xFF60C0), // Rose
    rgb_from_u32(0xFFE080), // Gold
];
pub const CHROME_BASE_PERIOD_US: u64 = 11_000;
pub const CHROME_PERIOD_SWING_US: u64 = 500;
pub const CHROME_OSCILLATION_TICKS: u16 = 5;
pub const CHROME_ON_PERMILLE: u16 = 180;
/// Ticks between retargeting a quadrant
pub const CHROME_SHIFT_TICKS: u16 = 40;
/// Per-channel change per tick while chasing a target
pub const CHROME_BLEND_STEP: u8 = 4;

#[derive(Debug, Clone)]
pub struct ChromePattern {
    oscillator: Oscillator,
    shift: Cadence,
    colors: [Rgb; CHROME_QUADRANTS],
    targets: [Rgb; CHROME_QUADRANTS],
}

impl Default for ChromePattern {
    fn default() -> Self {
        Self::new()
    }
}

impl ChromePattern {
    pub const fn new() -> Self {
        Self {
            oscillator: Oscillator::new(CHROME_OSCILLATION_TICKS),
            shift: Cadence::new(CHROME_SHIFT_TICKS),
            colors: CHROME_TARGETS,
            targets: CHROME_TARGETS,
        }
    }

    pub const fn colors(&self) -> [Rgb; CHROME_QUADRANTS] {
        self.colors
    }

    pub const fn targets(&self) -> [Rgb; CHROME_QUADRANTS] {
        self.targets
    }

    #[allow(clippy::cast_possible_truncation)]
    fn retarget(&mut self, rng: &mut dyn RngCore) {
        let quadrant = (rng.next_u32() % CHROME_QUADRANTS as u32) as usize;
        let target = (rng.next_u32() % CHROME_TARGETS.len() as u32) as usize;
        self.targets[quadrant] = CHROME_TARGETS[target];
    }
}

impl Pattern for ChromePattern {
    fn advance(&mut self, rng: &mut dyn RngCore) -> Frame {
        self.oscillator.tick();
        if self.shift.tick() {
            self.retarget(rng);
        }
        for (color, target) in self.colors.iter_mut().zip(self.targets) {
            *color = nudge_colors(*color, target, CHROME_BLEND_STEP);
        }

        let period = self
            .oscillator
            .modulate(CHROME_BASE_PERIOD_US, CHROME_PERIOD_SWING_US);
        let mut frame = Frame::new(period);
        frame.flash(
            Fill::segments(&self.colors),
            StrobeTiming::split(period, CHROME_ON_PERMILLE),
        );
        frame
    }
}
