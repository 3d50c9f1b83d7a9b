//! Mode 5: lava streams with the odd lightning strike.
//!
//! The left half of the strip glows lava red, the right half ember orange.
//! Each tick a weighted draw decides whether a white-violet flash is struck
//! in the middle of the dark part of the period.

use rand::RngCore;

use super::Pattern;
use crate::{
    color::{Rgb, rgb_from_u32},
    strobe::{Fill, Frame, StrobeTiming},
};

#[allow(clippy::unreadable_literal)]
pub const VOLCANIC_COLORS: [Rgb; 2] = [rgb_from_u32(0xFF1800), rgb_from_u32(0xFF6000)];
#[allow(clippy::unreadable_literal)]
pub const FLASH_COLOR: Rgb = rgb_from_u32(0xE0D0FF);
pub const VOLCANIC_PERIOD_US: u64 = 12_000;
pub const VOLCANIC_ON_PERMILLE: u16 = 80;
/// Hold of a lightning flash
pub const FLASH_HOLD_US: u64 = 400;
/// Chance of a strike per tick, in permille
pub const STRIKE_PERMILLE: u32 = 30;

#[derive(Debug, Clone, Default)]
pub struct VolcanicPattern {
    strikes: u32,
}

impl VolcanicPattern {
    pub const fn new() -> Self {
        Self { strikes: 0 }
    }

    /// Number of strikes inserted so far
    pub const fn strikes(&self) -> u32 {
        self.strikes
    }

    fn draw_strike(rng: &mut dyn RngCore) -> bool {
        rng.next_u32() % 1000 < STRIKE_PERMILLE
    }
}

impl Pattern for VolcanicPattern {
    fn advance(&mut self, rng: &mut dyn RngCore) -> Frame {
        let timing = StrobeTiming::split(VOLCANIC_PERIOD_US, VOLCANIC_ON_PERMILLE);
        let mut frame = Frame::new(VOLCANIC_PERIOD_US);
        frame.push(Fill::segments(&VOLCANIC_COLORS), timing.on);

        if Self::draw_strike(rng) && timing.off > FLASH_HOLD_US {
            self.strikes = self.strikes.wrapping_add(1);
            let dark = timing.off - FLASH_HOLD_US;
            let before = dark / 2;
            frame.push(Fill::Clear, before);
            frame.push(Fill::Solid(FLASH_COLOR), FLASH_HOLD_US);
            frame.push(Fill::Clear, dark - before);
        } else {
            frame.push(Fill::Clear, timing.off);
        }
        frame
    }
}
