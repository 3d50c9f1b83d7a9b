//! Mode 3: two streams haunting each other.
//!
//! Each stream gets half of the period. Independently of the strobe, a
//! slow cross-fade walks through four stages: stream one fades out and
//! back in, then stream two does the same. A fading stream drifts toward
//! a pale mist color, so it looks washed out rather than just dimmer.

use rand::RngCore;

use super::{
    Pattern,
    oscillator::{Cadence, Oscillator},
};
use crate::{
    color::{Rgb, blend_colors, rgb_from_u32},
    strobe::{Fill, Frame, StrobeTiming, portion},
};

#[allow(clippy::unreadable_literal)]
pub const GHOST_COLORS: [Rgb; 2] = [rgb_from_u32(0x20FF60), rgb_from_u32(0x8020FF)];
/// Color a fully faded stream settles on
#[allow(clippy::unreadable_literal)]
pub const GHOST_MIST: Rgb = rgb_from_u32(0x101418);
pub const GHOST_BASE_PERIOD_US: u64 = 12_000;
pub const GHOST_PERIOD_SWING_US: u64 = 600;
pub const GHOST_OSCILLATION_TICKS: u16 = 4;
/// Lit fraction of each stream's half period
pub const GHOST_ON_PERMILLE: u16 = 60;
/// Ticks per fade step
pub const GHOST_FADE_TICKS: u16 = 2;
/// Level change per fade step
pub const GHOST_FADE_STEP: u8 = 3;

/// Cross-fade stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeStage {
    FirstOut,
    FirstIn,
    SecondOut,
    SecondIn,
}

#[derive(Debug, Clone)]
pub struct GhostPattern {
    oscillator: Oscillator,
    fade: Cadence,
    stage: FadeStage,
    /// Presence of each stream (255 = full color, 0 = mist)
    levels: [u8; 2],
}

impl Default for GhostPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl GhostPattern {
    pub const fn new() -> Self {
        Self {
            oscillator: Oscillator::new(GHOST_OSCILLATION_TICKS),
            fade: Cadence::new(GHOST_FADE_TICKS),
            stage: FadeStage::FirstOut,
            levels: [255, 255],
        }
    }

    pub const fn stage(&self) -> FadeStage {
        self.stage
    }

    pub const fn levels(&self) -> [u8; 2] {
        self.levels
    }

    fn step_fade(&mut self) {
        let (stream, fading_out) = match self.stage {
            FadeStage::FirstOut => (0, true),
            FadeStage::FirstIn => (0, false),
            FadeStage::SecondOut => (1, true),
            FadeStage::SecondIn => (1, false),
        };

        let level = &mut self.levels[stream];
        let done = if fading_out {
            *level = level.saturating_sub(GHOST_FADE_STEP);
            *level == 0
        } else {
            *level = level.saturating_add(GHOST_FADE_STEP);
            *level == 255
        };

        if done {
            self.stage = match self.stage {
                FadeStage::FirstOut => FadeStage::FirstIn,
                FadeStage::FirstIn => FadeStage::SecondOut,
                FadeStage::SecondOut => FadeStage::SecondIn,
                FadeStage::SecondIn => FadeStage::FirstOut,
            };
        }
    }

    fn stream_color(&self, stream: usize) -> Rgb {
        blend_colors(GHOST_MIST, GHOST_COLORS[stream], self.levels[stream])
    }
}

impl Pattern for GhostPattern {
    fn advance(&mut self, _rng: &mut dyn RngCore) -> Frame {
        self.oscillator.tick();
        if self.fade.tick() {
            self.step_fade();
        }

        let period = self
            .oscillator
            .modulate(GHOST_BASE_PERIOD_US, GHOST_PERIOD_SWING_US);
        let mut frame = Frame::new(period);
        for stream in 0..2 {
            let half = portion(period, 2, stream as u64);
            frame.flash(
                Fill::Solid(self.stream_color(stream)),
                StrobeTiming::split(half, GHOST_ON_PERMILLE),
            );
        }
        frame
    }
}
