//! Modes 7 and 11: vaporwave palettes with a glitchy stagger.
//!
//! Five palette colors are shown in five sub-phases. Every so often the
//! palette is rotated by a random amount and a random blank delay is put
//! in front of the sequence, so the streams jump around in time.

use rand::RngCore;

use super::{
    Pattern,
    oscillator::{Cadence, Oscillator},
};
use crate::{
    color::Rgb,
    strobe::{Fill, Frame, StrobeTiming, portion},
};

pub const GLITCH_STREAMS: usize = 5;

// Vaporwave palette: hot pink, violet, cyan, peach, mint
#[allow(clippy::unreadable_literal)]
pub const VAPORWAVE_PALETTE: [Rgb; GLITCH_STREAMS] =
    hex_palette![0xFF3CAC, 0x8A2BE2, 0x00E5FF, 0xFF9966, 0x5CFFB0];

// Dusk palette: magenta, indigo, coral, teal, lilac
#[allow(clippy::unreadable_literal)]
pub const VAPORWAVE_DUSK_PALETTE: [Rgb; GLITCH_STREAMS] =
    hex_palette![0xE0107F, 0x3A0CA3, 0xFF5E5B, 0x00A8A8, 0xC8A2FF];

pub const GLITCH_BASE_PERIOD_US: u64 = 15_000;
pub const GLITCH_PERIOD_SWING_US: u64 = 800;
pub const GLITCH_OSCILLATION_TICKS: u16 = 4;
/// Lit fraction of each stream's share of the period
pub const GLITCH_ON_PERMILLE: u16 = 150;
/// Ticks between new rotations and delays
pub const GLITCH_SHIFT_TICKS: u16 = 25;
/// Longest blank delay before the sequence
pub const GLITCH_MAX_DELAY_US: u64 = 2_000;

/// Palette selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlitchVariant {
    Vaporwave,
    Dusk,
}

#[derive(Debug, Clone)]
pub struct GlitchPattern {
    variant: GlitchVariant,
    oscillator: Oscillator,
    shift: Cadence,
    rotation: usize,
    delay_us: u64,
}

impl GlitchPattern {
    pub const fn new(variant: GlitchVariant) -> Self {
        Self {
            variant,
            oscillator: Oscillator::new(GLITCH_OSCILLATION_TICKS),
            shift: Cadence::new(GLITCH_SHIFT_TICKS),
            rotation: 0,
            delay_us: 0,
        }
    }

    const fn palette(&self) -> &'static [Rgb; GLITCH_STREAMS] {
        match self.variant {
            GlitchVariant::Vaporwave => &VAPORWAVE_PALETTE,
            GlitchVariant::Dusk => &VAPORWAVE_DUSK_PALETTE,
        }
    }

    pub const fn rotation(&self) -> usize {
        self.rotation
    }

    pub const fn delay_us(&self) -> u64 {
        self.delay_us
    }

    #[allow(clippy::cast_possible_truncation)]
    fn reshuffle(&mut self, rng: &mut dyn RngCore) {
        self.rotation = (rng.next_u32() % GLITCH_STREAMS as u32) as usize;
        self.delay_us = u64::from(rng.next_u32()) % (GLITCH_MAX_DELAY_US + 1);
    }
}

impl Pattern for GlitchPattern {
    fn advance(&mut self, rng: &mut dyn RngCore) -> Frame {
        self.oscillator.tick();
        if self.shift.tick() {
            self.reshuffle(rng);
        }

        let period = self
            .oscillator
            .modulate(GLITCH_BASE_PERIOD_US, GLITCH_PERIOD_SWING_US);
        let delay = self.delay_us.min(period);
        let rest = period - delay;
        let palette = self.palette();

        let mut frame = Frame::new(period);
        frame.push(Fill::Clear, delay);
        for stream in 0..GLITCH_STREAMS {
            let color = palette[(stream + self.rotation) % GLITCH_STREAMS];
            let share = portion(rest, GLITCH_STREAMS as u64, stream as u64);
            frame.flash(
                Fill::Solid(color),
                StrobeTiming::split(share, GLITCH_ON_PERMILLE),
            );
        }
        frame
    }
}
