//! Modes 8 and 9: a procession of colors packed back to back.
//!
//! Seven colors follow each other with no gap, then the strip stays dark
//! for the rest of the period. The eye sees one stream striped along its
//! length.

use rand::RngCore;

use super::{Pattern, oscillator::Oscillator};
use crate::{
    color::Rgb,
    strobe::{Fill, Frame, portion},
};

pub const PROCESSION_COLORS: usize = 7;

// Unicorn: red, orange, yellow, green, blue, indigo, violet
#[allow(clippy::unreadable_literal)]
pub const UNICORN_PALETTE: [Rgb; PROCESSION_COLORS] =
    hex_palette![0xFF0000, 0xFF7F00, 0xFFFF00, 0x00FF00, 0x0000FF, 0x4B00FF, 0x9400D3];

// Northern lights: deep blue, teal, green, cyan, violet, pink, green again
#[allow(clippy::unreadable_literal)]
pub const NORTHERN_LIGHTS_PALETTE: [Rgb; PROCESSION_COLORS] =
    hex_palette![0x002EB8, 0x00FFD4, 0x14FF78, 0x00C8FF, 0x8800FF, 0xFF0090, 0x14FF78];

pub const PROCESSION_BASE_PERIOD_US: u64 = 14_000;
pub const PROCESSION_PERIOD_SWING_US: u64 = 700;
pub const PROCESSION_OSCILLATION_TICKS: u16 = 4;
/// Lit fraction of the whole sequence
pub const PROCESSION_ON_PERMILLE: u64 = 140;

/// Palette selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessionVariant {
    Unicorn,
    NorthernLights,
}

#[derive(Debug, Clone)]
pub struct ProcessionPattern {
    variant: ProcessionVariant,
    oscillator: Oscillator,
}

impl ProcessionPattern {
    pub const fn new(variant: ProcessionVariant) -> Self {
        Self {
            variant,
            oscillator: Oscillator::new(PROCESSION_OSCILLATION_TICKS),
        }
    }

    const fn palette(&self) -> &'static [Rgb; PROCESSION_COLORS] {
        match self.variant {
            ProcessionVariant::Unicorn => &UNICORN_PALETTE,
            ProcessionVariant::NorthernLights => &NORTHERN_LIGHTS_PALETTE,
        }
    }
}

impl Pattern for ProcessionPattern {
    fn advance(&mut self, _rng: &mut dyn RngCore) -> Frame {
        self.oscillator.tick();
        let period = self
            .oscillator
            .modulate(PROCESSION_BASE_PERIOD_US, PROCESSION_PERIOD_SWING_US);
        let lit = period * PROCESSION_ON_PERMILLE / 1000;

        let mut frame = Frame::new(period);
        for (i, color) in self.palette().iter().enumerate() {
            frame.push(
                Fill::Solid(*color),
                portion(lit, PROCESSION_COLORS as u64, i as u64),
            );
        }
        frame.push(Fill::Clear, period - lit);
        frame
    }
}
