//! Mode 4: three rainbow streams.

use rand::RngCore;

use super::{
    Pattern,
    oscillator::{Cadence, Oscillator},
};
use crate::strobe::{Fill, Frame, Gradient, StrobeTiming, portion};

pub const SPECTRUM_STREAMS: u64 = 3;
/// Hue distance between the starts of neighbouring streams
pub const SPECTRUM_STREAM_OFFSET: u8 = 85;
/// Short-way hue distance between a gradient's ends; it is drawn the long way
pub const SPECTRUM_SPAN: u8 = 64;
/// Ticks per hue drift step
pub const SPECTRUM_DRIFT_TICKS: u16 = 5;
pub const SPECTRUM_BASE_PERIOD_US: u64 = 15_000;
pub const SPECTRUM_PERIOD_SWING_US: u64 = 900;
pub const SPECTRUM_OSCILLATION_TICKS: u16 = 4;
/// Lit fraction of each stream's third of the period
pub const SPECTRUM_ON_PERMILLE: u16 = 60;

#[derive(Debug, Clone)]
pub struct SpectrumPattern {
    oscillator: Oscillator,
    drift: Cadence,
    base_hue: u8,
}

impl Default for SpectrumPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl SpectrumPattern {
    pub const fn new() -> Self {
        Self {
            oscillator: Oscillator::new(SPECTRUM_OSCILLATION_TICKS),
            drift: Cadence::new(SPECTRUM_DRIFT_TICKS),
            base_hue: 0,
        }
    }

    pub const fn base_hue(&self) -> u8 {
        self.base_hue
    }

    #[allow(clippy::cast_possible_truncation)]
    fn stream_gradient(&self, stream: u64) -> Gradient {
        let from_hue = self
            .base_hue
            .wrapping_add(SPECTRUM_STREAM_OFFSET.wrapping_mul(stream as u8));
        Gradient {
            from_hue,
            to_hue: from_hue.wrapping_add(SPECTRUM_SPAN),
            sat: 255,
            val: 255,
        }
    }
}

impl Pattern for SpectrumPattern {
    fn advance(&mut self, _rng: &mut dyn RngCore) -> Frame {
        self.oscillator.tick();
        if self.drift.tick() {
            self.base_hue = self.base_hue.wrapping_add(1);
        }

        let period = self
            .oscillator
            .modulate(SPECTRUM_BASE_PERIOD_US, SPECTRUM_PERIOD_SWING_US);
        let mut frame = Frame::new(period);
        for stream in 0..SPECTRUM_STREAMS {
            let third = portion(period, SPECTRUM_STREAMS, stream);
            frame.flash(
                Fill::Gradient(self.stream_gradient(stream)),
                StrobeTiming::split(third, SPECTRUM_ON_PERMILLE),
            );
        }
        frame
    }
}
