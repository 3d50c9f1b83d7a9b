//! Mode 0: strip dark, actuators stopped.

use rand::RngCore;

use super::Pattern;
use crate::strobe::{Fill, Frame};

/// Idle time per tick while off
pub const IDLE_PERIOD_US: u64 = 20_000;

#[derive(Debug, Clone, Default)]
pub struct OffPattern;

impl Pattern for OffPattern {
    const ENGAGES_ACTUATORS: bool = false;

    fn advance(&mut self, _rng: &mut dyn RngCore) -> Frame {
        let mut frame = Frame::new(IDLE_PERIOD_US);
        frame.push(Fill::Clear, IDLE_PERIOD_US);
        frame
    }
}
