//! Recording mocks shared by the integration tests.
//!
//! Every PWM and bus call is kept so tests can assert on the full command
//! history without touching real peripherals.

#![allow(dead_code)]

use stream_illusion::{ModeId, OutputDriver, PwmChannel, PwmDriver, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmCall {
    Duty(PwmChannel, u8),
    Carrier(PwmChannel, u32),
    Disable(PwmChannel),
}

#[derive(Debug, Default)]
pub struct MockPwm {
    pub calls: Vec<PwmCall>,
    pub pump: u8,
    pub magnet: u8,
    pub magnet_hz: Option<u32>,
    pub magnet_enabled: bool,
}

impl MockPwm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Duties written to one channel, in order
    pub fn duties(&self, channel: PwmChannel) -> Vec<u8> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                PwmCall::Duty(ch, duty) if *ch == channel => Some(*duty),
                _ => None,
            })
            .collect()
    }
}

impl PwmDriver for MockPwm {
    fn set_duty_cycle(&mut self, channel: PwmChannel, duty: u8) {
        self.calls.push(PwmCall::Duty(channel, duty));
        match channel {
            PwmChannel::Pump => self.pump = duty,
            PwmChannel::Magnet => self.magnet = duty,
        }
    }

    fn set_carrier_frequency(&mut self, channel: PwmChannel, hz: u32) {
        self.calls.push(PwmCall::Carrier(channel, hz));
        if channel == PwmChannel::Magnet {
            self.magnet_hz = Some(hz);
            self.magnet_enabled = true;
        }
    }

    fn disable(&mut self, channel: PwmChannel) {
        self.calls.push(PwmCall::Disable(channel));
        if channel == PwmChannel::Magnet {
            self.magnet_enabled = false;
        }
    }
}

#[derive(Debug, Default)]
pub struct MockBus {
    pub frames: Vec<Vec<Rgb>>,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&[Rgb]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl OutputDriver for MockBus {
    fn write(&mut self, colors: &[Rgb]) {
        self.frames.push(colors.to_vec());
    }
}

/// Smallest raw control sample that resolves to `mode`
pub fn raw_for(mode: ModeId) -> u16 {
    let index = u32::from(mode as u8);
    ((index * 1024 + 12) / 13) as u16
}

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
