//! Pump and electromagnet power sequencing.
//!
//! ```text
//!  Initial/Off --activate--> PumpOn --magnet at cap--> PumpAndMagOn
//!       ^                      |                            |
//!       +------deactivate------+------------deactivate------+
//! ```
//!
//! The pump is kick-started with a fast ramp to full drive and then eased
//! down to cruise. The magnet then ramps up one unit every few ticks so the
//! spout is pulled in gently. Shutdown ramps the magnet down before the
//! pump is cut.

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::clock::Clock;

/// Full pump drive
pub const PUMP_DUTY_MAX: u8 = 255;
/// Sustained pump drive after the kickstart (~69% of full)
pub const PUMP_CRUISE_DUTY: u8 = 176;
/// Pump duty added per kickstart step
pub const PUMP_KICKSTART_INCREMENT: u8 = 5;
/// Interval between kickstart steps
pub const PUMP_KICKSTART_STEP: Duration = Duration::from_millis(1);
/// Hold at full drive before easing down
pub const PUMP_KICKSTART_HOLD: Duration = Duration::from_millis(100);
/// Interval between ease-down steps (one duty unit each)
pub const PUMP_EASE_STEP: Duration = Duration::from_millis(3);

/// Upper bound of the magnet duty domain
pub const MAGNET_DUTY_MAX: u8 = 225;
/// Magnet PWM carrier frequency
pub const MAGNET_CARRIER_HZ: u32 = 80;
/// Ticks per magnet duty unit during the slow ramp
pub const MAGNET_STEP_TICKS: u32 = 4;
/// Interval between magnet ramp-down steps
pub const MAGNET_RAMP_DOWN_STEP: Duration = Duration::from_millis(1);

/// PWM outputs owned by the sequencer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmChannel {
    Pump,
    Magnet,
}

/// PWM capability the sequencer drives
///
/// Implement this over the platform's timer peripherals. The magnet channel
/// needs a dedicated timer since its carrier is reconfigured on every
/// activation.
pub trait PwmDriver {
    /// Set the duty of a channel (0-255 scale)
    fn set_duty_cycle(&mut self, channel: PwmChannel, duty: u8);

    /// (Re)configure the carrier frequency of a channel
    fn set_carrier_frequency(&mut self, channel: PwmChannel, hz: u32);

    /// Stop driving a channel
    fn disable(&mut self, channel: PwmChannel);
}

/// Power state of the pump/magnet pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActuatorState {
    /// Nothing has been commanded since power-on
    #[default]
    Initial,
    Off,
    PumpOn,
    PumpAndMagOn,
}

impl ActuatorState {
    /// Pump is being driven
    pub const fn is_active(self) -> bool {
        matches!(self, Self::PumpOn | Self::PumpAndMagOn)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Off => "off",
            Self::PumpOn => "pump_on",
            Self::PumpAndMagOn => "pump_and_mag_on",
        }
    }
}

/// Inputs to the sequencer state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorEvent {
    Activate,
    /// One scheduler tick, with the magnet duty after this tick's ramp step
    Tick { magnet_duty: u8, magnet_cap: u8 },
    Deactivate,
}

/// Hardware work a transition requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffect {
    None,
    /// Pump kickstart ramp followed by magnet carrier setup
    Kickstart,
    /// Magnet ramp-down, pump cut and magnet disable
    Shutdown,
}

/// Pure transition function of the sequencer
pub const fn transition(state: ActuatorState, event: ActuatorEvent) -> (ActuatorState, SideEffect) {
    match (state, event) {
        (ActuatorState::Initial | ActuatorState::Off, ActuatorEvent::Activate) => {
            (ActuatorState::PumpOn, SideEffect::Kickstart)
        }
        (
            ActuatorState::PumpOn,
            ActuatorEvent::Tick {
                magnet_duty,
                magnet_cap,
            },
        ) if magnet_duty >= magnet_cap => (ActuatorState::PumpAndMagOn, SideEffect::None),
        (ActuatorState::Off, ActuatorEvent::Deactivate) => (ActuatorState::Off, SideEffect::None),
        (_, ActuatorEvent::Deactivate) => (ActuatorState::Off, SideEffect::Shutdown),
        (state, _) => (state, SideEffect::None),
    }
}

/// Drives pump and magnet through the power state machine
#[derive(Debug)]
pub struct ActuatorSequencer<P: PwmDriver> {
    pwm: P,
    state: ActuatorState,
    magnet_cap: u8,
    pump_duty: u8,
    magnet_duty: u8,
    ticks: u32,
}

impl<P: PwmDriver> ActuatorSequencer<P> {
    /// Create a sequencer; the magnet cap is clamped to [`MAGNET_DUTY_MAX`]
    pub fn new(pwm: P, magnet_cap: u8) -> Self {
        Self {
            pwm,
            state: ActuatorState::Initial,
            magnet_cap: magnet_cap.min(MAGNET_DUTY_MAX),
            pump_duty: 0,
            magnet_duty: 0,
            ticks: 0,
        }
    }

    /// Start the pump and arm the magnet
    ///
    /// Does nothing unless the sequencer is `Initial` or `Off`.
    pub fn activate<C: Clock>(&mut self, clock: &mut C) {
        let (next, effect) = transition(self.state, ActuatorEvent::Activate);
        if effect == SideEffect::Kickstart {
            #[cfg(feature = "esp32-log")]
            println!("[ActuatorSequencer.activate] kickstarting pump");
            self.kickstart(clock);
        }
        self.state = next;
    }

    /// Advance the magnet ramp by one scheduler tick
    pub fn tick(&mut self) {
        if self.state != ActuatorState::PumpOn {
            return;
        }
        self.ticks = self.ticks.wrapping_add(1);
        if self.ticks % MAGNET_STEP_TICKS == 0 && self.magnet_duty < self.magnet_cap {
            self.set_magnet(self.magnet_duty + 1);
        }

        let event = ActuatorEvent::Tick {
            magnet_duty: self.magnet_duty,
            magnet_cap: self.magnet_cap,
        };
        let (next, _) = transition(self.state, event);
        if next != self.state {
            #[cfg(feature = "esp32-log")]
            println!(
                "[ActuatorSequencer.tick] magnet at {}, fully engaged",
                self.magnet_duty
            );
            self.state = next;
        }
    }

    /// Ramp the magnet down and stop the pump
    ///
    /// Calling it while already `Off` is a no-op.
    pub fn deactivate<C: Clock>(&mut self, clock: &mut C) {
        let (next, effect) = transition(self.state, ActuatorEvent::Deactivate);
        if effect == SideEffect::Shutdown {
            #[cfg(feature = "esp32-log")]
            println!(
                "[ActuatorSequencer.deactivate] shutting down from {}",
                self.state.as_str()
            );
            self.shutdown(clock);
        }
        self.state = next;
    }

    fn kickstart<C: Clock>(&mut self, clock: &mut C) {
        let mut duty = 0u8;
        self.set_pump(duty);
        while duty < PUMP_DUTY_MAX {
            duty = duty.saturating_add(PUMP_KICKSTART_INCREMENT);
            self.set_pump(duty);
            clock.delay(PUMP_KICKSTART_STEP);
        }
        clock.delay(PUMP_KICKSTART_HOLD);
        while duty > PUMP_CRUISE_DUTY {
            duty -= 1;
            self.set_pump(duty);
            clock.delay(PUMP_EASE_STEP);
        }

        self.ticks = 0;
        self.pwm.set_carrier_frequency(PwmChannel::Magnet, MAGNET_CARRIER_HZ);
        self.set_magnet(0);
    }

    fn shutdown<C: Clock>(&mut self, clock: &mut C) {
        while self.magnet_duty > 0 {
            self.set_magnet(self.magnet_duty - 1);
            clock.delay(MAGNET_RAMP_DOWN_STEP);
        }
        self.set_magnet(0);
        self.set_pump(0);
        self.pwm.disable(PwmChannel::Magnet);
        self.ticks = 0;
    }

    fn set_pump(&mut self, duty: u8) {
        self.pump_duty = duty;
        self.pwm.set_duty_cycle(PwmChannel::Pump, duty);
    }

    fn set_magnet(&mut self, duty: u8) {
        self.magnet_duty = duty.min(MAGNET_DUTY_MAX);
        self.pwm.set_duty_cycle(PwmChannel::Magnet, self.magnet_duty);
    }

    pub const fn state(&self) -> ActuatorState {
        self.state
    }

    pub const fn pump_duty(&self) -> u8 {
        self.pump_duty
    }

    pub const fn magnet_duty(&self) -> u8 {
        self.magnet_duty
    }

    pub const fn magnet_cap(&self) -> u8 {
        self.magnet_cap
    }

    /// Get a reference to the PWM driver.
    pub const fn pwm(&self) -> &P {
        &self.pwm
    }

    /// Get a mutable reference to the PWM driver.
    pub fn pwm_mut(&mut self) -> &mut P {
        &mut self.pwm
    }
}
