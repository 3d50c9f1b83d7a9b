//! Per-tick orchestration.
//!
//! One call to [`Fountain::tick`] is one scheduler iteration: resolve the
//! mode, evaluate the runtime ceiling, advance the actuators, then strobe
//! the selected generator's frame. The strobe blocks, so a mode change only
//! takes effect on the next call.

use rand::{SeedableRng, rngs::SmallRng};

use crate::OutputDriver;
use crate::actuator::{ActuatorSequencer, ActuatorState, PwmDriver};
use crate::clock::Clock;
use crate::config::{ConfigError, FountainConfig};
use crate::pattern::{ModeId, Patterns};
use crate::safety::ShutdownTimer;
use crate::selector::ModeSelector;
use crate::strobe::Strobe;

/// Observable state after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FountainStatus {
    pub mode: Option<ModeId>,
    pub actuator_state: ActuatorState,
    pub pump_duty: u8,
    pub magnet_duty: u8,
    pub shutdown_expired: bool,
}

/// The control core: selector, safety timer, actuators and generators
pub struct Fountain<P: PwmDriver, O: OutputDriver, C: Clock> {
    // External dependencies
    clock: C,
    strobe: Strobe<O>,
    actuators: ActuatorSequencer<P>,

    // Internal state
    selector: ModeSelector,
    safety: ShutdownTimer,
    patterns: Patterns,
    rng: SmallRng,
}

impl<P: PwmDriver, O: OutputDriver, C: Clock> Fountain<P, O, C> {
    /// Create the control core; time starts counting at `clock.now()`
    pub fn new(config: &FountainConfig, pwm: P, output: O, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        let now = clock.now();
        Ok(Self {
            strobe: Strobe::new(output, config.brightness),
            actuators: ActuatorSequencer::new(pwm, config.magnet_duty_cap),
            selector: ModeSelector::new(),
            safety: ShutdownTimer::new(config.runtime_ceiling(), now),
            patterns: Patterns::new(config.flux_interval, config.flux_mode_count),
            rng: SmallRng::seed_from_u64(config.rng_seed),
            clock,
        })
    }

    /// Run one scheduler iteration for a raw control sample
    ///
    /// Returns the resolved mode.
    pub fn tick(&mut self, raw_input: u16) -> ModeId {
        let now = self.clock.now();

        let selection = self.selector.select(raw_input);
        if selection.changed {
            self.safety.on_mode_change(now);
        }
        let mode = selection.mode;

        let engaged = mode.engages_actuators();
        let expired = self.safety.update(now, engaged);

        if engaged && !expired {
            match self.actuators.state() {
                ActuatorState::Initial | ActuatorState::Off => {
                    self.actuators.activate(&mut self.clock);
                }
                ActuatorState::PumpOn => self.actuators.tick(),
                ActuatorState::PumpAndMagOn => {}
            }
        } else {
            self.actuators.deactivate(&mut self.clock);
        }

        let now = self.clock.now();
        let frame = self.patterns.advance(mode, now, &mut self.rng);
        self.strobe.play(&frame, &mut self.clock);

        mode
    }

    pub fn status(&self) -> FountainStatus {
        FountainStatus {
            mode: self.selector.current(),
            actuator_state: self.actuators.state(),
            pump_duty: self.actuators.pump_duty(),
            magnet_duty: self.actuators.magnet_duty(),
            shutdown_expired: self.safety.is_expired(),
        }
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub const fn strobe(&self) -> &Strobe<O> {
        &self.strobe
    }

    pub const fn actuators(&self) -> &ActuatorSequencer<P> {
        &self.actuators
    }

    pub const fn patterns(&self) -> &Patterns {
        &self.patterns
    }
}
