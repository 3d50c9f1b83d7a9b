//! System-level tunables.
//!
//! Per-mode palettes and timings live next to their generators as
//! constants; this struct only holds what the control loop itself needs.

use core::fmt;

use embassy_time::Duration;

use crate::actuator::MAGNET_DUTY_MAX;
use crate::pattern::FLUX_SEQUENCE;

/// Default magnet duty the slow ramp stops at
pub const DEFAULT_MAGNET_DUTY_CAP: u8 = 100;

/// Default ceiling for continuous actuator runtime
pub const DEFAULT_RUNTIME_CEILING_HOURS: f32 = 3.0;

/// Default time Flux spends on each sub-mode
pub const DEFAULT_FLUX_INTERVAL: Duration = Duration::from_secs(20);

#[allow(clippy::cast_possible_truncation)]
const FLUX_SEQUENCE_LEN: u8 = FLUX_SEQUENCE.len() as u8;

/// Configuration for the fountain control core
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FountainConfig {
    /// Magnet duty reached at the end of the slow ramp (0-225)
    pub magnet_duty_cap: u8,
    /// Maximum continuous runtime before forced shutdown, in hours
    pub runtime_ceiling_hours: f32,
    /// Time spent on each Flux sub-mode
    pub flux_interval: Duration,
    /// Number of Flux sub-modes cycled before wrapping
    pub flux_mode_count: u8,
    /// Global display brightness
    pub brightness: u8,
    /// Seed for the animation random source
    pub rng_seed: u64,
}

impl FountainConfig {
    pub const DEFAULT: Self = Self {
        magnet_duty_cap: DEFAULT_MAGNET_DUTY_CAP,
        runtime_ceiling_hours: DEFAULT_RUNTIME_CEILING_HOURS,
        flux_interval: DEFAULT_FLUX_INTERVAL,
        flux_mode_count: FLUX_SEQUENCE_LEN,
        brightness: 255,
        rng_seed: 0x5EED_F0E7,
    };

    /// Check every field against its domain
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.magnet_duty_cap > MAGNET_DUTY_MAX {
            return Err(ConfigError::MagnetDutyCapTooHigh(self.magnet_duty_cap));
        }
        if !self.runtime_ceiling_hours.is_finite() || self.runtime_ceiling_hours <= 0.0 {
            return Err(ConfigError::InvalidRuntimeCeiling);
        }
        if self.flux_mode_count == 0 || self.flux_mode_count > FLUX_SEQUENCE_LEN {
            return Err(ConfigError::InvalidFluxModeCount(self.flux_mode_count));
        }
        if self.flux_interval.as_ticks() == 0 {
            return Err(ConfigError::ZeroFluxInterval);
        }
        Ok(())
    }

    /// Runtime ceiling converted to a duration
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn runtime_ceiling(&self) -> Duration {
        let micros = f64::from(self.runtime_ceiling_hours) * 3_600_000_000.0;
        Duration::from_micros(micros as u64)
    }
}

impl Default for FountainConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Rejected configuration value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Magnet duty cap above the magnet's duty domain
    MagnetDutyCapTooHigh(u8),
    /// Runtime ceiling is not a positive, finite number of hours
    InvalidRuntimeCeiling,
    /// Flux sub-mode count is zero or larger than the Flux sequence
    InvalidFluxModeCount(u8),
    /// Flux would never stay on a sub-mode
    ZeroFluxInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MagnetDutyCapTooHigh(cap) => {
                write!(f, "magnet duty cap {cap} exceeds {MAGNET_DUTY_MAX}")
            }
            Self::InvalidRuntimeCeiling => f.write_str("runtime ceiling must be positive hours"),
            Self::InvalidFluxModeCount(count) => write!(
                f,
                "flux mode count {count} outside 1..={FLUX_SEQUENCE_LEN}"
            ),
            Self::ZeroFluxInterval => f.write_str("flux interval must be non-zero"),
        }
    }
}
