#![no_std]

pub mod actuator;
pub mod bounds;
pub mod clock;
pub mod color;
pub mod config;
pub mod fountain;
pub mod math8;
pub mod pattern;
pub mod safety;
pub mod selector;
pub mod strobe;

pub use actuator::{ActuatorSequencer, ActuatorState, PwmChannel, PwmDriver};
pub use clock::{Clock, EmbassyClock, VirtualClock};
pub use config::{ConfigError, FountainConfig};
pub use fountain::{Fountain, FountainStatus};
pub use pattern::{ModeId, Pattern, Patterns};
pub use safety::ShutdownTimer;
pub use selector::{ModeSelector, Selection};
pub use strobe::{Fill, Frame, Phase, Strobe, StrobeTiming};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Number of pixels on the strip
pub const LED_COUNT: usize = 60;

/// Abstract LED driver trait
///
/// Implement this trait over the strip's bus. One call writes every pixel
/// and latches the frame onto the strip.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
