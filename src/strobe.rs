//! Strobe primitive: frame commands and the executor that plays them.
//!
//! A generator never touches the bus. It returns a [`Frame`], an ordered
//! list of phases, each one a buffer fill plus how long it stays on the
//! strip. The [`Strobe`] renders every fill over the whole buffer, flushes
//! it and blocks until the phase's deadline.

use embassy_time::{Duration, Instant};
use heapless::Vec;

use crate::{
    LED_COUNT, OutputDriver,
    bounds::segment,
    clock::Clock,
    color::{Rgb, fill_hue_sweep, hsv},
    math8::scale8,
};

/// Most phases a single frame can hold
pub const MAX_PHASES: usize = 16;

/// Most independently colored segments in one fill
pub const MAX_SEGMENTS: usize = 4;

/// Upper bound of the lit fraction of any strobe, in permille
///
/// Keeps the average strip current inside the supply budget.
pub const MAX_ON_PERMILLE: u16 = 200;

/// Hue sweep rendered across the whole strip, taking the long way round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from_hue: u8,
    pub to_hue: u8,
    pub sat: u8,
    pub val: u8,
}

/// What a phase writes into the buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fill {
    /// All pixels off
    Clear,
    /// One color on every pixel
    Solid(Rgb),
    /// Equal contiguous segments, one color each
    Segments(Vec<Rgb, MAX_SEGMENTS>),
    Gradient(Gradient),
}

impl Fill {
    /// Build a segmented fill from a color slice (extra colors are dropped)
    pub fn segments(colors: &[Rgb]) -> Self {
        Self::Segments(colors.iter().take(MAX_SEGMENTS).copied().collect())
    }

    /// Whether this fill lights any pixel
    pub fn is_lit(&self) -> bool {
        !matches!(self, Self::Clear)
    }

    /// Write this fill over the entire buffer
    pub fn render(&self, leds: &mut [Rgb]) {
        match self {
            Self::Clear => leds.fill(Rgb::default()),
            Self::Solid(color) => leds.fill(*color),
            Self::Segments(colors) => {
                if colors.is_empty() {
                    leds.fill(Rgb::default());
                    return;
                }
                let len = leds.len();
                for (i, color) in colors.iter().enumerate() {
                    leds[segment(len, i, colors.len())].fill(*color);
                }
            }
            Self::Gradient(gradient) => fill_hue_sweep(
                leds,
                hsv(gradient.from_hue, gradient.sat, gradient.val),
                hsv(gradient.to_hue, gradient.sat, gradient.val),
            ),
        }
    }
}

/// One step of a frame: a fill held for a duration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    pub fill: Fill,
    pub hold: Duration,
}

/// On/off split of a strobe period, in microseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrobeTiming {
    pub on: u64,
    pub off: u64,
}

impl StrobeTiming {
    /// Split `period` so that `on` is `on_permille` of it
    ///
    /// The fraction is clamped to [`MAX_ON_PERMILLE`]; `on + off` is always
    /// exactly `period`.
    pub const fn split(period: u64, on_permille: u16) -> Self {
        let permille = if on_permille > MAX_ON_PERMILLE {
            MAX_ON_PERMILLE
        } else {
            on_permille
        };
        let on = period * permille as u64 / 1000;
        Self {
            on,
            off: period - on,
        }
    }

    pub const fn period(self) -> u64 {
        self.on + self.off
    }
}

/// Share `index` of `total` divided into `parts`
///
/// The last share absorbs the remainder so all shares sum to `total`.
pub const fn portion(total: u64, parts: u64, index: u64) -> u64 {
    if parts == 0 {
        return 0;
    }
    let share = total / parts;
    if index + 1 == parts {
        total - share * (parts - 1)
    } else {
        share
    }
}

/// Commands for one scheduler tick of a generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    period: Duration,
    brightness: Option<u8>,
    phases: Vec<Phase, MAX_PHASES>,
}

impl Frame {
    /// Start a frame with the given period in microseconds
    pub const fn new(period_us: u64) -> Self {
        Self {
            period: Duration::from_micros(period_us),
            brightness: None,
            phases: Vec::new(),
        }
    }

    /// Scale the global brightness for this frame only
    #[must_use]
    pub fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = Some(brightness);
        self
    }

    /// Append a phase held for `hold_us` microseconds
    pub fn push(&mut self, fill: Fill, hold_us: u64) {
        let phase = Phase {
            fill,
            hold: Duration::from_micros(hold_us),
        };
        let pushed = self.phases.push(phase).is_ok();
        debug_assert!(pushed, "frame exceeds {MAX_PHASES} phases");
    }

    /// Append a lit phase followed by a clear phase
    pub fn flash(&mut self, fill: Fill, timing: StrobeTiming) {
        self.push(fill, timing.on);
        self.push(Fill::Clear, timing.off);
    }

    /// Declared period
    pub const fn period(&self) -> Duration {
        self.period
    }

    pub const fn brightness(&self) -> Option<u8> {
        self.brightness
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Sum of every phase's hold
    pub fn held(&self) -> Duration {
        let micros = self.phases.iter().map(|p| p.hold.as_micros()).sum();
        Duration::from_micros(micros)
    }

    /// Sum of the holds of lit phases
    pub fn lit(&self) -> Duration {
        let micros = self
            .phases
            .iter()
            .filter(|p| p.fill.is_lit())
            .map(|p| p.hold.as_micros())
            .sum();
        Duration::from_micros(micros)
    }
}

/// Owns the strip buffer and plays frames onto the display bus
pub struct Strobe<O: OutputDriver> {
    output: O,
    buffer: [Rgb; LED_COUNT],
    brightness: u8,
}

impl<O: OutputDriver> Strobe<O> {
    pub const fn new(output: O, brightness: u8) -> Self {
        Self {
            output,
            buffer: [Rgb { r: 0, g: 0, b: 0 }; LED_COUNT],
            brightness,
        }
    }

    /// Play every phase of a frame, blocking for each hold
    ///
    /// Deadlines accumulate from the start of the frame, so time spent
    /// rendering and flushing does not stretch the period.
    pub fn play<C: Clock>(&mut self, frame: &Frame, clock: &mut C) {
        let level = frame
            .brightness()
            .map_or(self.brightness, |b| scale8(self.brightness, b));

        let mut deadline: Instant = clock.now();
        for phase in frame.phases() {
            phase.fill.render(&mut self.buffer);
            Self::apply_brightness(&mut self.buffer, level);
            self.output.write(&self.buffer);

            deadline += phase.hold;
            clock.wait_until(deadline);
        }
    }

    fn apply_brightness(frame: &mut [Rgb], level: u8) {
        if level == 255 {
            return;
        }
        for pixel in frame.iter_mut() {
            pixel.r = scale8(pixel.r, level);
            pixel.g = scale8(pixel.g, level);
            pixel.b = scale8(pixel.b, level);
        }
    }

    /// Last flushed buffer contents
    pub fn buffer(&self) -> &[Rgb] {
        &self.buffer
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Get a reference to the output driver.
    pub const fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the output driver.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
