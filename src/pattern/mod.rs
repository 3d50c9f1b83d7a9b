//! Animation generators with a compile-time known catalog
//!
//! Every generator keeps its own state for the life of the process and is
//! stored inline in [`Patterns`], so no heap is needed. Each generator
//! implements the `Pattern` trait.

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),*) => {
        [
            $($crate::color::rgb_from_u32($color)),*
        ]
    };
}

mod ambient;
mod chrome;
mod flux;
mod ghost;
mod glitch;
mod helix;
mod off;
mod oscillator;
mod procession;
mod spectrum;
mod tropical;
mod volcanic;

use embassy_time::{Duration, Instant};
use rand::RngCore;

pub use ambient::{AMBIENT_BRIGHTNESS, AMBIENT_HUE_TICKS, AmbientPattern};
pub use chrome::{CHROME_ON_PERMILLE, CHROME_TARGETS, ChromePattern};
pub use flux::{FLUX_SEQUENCE, FluxDispatcher};
pub use ghost::{FadeStage, GHOST_FADE_STEP, GHOST_FADE_TICKS, GhostPattern};
pub use glitch::{
    GLITCH_MAX_DELAY_US, GLITCH_STREAMS, GlitchPattern, GlitchVariant, VAPORWAVE_DUSK_PALETTE,
    VAPORWAVE_PALETTE,
};
pub use helix::{HELIX_COLOR, HELIX_ON_PERMILLE, HelixPattern};
pub use off::{IDLE_PERIOD_US, OffPattern};
pub use oscillator::{Cadence, Oscillator};
pub use procession::{
    NORTHERN_LIGHTS_PALETTE, ProcessionPattern, ProcessionVariant, UNICORN_PALETTE,
};
pub use spectrum::{SPECTRUM_DRIFT_TICKS, SPECTRUM_STREAM_OFFSET, SpectrumPattern};
pub use tropical::{TROPICAL_HUE_STEP, TROPICAL_HUE_TICKS, TropicalPattern};
pub use volcanic::{
    FLASH_COLOR, FLASH_HOLD_US, STRIKE_PERMILLE, VOLCANIC_COLORS, VOLCANIC_PERIOD_US,
    VolcanicPattern,
};

use crate::strobe::Frame;

const MODE_NAME_OFF: &str = "off";
const MODE_NAME_AMBIENT: &str = "ambient";
const MODE_NAME_HELIX: &str = "helix";
const MODE_NAME_GHOST: &str = "ghost";
const MODE_NAME_SPECTRUM: &str = "spectrum";
const MODE_NAME_VOLCANIC_LIGHTNING: &str = "volcanic_lightning";
const MODE_NAME_CHROME: &str = "chrome";
const MODE_NAME_VAPORWAVE: &str = "vaporwave";
const MODE_NAME_UNICORN: &str = "unicorn";
const MODE_NAME_NORTHERN_LIGHTS: &str = "northern_lights";
const MODE_NAME_TROPICAL: &str = "tropical";
const MODE_NAME_VAPORWAVE_DUSK: &str = "vaporwave_dusk";
const MODE_NAME_FLUX: &str = "flux";

const MODE_ID_OFF: u8 = 0;
const MODE_ID_AMBIENT: u8 = 1;
const MODE_ID_HELIX: u8 = 2;
const MODE_ID_GHOST: u8 = 3;
const MODE_ID_SPECTRUM: u8 = 4;
const MODE_ID_VOLCANIC_LIGHTNING: u8 = 5;
const MODE_ID_CHROME: u8 = 6;
const MODE_ID_VAPORWAVE: u8 = 7;
const MODE_ID_UNICORN: u8 = 8;
const MODE_ID_NORTHERN_LIGHTS: u8 = 9;
const MODE_ID_TROPICAL: u8 = 10;
const MODE_ID_VAPORWAVE_DUSK: u8 = 11;
const MODE_ID_FLUX: u8 = 12;

pub trait Pattern {
    /// Whether pump and magnet run while this pattern is shown
    const ENGAGES_ACTUATORS: bool = true;

    /// Advance one scheduler tick and return the frame to strobe
    ///
    /// Generators count their own ticks; wall-clock time only matters to
    /// the Flux dispatcher.
    fn advance(&mut self, rng: &mut dyn RngCore) -> Frame;
}

/// Mode identifiers selectable from the control knob
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ModeId {
    Off = MODE_ID_OFF,
    Ambient = MODE_ID_AMBIENT,
    Helix = MODE_ID_HELIX,
    Ghost = MODE_ID_GHOST,
    Spectrum = MODE_ID_SPECTRUM,
    VolcanicLightning = MODE_ID_VOLCANIC_LIGHTNING,
    Chrome = MODE_ID_CHROME,
    Vaporwave = MODE_ID_VAPORWAVE,
    Unicorn = MODE_ID_UNICORN,
    NorthernLights = MODE_ID_NORTHERN_LIGHTS,
    Tropical = MODE_ID_TROPICAL,
    VaporwaveDusk = MODE_ID_VAPORWAVE_DUSK,
    Flux = MODE_ID_FLUX,
}

impl ModeId {
    /// Number of modes
    pub const COUNT: u8 = 13;

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_OFF => Self::Off,
            MODE_ID_AMBIENT => Self::Ambient,
            MODE_ID_HELIX => Self::Helix,
            MODE_ID_GHOST => Self::Ghost,
            MODE_ID_SPECTRUM => Self::Spectrum,
            MODE_ID_VOLCANIC_LIGHTNING => Self::VolcanicLightning,
            MODE_ID_CHROME => Self::Chrome,
            MODE_ID_VAPORWAVE => Self::Vaporwave,
            MODE_ID_UNICORN => Self::Unicorn,
            MODE_ID_NORTHERN_LIGHTS => Self::NorthernLights,
            MODE_ID_TROPICAL => Self::Tropical,
            MODE_ID_VAPORWAVE_DUSK => Self::VaporwaveDusk,
            MODE_ID_FLUX => Self::Flux,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => MODE_NAME_OFF,
            Self::Ambient => MODE_NAME_AMBIENT,
            Self::Helix => MODE_NAME_HELIX,
            Self::Ghost => MODE_NAME_GHOST,
            Self::Spectrum => MODE_NAME_SPECTRUM,
            Self::VolcanicLightning => MODE_NAME_VOLCANIC_LIGHTNING,
            Self::Chrome => MODE_NAME_CHROME,
            Self::Vaporwave => MODE_NAME_VAPORWAVE,
            Self::Unicorn => MODE_NAME_UNICORN,
            Self::NorthernLights => MODE_NAME_NORTHERN_LIGHTS,
            Self::Tropical => MODE_NAME_TROPICAL,
            Self::VaporwaveDusk => MODE_NAME_VAPORWAVE_DUSK,
            Self::Flux => MODE_NAME_FLUX,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_OFF => Some(Self::Off),
            MODE_NAME_AMBIENT => Some(Self::Ambient),
            MODE_NAME_HELIX => Some(Self::Helix),
            MODE_NAME_GHOST => Some(Self::Ghost),
            MODE_NAME_SPECTRUM => Some(Self::Spectrum),
            MODE_NAME_VOLCANIC_LIGHTNING => Some(Self::VolcanicLightning),
            MODE_NAME_CHROME => Some(Self::Chrome),
            MODE_NAME_VAPORWAVE => Some(Self::Vaporwave),
            MODE_NAME_UNICORN => Some(Self::Unicorn),
            MODE_NAME_NORTHERN_LIGHTS => Some(Self::NorthernLights),
            MODE_NAME_TROPICAL => Some(Self::Tropical),
            MODE_NAME_VAPORWAVE_DUSK => Some(Self::VaporwaveDusk),
            MODE_NAME_FLUX => Some(Self::Flux),
            _ => None,
        }
    }

    /// Whether the pump and magnet should run in this mode
    ///
    /// Derived from each generator's `Pattern::ENGAGES_ACTUATORS` constant.
    /// Flux only visits stream modes, so it engages them too.
    pub const fn engages_actuators(self) -> bool {
        match self {
            Self::Off => OffPattern::ENGAGES_ACTUATORS,
            Self::Ambient => AmbientPattern::ENGAGES_ACTUATORS,
            Self::Helix => HelixPattern::ENGAGES_ACTUATORS,
            Self::Ghost => GhostPattern::ENGAGES_ACTUATORS,
            Self::Spectrum => SpectrumPattern::ENGAGES_ACTUATORS,
            Self::VolcanicLightning => VolcanicPattern::ENGAGES_ACTUATORS,
            Self::Chrome => ChromePattern::ENGAGES_ACTUATORS,
            Self::Vaporwave | Self::VaporwaveDusk => GlitchPattern::ENGAGES_ACTUATORS,
            Self::Unicorn | Self::NorthernLights => ProcessionPattern::ENGAGES_ACTUATORS,
            Self::Tropical => TropicalPattern::ENGAGES_ACTUATORS,
            Self::Flux => true,
        }
    }
}

/// Every generator's state plus the Flux dispatcher
#[derive(Debug, Clone)]
pub struct Patterns {
    off: OffPattern,
    ambient: AmbientPattern,
    helix: HelixPattern,
    ghost: GhostPattern,
    spectrum: SpectrumPattern,
    volcanic: VolcanicPattern,
    chrome: ChromePattern,
    vaporwave: GlitchPattern,
    unicorn: ProcessionPattern,
    northern_lights: ProcessionPattern,
    tropical: TropicalPattern,
    vaporwave_dusk: GlitchPattern,
    flux: FluxDispatcher,
}

impl Patterns {
    pub fn new(flux_interval: Duration, flux_mode_count: u8) -> Self {
        Self {
            off: OffPattern,
            ambient: AmbientPattern::new(),
            helix: HelixPattern::new(),
            ghost: GhostPattern::new(),
            spectrum: SpectrumPattern::new(),
            volcanic: VolcanicPattern::new(),
            chrome: ChromePattern::new(),
            vaporwave: GlitchPattern::new(GlitchVariant::Vaporwave),
            unicorn: ProcessionPattern::new(ProcessionVariant::Unicorn),
            northern_lights: ProcessionPattern::new(ProcessionVariant::NorthernLights),
            tropical: TropicalPattern::new(),
            vaporwave_dusk: GlitchPattern::new(GlitchVariant::Dusk),
            flux: FluxDispatcher::new(flux_interval, flux_mode_count),
        }
    }

    /// Generator that renders `mode` this tick, resolving Flux
    pub fn resolve(&mut self, mode: ModeId, now: Instant) -> ModeId {
        if mode == ModeId::Flux {
            self.flux.select(now)
        } else {
            mode
        }
    }

    /// Advance the generator behind `mode` by one tick
    pub fn advance(&mut self, mode: ModeId, now: Instant, rng: &mut dyn RngCore) -> Frame {
        match self.resolve(mode, now) {
            // Flux never resolves to itself
            ModeId::Off | ModeId::Flux => self.off.advance(rng),
            ModeId::Ambient => self.ambient.advance(rng),
            ModeId::Helix => self.helix.advance(rng),
            ModeId::Ghost => self.ghost.advance(rng),
            ModeId::Spectrum => self.spectrum.advance(rng),
            ModeId::VolcanicLightning => self.volcanic.advance(rng),
            ModeId::Chrome => self.chrome.advance(rng),
            ModeId::Vaporwave => self.vaporwave.advance(rng),
            ModeId::Unicorn => self.unicorn.advance(rng),
            ModeId::NorthernLights => self.northern_lights.advance(rng),
            ModeId::Tropical => self.tropical.advance(rng),
            ModeId::VaporwaveDusk => self.vaporwave_dusk.advance(rng),
        }
    }

    pub const fn flux(&self) -> &FluxDispatcher {
        &self.flux
    }
}
