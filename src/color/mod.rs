mod gradient;
mod utils;

use smart_leds::{RGB8, hsv::Hsv as HSV};

pub use gradient::{fill_hue_sweep, longest_hue_travel};
pub use utils::{blend_colors, hsv2rgb, nudge_colors, rgb_from_u32};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Shorthand for a fully specified HSV color
pub const fn hsv(hue: u8, sat: u8, val: u8) -> Hsv {
    Hsv { hue, sat, val }
}
