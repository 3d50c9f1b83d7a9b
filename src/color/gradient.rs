//! Hue sweeps across the whole strip.

use smart_leds::hsv::hsv2rgb;

use crate::color::{Hsv, Rgb};

/// Signed hue travel from `from` to `to` taking the long way round
///
/// Equal hues travel the full wheel backwards.
pub const fn longest_hue_travel(from: u8, to: u8) -> i16 {
    let forward = to.wrapping_sub(from) as i16;
    if forward > 127 { forward } else { forward - 256 }
}

/// Fill `leds` with a sweep from `from` to `to` along the longest hue path
///
/// Interpolates in 16.16 fixed point; the first pixel gets `from` and the
/// last one `to`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
pub fn fill_hue_sweep(leds: &mut [Rgb], from: Hsv, to: Hsv) {
    let Some(last) = leds.len().checked_sub(1) else {
        return;
    };
    let steps = last.max(1) as i32;

    let hue_step = (i32::from(longest_hue_travel(from.hue, to.hue)) << 16) / steps;
    let sat_step = ((i32::from(to.sat) - i32::from(from.sat)) << 16) / steps;
    let val_step = ((i32::from(to.val) - i32::from(from.val)) << 16) / steps;

    let mut hue = i32::from(from.hue) << 16;
    let mut sat = i32::from(from.sat) << 16;
    let mut val = i32::from(from.val) << 16;
    for led in leds.iter_mut() {
        // Arithmetic shift keeps negative hues wrapping onto the wheel
        *led = hsv2rgb(Hsv {
            hue: (hue >> 16) as u8,
            sat: (sat >> 16) as u8,
            val: (val >> 16) as u8,
        });
        hue += hue_step;
        sat += sat_step;
        val += val_step;
    }
}
