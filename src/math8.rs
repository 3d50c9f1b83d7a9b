//! 8-bit fixed-point helpers shared by the generators and the strobe.

use core::f32::consts::TAU;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

/// Move `from` toward `to` by at most `step`
///
/// Unlike [`blend8`] this always lands exactly on the target.
#[inline]
pub const fn nudge8(from: u8, to: u8, step: u8) -> u8 {
    if from < to {
        let next = from.saturating_add(step);
        if next > to { to } else { next }
    } else {
        let next = from.saturating_sub(step);
        if next < to { to } else { next }
    }
}

/// Sine wave over one 0-255 phase turn, mapped onto 0-255
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn wave8(phase: u8) -> u8 {
    let angle = f32::from(phase) * TAU / 256.0;
    let value = (libm::sinf(angle) + 1.0) * 127.5;
    libm::roundf(value).clamp(0.0, 255.0) as u8
}
