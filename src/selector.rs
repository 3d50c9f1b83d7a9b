//! Control knob to mode mapping.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::pattern::ModeId;

/// Largest raw sample of the 10-bit control input
pub const CONTROL_INPUT_MAX: u16 = 1023;

/// Map `x` from one integer range onto another
///
/// When the input span is wider than the output span the spans are both
/// widened by one, so each output value (including both extremes) owns an
/// equal slice of the input range. The naive formula only reaches
/// `out_max` at exactly `in_max`.
pub const fn map_range(x: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    let in_span = in_max - in_min;
    let out_span = out_max - out_min;
    if in_span == 0 {
        return out_min;
    }
    if in_span > out_span {
        (x - in_min) * (out_span + 1) / (in_span + 1) + out_min
    } else {
        (x - in_min) * out_span / in_span + out_min
    }
}

/// Result of resolving one control sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub mode: ModeId,
    /// Mode differs from the previously resolved one
    pub changed: bool,
}

/// Resolves raw control samples into modes and detects mode changes
#[derive(Debug, Clone, Default)]
pub struct ModeSelector {
    previous: Option<ModeId>,
}

impl ModeSelector {
    pub const fn new() -> Self {
        Self { previous: None }
    }

    /// Map a raw sample without recording it
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn resolve(raw: u16) -> ModeId {
        let raw = i32::from(raw.min(CONTROL_INPUT_MAX));
        let last = i32::from(ModeId::COUNT) - 1;
        let index = map_range(raw, 0, i32::from(CONTROL_INPUT_MAX), 0, last).clamp(0, last);
        ModeId::from_raw(index as u8).unwrap_or(ModeId::Off)
    }

    /// Map a raw sample and record it as the current mode
    ///
    /// The very first sample always counts as a change.
    pub fn select(&mut self, raw: u16) -> Selection {
        let mode = Self::resolve(raw);
        let changed = self.previous != Some(mode);
        if changed {
            #[cfg(feature = "esp32-log")]
            println!("[ModeSelector.select] mode -> {}", mode.as_str());
            self.previous = Some(mode);
        }
        Selection { mode, changed }
    }

    /// Last resolved mode
    pub const fn current(&self) -> Option<ModeId> {
        self.previous
    }
}
