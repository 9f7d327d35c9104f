//! Button timing and brightness cycling

use super::display::{BRIGHTNESS_LEVELS, DEFAULT_BRIGHTNESS_INDEX};

/// Minimum time between two accepted presses of the same button
pub const BUTTON_DEBOUNCE_MS: u32 = 200;

/// Input controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputConfig {
    /// Debounce window in milliseconds
    pub debounce_ms: u32,
    /// Number of brightness levels the cycle button walks through
    pub brightness_levels: u8,
    /// Brightness level before the first press
    pub initial_brightness: u8,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            debounce_ms: BUTTON_DEBOUNCE_MS,
            brightness_levels: BRIGHTNESS_LEVELS as u8,
            initial_brightness: DEFAULT_BRIGHTNESS_INDEX,
        }
    }
}
