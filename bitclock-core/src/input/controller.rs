//! Two-button input controller
//!
//! Button one toggles the numeric overlay. Button two walks the backlight
//! through its levels, wrapping from the brightest back to the dimmest.

use crate::config::InputConfig;
use crate::traits::{ActionSink, DigitalInput};

use super::button::Button;

/// Actions accepted during one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputActions {
    /// Overlay button was accepted
    pub overlay_toggled: bool,
    /// Brightness button was accepted; holds the new level
    pub brightness: Option<u8>,
}

impl InputActions {
    /// True when nothing was accepted
    pub fn is_empty(&self) -> bool {
        !self.overlay_toggled && self.brightness.is_none()
    }
}

/// Debounced two-button controller
pub struct InputController<A, B> {
    overlay: Button<A>,
    brightness: Button<B>,
    config: InputConfig,
    level: u8,
}

impl<A: DigitalInput, B: DigitalInput> InputController<A, B> {
    /// Create a controller for the overlay and brightness buttons
    pub fn new(overlay: A, brightness: B, config: InputConfig) -> Self {
        let levels = config.brightness_levels.max(1);
        Self {
            overlay: Button::new(overlay),
            brightness: Button::new(brightness),
            level: config.initial_brightness % levels,
            config,
        }
    }

    /// Current brightness level index
    pub fn brightness_level(&self) -> u8 {
        self.level
    }

    /// Sample both buttons and deliver accepted actions to `sink`
    ///
    /// Pass `&mut ()` to run the edge and debounce bookkeeping without
    /// any callbacks.
    pub fn poll<S: ActionSink + ?Sized>(&mut self, now_ms: u32, sink: &mut S) -> InputActions {
        let mut actions = InputActions::default();

        if self.overlay.poll(now_ms, self.config.debounce_ms) {
            actions.overlay_toggled = true;
            sink.toggle_overlay();
        }

        if self.brightness.poll(now_ms, self.config.debounce_ms) {
            let levels = self.config.brightness_levels.max(1);
            self.level = (self.level + 1) % levels;
            actions.brightness = Some(self.level);
            sink.brightness_changed(self.level);
        }

        actions
    }

    /// Get the overlay button input
    pub fn overlay_input_mut(&mut self) -> &mut A {
        self.overlay.input_mut()
    }

    /// Get the brightness button input
    pub fn brightness_input_mut(&mut self) -> &mut B {
        self.brightness.input_mut()
    }
}
