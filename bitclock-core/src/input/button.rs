//! Single-button edge detector with debounce gate

use crate::traits::{DigitalInput, Level};

/// Edge-triggered, debounced button
///
/// State machine: `Released -> (pressed edge) -> debounce gate -> Released`.
/// Holding the button produces one action; the sampled level is always
/// stored, even when the gate rejects the edge, so chatter inside the
/// window does not queue up presses.
pub struct Button<I> {
    input: I,
    last_level: Level,
    /// Timestamp of the last accepted press
    last_accepted_ms: Option<u32>,
}

impl<I: DigitalInput> Button<I> {
    pub fn new(input: I) -> Self {
        Self {
            input,
            last_level: Level::Released,
            last_accepted_ms: None,
        }
    }

    /// Sample the input; returns true when a press is accepted
    ///
    /// `now_ms` is a free-running millisecond counter and may wrap.
    pub fn poll(&mut self, now_ms: u32, debounce_ms: u32) -> bool {
        let level = self.input.read_level();
        let edge = level == Level::Pressed && self.last_level == Level::Released;
        self.last_level = level;

        if !edge {
            return false;
        }

        let settled = match self.last_accepted_ms {
            None => true,
            Some(last) => now_ms.wrapping_sub(last) > debounce_ms,
        };
        if settled {
            self.last_accepted_ms = Some(now_ms);
        }
        settled
    }

    /// Level seen on the last poll
    pub fn last_level(&self) -> Level {
        self.last_level
    }

    /// Get the underlying input
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::ScriptedButton;

    const DEBOUNCE: u32 = 200;

    fn press(button: &mut Button<ScriptedButton>, at: u32) -> bool {
        button.input_mut().level = Level::Pressed;
        let accepted = button.poll(at, DEBOUNCE);
        button.input_mut().level = Level::Released;
        button.poll(at + 10, DEBOUNCE);
        accepted
    }

    #[test]
    fn test_first_press_accepted() {
        let mut button = Button::new(ScriptedButton::released());
        assert!(press(&mut button, 0));
    }

    #[test]
    fn test_hold_fires_once() {
        let mut button = Button::new(ScriptedButton::released());
        button.input_mut().level = Level::Pressed;

        assert!(button.poll(1000, DEBOUNCE));
        for t in 1..50 {
            assert!(!button.poll(1000 + t * 100, DEBOUNCE));
        }
        assert_eq!(button.last_level(), Level::Pressed);
    }

    #[test]
    fn test_presses_inside_window_collapse() {
        let mut button = Button::new(ScriptedButton::released());
        assert!(press(&mut button, 1000));
        assert!(!press(&mut button, 1100));
        assert!(!press(&mut button, 1200));
    }

    #[test]
    fn test_presses_outside_window_both_count() {
        let mut button = Button::new(ScriptedButton::released());
        assert!(press(&mut button, 1000));
        assert!(press(&mut button, 1201));
    }

    #[test]
    fn test_rejected_edge_still_updates_level() {
        let mut button = Button::new(ScriptedButton::released());
        assert!(press(&mut button, 1000));

        // Bounce inside the window: edge rejected, level still tracked
        button.input_mut().level = Level::Pressed;
        assert!(!button.poll(1050, DEBOUNCE));
        assert_eq!(button.last_level(), Level::Pressed);

        // Still held after the window: no new edge, no action
        assert!(!button.poll(1300, DEBOUNCE));

        // Release and press again
        button.input_mut().level = Level::Released;
        button.poll(1310, DEBOUNCE);
        button.input_mut().level = Level::Pressed;
        assert!(button.poll(1320, DEBOUNCE));
    }

    #[test]
    fn test_timer_wraparound() {
        let mut button = Button::new(ScriptedButton::released());
        assert!(press(&mut button, u32::MAX - 50));
        assert!(!press(&mut button, 100));
        assert!(press(&mut button, 200));
    }
}
