//! Application state carried between ticks

use crate::time::TimeOfDay;

/// Mutable clock state
///
/// Kept as one explicit value handed to every tick so a test can build a
/// fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockState {
    /// Time on screen, `None` until the first successful render
    last_rendered: Option<TimeOfDay>,
    /// Numeric overlay requested
    show_overlay: bool,
    /// Render on the next successful tick even if the time is unchanged
    force_redraw: bool,
}

impl ClockState {
    pub const fn new() -> Self {
        Self {
            last_rendered: None,
            show_overlay: false,
            force_redraw: false,
        }
    }

    /// Check if the numeric overlay is requested
    pub fn show_overlay(&self) -> bool {
        self.show_overlay
    }

    /// Flip overlay visibility; the next tick renders regardless of time
    pub fn toggle_overlay(&mut self) {
        self.show_overlay = !self.show_overlay;
        self.force_redraw = true;
    }

    /// Whether `time` calls for a render
    pub fn needs_render(&self, time: TimeOfDay) -> bool {
        self.force_redraw || self.last_rendered != Some(time)
    }

    /// Record a completed render
    pub fn mark_rendered(&mut self, time: TimeOfDay) {
        self.last_rendered = Some(time);
        self.force_redraw = false;
    }

    /// Time currently on screen
    pub fn last_rendered(&self) -> Option<TimeOfDay> {
        self.last_rendered
    }

    /// Check if a forced render is pending
    pub fn force_redraw(&self) -> bool {
        self.force_redraw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u8, m: u8, s: u8) -> TimeOfDay {
        TimeOfDay::new(h, m, s).unwrap()
    }

    #[test]
    fn test_fresh_state_renders() {
        let state = ClockState::new();
        assert!(state.needs_render(t(0, 0, 0)));
        assert!(!state.show_overlay());
    }

    #[test]
    fn test_unchanged_time_skips() {
        let mut state = ClockState::new();
        state.mark_rendered(t(10, 0, 0));
        assert!(!state.needs_render(t(10, 0, 0)));
        assert!(state.needs_render(t(10, 0, 1)));
    }

    #[test]
    fn test_toggle_forces_redraw() {
        let mut state = ClockState::new();
        state.mark_rendered(t(10, 0, 0));

        state.toggle_overlay();
        assert!(state.show_overlay());
        assert!(state.force_redraw());
        assert!(state.needs_render(t(10, 0, 0)));

        state.mark_rendered(t(10, 0, 0));
        assert!(!state.force_redraw());
        assert!(!state.needs_render(t(10, 0, 0)));
    }
}
