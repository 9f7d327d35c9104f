//! Button input traits

/// Logical button level after polarity has been resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Pressed,
    Released,
}

/// Digital input sampled by polling
///
/// Implementations translate electrical levels (e.g. active-low with a
/// pull-up) into [`Level`].
pub trait DigitalInput {
    fn read_level(&mut self) -> Level;
}

/// Receiver for accepted button actions
///
/// Both methods default to doing nothing, so a sink only overrides the
/// actions it cares about. `()` is the sink with nothing registered.
pub trait ActionSink {
    /// Overlay button pressed
    fn toggle_overlay(&mut self) {}

    /// Brightness button pressed; `level` is the new level index
    fn brightness_changed(&mut self, level: u8) {
        let _ = level;
    }
}

impl ActionSink for () {}
