//! GPIO push button
//!
//! Buttons on this board pull the line to ground when pressed, with the
//! internal pull-up holding it high otherwise.

use bitclock_core::traits::{DigitalInput, Level};
use embedded_hal::digital::InputPin;

/// Push button on a GPIO input
pub struct GpioButton<P> {
    pin: P,
    /// If true, pressed = pin LOW
    active_low: bool,
}

impl<P: InputPin> GpioButton<P> {
    /// Create a button
    ///
    /// # Arguments
    /// - `pin`: The GPIO input to sample
    /// - `active_low`: If true, the button reads pressed when the pin is LOW
    pub fn new(pin: P, active_low: bool) -> Self {
        Self { pin, active_low }
    }

    /// Button wired to ground with a pull-up
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Button wired to the supply with a pull-down
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }
}

impl<P: InputPin> DigitalInput for GpioButton<P> {
    fn read_level(&mut self) -> Level {
        // A failed read is treated as released so a flaky pin can't
        // generate presses
        match self.pin.is_high() {
            Ok(high) if high != self.active_low => Level::Pressed,
            _ => Level::Released,
        }
    }
}
