//! PWM backlight
//!
//! Maps the 8-bit duty used by the render engine onto whatever range the
//! PWM channel exposes.

use bitclock_core::traits::{BacklightControl, DisplayError};
use embedded_hal::pwm::SetDutyCycle;

/// Full-scale duty as seen by the render engine
const DUTY_SCALE: u16 = 255;

/// Backlight driven by a PWM channel
pub struct PwmBacklight<P> {
    channel: P,
    /// Last duty applied (0-255)
    duty: u8,
}

impl<P: SetDutyCycle> PwmBacklight<P> {
    /// Create a backlight; the channel is left untouched until the first
    /// [`BacklightControl::set_duty`]
    pub fn new(channel: P) -> Self {
        Self { channel, duty: 0 }
    }

    /// Last duty applied
    pub fn duty(&self) -> u8 {
        self.duty
    }

    pub fn channel(&self) -> &P {
        &self.channel
    }
}

impl<P: SetDutyCycle> BacklightControl for PwmBacklight<P> {
    fn set_duty(&mut self, duty: u8) -> Result<(), DisplayError> {
        self.channel
            .set_duty_cycle_fraction(u16::from(duty), DUTY_SCALE)
            .map_err(|_| DisplayError::Backlight)?;
        self.duty = duty;
        Ok(())
    }
}
