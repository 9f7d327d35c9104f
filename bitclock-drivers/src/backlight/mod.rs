//! Backlight drivers

mod pwm;

pub use pwm::PwmBacklight;
