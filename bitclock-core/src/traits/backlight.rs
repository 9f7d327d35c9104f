//! Backlight output trait

use super::display::DisplayError;

/// Backlight brightness control
///
/// `duty` is an 8-bit value: 0 is dark, 255 fully on. Implementations that
/// must detach and reattach their output to change it do so inside
/// `set_duty`; callers never observe a half-configured backlight.
pub trait BacklightControl {
    fn set_duty(&mut self, duty: u8) -> Result<(), DisplayError>;
}
