//! Button input drivers

mod gpio;

pub use gpio::GpioButton;
