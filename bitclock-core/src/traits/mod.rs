//! Hardware abstraction traits
//!
//! These traits define the interface between the clock logic and
//! hardware-specific implementations.

pub mod backlight;
pub mod display;
pub mod input;
pub mod time;

pub use backlight::BacklightControl;
pub use display::{Anchor, ClockPanel, Color, DisplayError, Font, Point, Rect, TextStyle};
pub use input::{ActionSink, DigitalInput, Level};
pub use time::TimeSource;
