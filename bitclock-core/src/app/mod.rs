//! Application loop
//!
//! Ties the time source, input controller and render engine together.
//! Each tick runs to completion: poll input, fetch the time, render if
//! anything changed.

pub mod clock;
pub mod state;

pub use clock::{ClockApp, FrameOutcome, TickReport};
pub use state::ClockState;
