//! Debounced button input
//!
//! Two momentary buttons are sampled by polling. A press is accepted on
//! the released-to-pressed edge only, and only when the same button has
//! not been accepted within the debounce window.

pub mod button;
pub mod controller;

pub use button::Button;
pub use controller::{InputActions, InputController};
