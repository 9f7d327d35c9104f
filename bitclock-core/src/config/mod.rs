//! Compile-time configuration
//!
//! The clock has no runtime configuration and persists nothing. Every
//! tunable lives here as a constant; the `*Config` structs group them so
//! tests can substitute smaller tables.

pub mod display;
pub mod input;
pub mod time;

pub use display::*;
pub use input::*;
pub use time::*;
