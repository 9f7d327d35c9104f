//! Board-agnostic core logic for the BCD clock firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Capability traits (panel, backlight, buttons, time source)
//! - Time-of-day value and its BCD decomposition
//! - Render engine with incremental digit overlay
//! - Debounced two-button input controller
//! - Application loop state and tick function
//! - Compile-time configuration constants

#![no_std]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod input;
pub mod render;
pub mod time;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;
