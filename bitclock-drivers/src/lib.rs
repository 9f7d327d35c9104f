//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in bitclock-core on top of the embedded-hal and embedded-graphics
//! ecosystems:
//!
//! - Panel drawing over any RGB565 `DrawTarget`
//! - PWM backlight
//! - Active-low push buttons

#![no_std]
#![deny(unsafe_code)]

pub mod backlight;
pub mod button;
pub mod panel;
