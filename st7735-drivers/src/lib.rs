//! Hardware driver implementations
//!
//! This crate drives an ST7735 panel through the traits defined in
//! st7735-hal, using the tables and helpers from st7735-core:
//!
//! - Command table interpreter and power-on reset pulse
//! - Backlight controller with configurable polarity
//! - Region flush pipeline (window, byte swap, chunked streaming)
//! - [`St7735`], which composes the three for application use

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backlight;
pub mod st7735;

#[cfg(test)]
mod mock;

pub use backlight::{Backlight, NoPin};
pub use st7735::St7735;
