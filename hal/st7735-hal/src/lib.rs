//! ST7735 Hardware Abstraction Layer
//!
//! This crate defines the hardware seams the panel driver talks through.
//! Chip-specific code (embassy, esp-hal, a host-side mock) implements these
//! traits, so the command sequencing and flush logic stays board-agnostic.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (st7735-firmware, etc.)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  st7735-drivers (init, flush, backlight)│
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  st7735-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  embedded-hal 1.0 SPI bus + GPIO        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Reset, backlight and data/command lines
//! - [`bus::DisplayBus`] - Command/data/color phases with a drain point

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use bus::{DisplayBus, DisplayBusExt, SpiDisplayBus};
pub use gpio::{HalPin, OutputPin};
