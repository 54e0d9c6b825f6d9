//! Board-agnostic core logic for the ST7735 panel driver
//!
//! This crate contains everything that does not touch a bus or a pin:
//!
//! - Controller opcodes and command descriptors
//! - Built-in power-on sequences for each supported panel variant
//! - Addressing window and offset math
//! - Pixel byte-order and chunking helpers
//! - Configuration type definitions
//! - The graphics-library completion trait

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod config;
pub mod pixel;
pub mod region;
pub mod traits;

pub use command::{Command, CommandDescriptor, PackedCommand, PostDelay};
pub use config::{ActiveLevel, BacklightConfig, DisplayConfig, PanelVariant};
pub use region::{OffsetProfile, Region};
pub use traits::FlushReady;
