//! Integration traits
//!
//! These traits define the interface between the driver and the graphics
//! library that owns the pixel buffers.

pub mod display;

pub use display::FlushReady;
