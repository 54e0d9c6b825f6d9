//! Configuration types
//!
//! Everything here is fixed at build or configuration time and resolved
//! once when the driver is constructed.

pub mod display;
pub mod panel;

pub use display::*;
pub use panel::*;
