//! Panel variants
//!
//! A variant bundles the power-on sequence, the default offset profile
//! and the native resolution of one physical module.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::command::sequence::{INIT_B, INIT_R_GREEN_TAB_160X80};
use crate::command::CommandDescriptor;
use crate::region::OffsetProfile;

/// Supported panel modules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PanelVariant {
    /// Generic ST7735B module, 128x160
    #[default]
    InitB,
    /// Green-tab ST7735S module, 80x160
    GreenTab160x80,
}

impl PanelVariant {
    /// Power-on command sequence
    pub fn init_sequence(self) -> &'static [CommandDescriptor<'static>] {
        match self {
            Self::InitB => &INIT_B,
            Self::GreenTab160x80 => &INIT_R_GREEN_TAB_160X80,
        }
    }

    /// Default coordinate bias
    pub const fn offsets(self) -> OffsetProfile {
        match self {
            Self::InitB => OffsetProfile::NONE,
            Self::GreenTab160x80 => OffsetProfile::GREEN_TAB_160X80,
        }
    }

    /// Native (width, height) in pixels
    pub const fn native_size(self) -> (u16, u16) {
        match self {
            Self::InitB => (128, 160),
            Self::GreenTab160x80 => (80, 160),
        }
    }
}
