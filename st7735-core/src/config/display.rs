//! Display configuration
//!
//! [`DisplayConfig`] is the whole configuration surface of the driver:
//! panel variant, geometry, backlight wiring and the per-transfer chunk
//! bound.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::panel::PanelVariant;
use crate::region::OffsetProfile;

/// Physical level that turns a line's function on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActiveLevel {
    #[default]
    High,
    Low,
}

impl ActiveLevel {
    /// Pin level that realizes `on` under this polarity
    pub const fn level_for(self, on: bool) -> bool {
        on ^ matches!(self, Self::Low)
    }
}

/// Backlight wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BacklightConfig {
    /// Level that lights the panel
    pub active_level: ActiveLevel,
}

impl BacklightConfig {
    /// Backlight lit by a high pin
    pub const fn active_high() -> Self {
        Self {
            active_level: ActiveLevel::High,
        }
    }

    /// Backlight lit by a low pin
    pub const fn active_low() -> Self {
        Self {
            active_level: ActiveLevel::Low,
        }
    }
}

/// Driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Panel module in use
    pub variant: PanelVariant,
    /// Logical width in pixels
    pub width: u16,
    /// Logical height in pixels
    pub height: u16,
    /// Coordinate bias written to CASET/RASET
    pub offsets: OffsetProfile,
    /// Backlight wiring, `None` when not software controlled
    pub backlight: Option<BacklightConfig>,
    /// Largest single color transfer in bytes; `None` means one panel row
    pub max_chunk_bytes: Option<u16>,
}

impl DisplayConfig {
    /// Configuration with the variant's native geometry and offsets
    pub const fn new(variant: PanelVariant) -> Self {
        let (width, height) = variant.native_size();
        Self {
            variant,
            width,
            height,
            offsets: variant.offsets(),
            backlight: None,
            max_chunk_bytes: None,
        }
    }

    /// Override the logical resolution
    pub const fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Override the coordinate bias
    pub const fn with_offsets(mut self, offsets: OffsetProfile) -> Self {
        self.offsets = offsets;
        self
    }

    /// Enable backlight control with the given polarity
    pub const fn with_backlight(mut self, active_level: ActiveLevel) -> Self {
        self.backlight = Some(BacklightConfig { active_level });
        self
    }

    /// Bound each color transfer to `bytes`
    pub const fn with_max_chunk_bytes(mut self, bytes: u16) -> Self {
        self.max_chunk_bytes = Some(bytes);
        self
    }

    /// Effective chunk bound in bytes (at least one pixel)
    pub fn chunk_bytes(&self) -> usize {
        let bytes = match self.max_chunk_bytes {
            Some(bytes) => usize::from(bytes),
            None => usize::from(self.width) * 2,
        };
        bytes.max(2)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new(PanelVariant::default())
    }
}
