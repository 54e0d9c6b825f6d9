//! Redraw regions and controller addressing
//!
//! The controller's frame memory (132x162) is larger than most glass it
//! is paired with, so logical coordinates are biased by a per-panel
//! [`OffsetProfile`] before they are written to CASET/RASET.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inclusive rectangular redraw area in logical display coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Region {
    /// Inclusive left column
    pub x1: u16,
    /// Inclusive top row
    pub y1: u16,
    /// Inclusive right column
    pub x2: u16,
    /// Inclusive bottom row
    pub y2: u16,
}

impl Region {
    /// Create a region from inclusive corner coordinates
    ///
    /// Callers must ensure `x1 <= x2` and `y1 <= y2`.
    pub const fn new(x1: u16, y1: u16, x2: u16, y2: u16) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Whether the corners are ordered
    pub const fn is_valid(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    /// Width in pixels
    pub const fn width(&self) -> usize {
        (self.x2 - self.x1) as usize + 1
    }

    /// Height in pixels
    pub const fn height(&self) -> usize {
        (self.y2 - self.y1) as usize + 1
    }

    /// Number of pixels covered
    pub const fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Size of an RGB565 buffer covering this region
    pub const fn byte_len(&self) -> usize {
        self.pixel_count() * 2
    }

    /// CASET payload: biased start and end columns, big-endian
    ///
    /// Biased coordinates must fit in `u16`.
    pub const fn column_window(&self, offsets: OffsetProfile) -> [u8; 4] {
        window_bytes(self.x1 + offsets.x, self.x2 + offsets.x)
    }

    /// RASET payload: biased start and end rows, big-endian
    ///
    /// Biased coordinates must fit in `u16`.
    pub const fn row_window(&self, offsets: OffsetProfile) -> [u8; 4] {
        window_bytes(self.y1 + offsets.y, self.y2 + offsets.y)
    }
}

const fn window_bytes(start: u16, end: u16) -> [u8; 4] {
    let [s_hi, s_lo] = start.to_be_bytes();
    let [e_hi, e_lo] = end.to_be_bytes();
    [s_hi, s_lo, e_hi, e_lo]
}

/// Coordinate bias applied before addressing the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OffsetProfile {
    /// Column bias
    pub x: u16,
    /// Row bias
    pub y: u16,
}

impl OffsetProfile {
    pub const NONE: Self = Self::new(0, 0);
    pub const GREEN_TAB: Self = Self::new(2, 1);
    pub const GREEN_TAB_2: Self = Self::new(2, 1);
    pub const GREEN_TAB_3: Self = Self::new(2, 3);
    pub const GREEN_TAB_128: Self = Self::new(0, 32);
    pub const GREEN_TAB_160X80: Self = Self::new(26, 1);
    pub const RED_TAB_160X80: Self = Self::new(24, 0);
    pub const RED_TAB: Self = Self::new(0, 0);
    pub const BLACK_TAB: Self = Self::new(0, 0);

    /// Create an offset profile
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_are_inclusive() {
        let region = Region::new(0, 0, 1, 0);
        assert_eq!(region.width(), 2);
        assert_eq!(region.height(), 1);
        assert_eq!(region.pixel_count(), 2);
        assert_eq!(region.byte_len(), 4);
    }

    #[test]
    fn test_single_pixel_region() {
        let region = Region::new(5, 7, 5, 7);
        assert!(region.is_valid());
        assert_eq!(region.pixel_count(), 1);
    }

    #[test]
    fn test_is_valid_rejects_swapped_corners() {
        assert!(!Region::new(3, 0, 2, 0).is_valid());
        assert!(!Region::new(0, 3, 0, 2).is_valid());
    }

    #[test]
    fn test_column_window_is_big_endian() {
        let region = Region::new(0, 0, 127, 0);
        let offsets = OffsetProfile::new(2, 0);
        assert_eq!(region.column_window(offsets), [0x00, 0x02, 0x00, 0x81]);
    }

    #[test]
    fn test_row_window_high_byte() {
        let region = Region::new(0, 250, 0, 300);
        let offsets = OffsetProfile::new(0, 10);
        // 260 = 0x0104, 310 = 0x0136
        assert_eq!(region.row_window(offsets), [0x01, 0x04, 0x01, 0x36]);
    }

    #[test]
    fn test_green_tab_160x80_window() {
        let region = Region::new(0, 0, 79, 159);
        let offsets = OffsetProfile::GREEN_TAB_160X80;
        assert_eq!(region.column_window(offsets), [0x00, 26, 0x00, 105]);
        assert_eq!(region.row_window(offsets), [0x00, 1, 0x00, 160]);
    }

    #[test]
    fn test_window_at_coordinate_limit() {
        let region = Region::new(0, 0, u16::MAX - 26, 0);
        assert_eq!(
            region.column_window(OffsetProfile::GREEN_TAB_160X80),
            [0x00, 26, 0xFF, 0xFF]
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "overflow")]
    fn test_column_window_overflow_is_caught() {
        let region = Region::new(0, 0, u16::MAX, 0);
        let _ = region.column_window(OffsetProfile::new(1, 0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "overflow")]
    fn test_row_window_overflow_is_caught() {
        let region = Region::new(0, u16::MAX - 1, 0, u16::MAX);
        let _ = region.row_window(OffsetProfile::GREEN_TAB_3);
    }
}
