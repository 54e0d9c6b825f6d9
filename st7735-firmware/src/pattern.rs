//! Test pattern rendering
//!
//! Stands in for a graphics library: fills a strip buffer with RGB565
//! words in the CPU's native byte order, the way a renderer hands them to
//! the flush path.

/// Vertical bar colors (RGB565)
pub const BARS: [u16; 8] = [
    0xFFFF, // white
    0xFFE0, // yellow
    0x07FF, // cyan
    0x07E0, // green
    0xF81F, // magenta
    0xF800, // red
    0x001F, // blue
    0x0000, // black
];

/// Fill `buf` with `rows` rows of color bars, `width` pixels each
///
/// `shift` rotates the bars so successive frames are visibly distinct.
pub fn color_bars(buf: &mut [u8], width: u16, rows: u16, shift: usize) {
    let width = usize::from(width.max(1));
    let bar_width = (width / BARS.len()).max(1);
    let pixels = buf
        .chunks_exact_mut(2)
        .take(width * usize::from(rows));

    for (i, px) in pixels.enumerate() {
        let bar = ((i % width) / bar_width + shift) % BARS.len();
        px.copy_from_slice(&BARS[bar].to_ne_bytes());
    }
}
