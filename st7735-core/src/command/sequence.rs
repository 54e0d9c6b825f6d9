//! Built-in power-on sequences
//!
//! One sequence per supported panel variant. Both end with the display
//! switched on; the caller enables the backlight afterwards.

use super::{Command, CommandDescriptor};

/// Generic "INITB" panel (128x160, ST7735B)
pub static INIT_B: [CommandDescriptor<'static>; 18] = [
    // Software reset
    CommandDescriptor::new(Command::SWRESET, &[]).delay_ms(50),
    // Out of sleep mode
    CommandDescriptor::new(Command::SLPOUT, &[]).delay_ms(255),
    // 16-bit color
    CommandDescriptor::new(Command::COLMOD, &[0x05]).delay_ms(10),
    // Fastest refresh, 6 lines front porch, 3 lines back porch
    CommandDescriptor::new(Command::FRMCTR1, &[0x00, 0x06, 0x03]).delay_ms(10),
    // Row addr/col addr, bottom to top refresh
    CommandDescriptor::new(Command::MADCTL, &[0x40]),
    // 1 clk cycle nonoverlap, 2 cycle gate rise, 3 cycle osc equalize; fix on VTL
    CommandDescriptor::new(Command::DISSET5, &[0x15, 0x02]),
    // Line inversion
    CommandDescriptor::new(Command::INVCTR, &[0x00]),
    // GVDD = 4.7V, 1.0uA
    CommandDescriptor::new(Command::PWCTR1, &[0x02, 0x70]).delay_ms(10),
    // VGH = 14.7V, VGL = -7.35V
    CommandDescriptor::new(Command::PWCTR2, &[0x05]),
    // Opamp current small, boost frequency
    CommandDescriptor::new(Command::PWCTR3, &[0x01, 0x02]),
    // VCOMH = 4V, VCOML = -1.1V
    CommandDescriptor::new(Command::VMCTR1, &[0x3C, 0x38]).delay_ms(10),
    CommandDescriptor::new(Command::PWCTR6, &[0x11, 0x15]),
    CommandDescriptor::new(
        Command::GMCTRP1,
        &[
            0x09, 0x16, 0x09, 0x20, 0x21, 0x1B, 0x13, 0x19, //
            0x17, 0x15, 0x1E, 0x2B, 0x04, 0x05, 0x02, 0x0E,
        ],
    ),
    CommandDescriptor::new(
        Command::GMCTRN1,
        &[
            0x0B, 0x14, 0x08, 0x1E, 0x22, 0x1D, 0x18, 0x1E, //
            0x1B, 0x1A, 0x24, 0x2B, 0x06, 0x06, 0x02, 0x0F,
        ],
    )
    .delay_ms(10),
    // XSTART = 2, XEND = 129
    CommandDescriptor::new(Command::CASET, &[0x00, 0x02, 0x00, 0x81]),
    // YSTART = 2, YEND = 129
    CommandDescriptor::new(Command::RASET, &[0x00, 0x02, 0x00, 0x81]),
    CommandDescriptor::new(Command::NORON, &[]).delay_ms(10),
    CommandDescriptor::new(Command::DISPON, &[]).delay_ms(255),
];

/// Green-tab 160x80 panel (ST7735S, 0.96")
pub static INIT_R_GREEN_TAB_160X80: [CommandDescriptor<'static>; 22] = [
    CommandDescriptor::new(Command::SWRESET, &[]).delay_ms(150),
    CommandDescriptor::new(Command::SLPOUT, &[]).delay_ms(255),
    // Rate = fosc/(1x2+40) * (LINE+2C+2D)
    CommandDescriptor::new(Command::FRMCTR1, &[0x01, 0x2C, 0x2D]),
    CommandDescriptor::new(Command::FRMCTR2, &[0x01, 0x2C, 0x2D]),
    // Dot inversion mode, then line inversion mode
    CommandDescriptor::new(Command::FRMCTR3, &[0x01, 0x2C, 0x2D, 0x01, 0x2C, 0x2D]),
    // No inversion
    CommandDescriptor::new(Command::INVCTR, &[0x07]),
    // -4.6V, AUTO mode
    CommandDescriptor::new(Command::PWCTR1, &[0xA2, 0x02, 0x84]),
    // VGH25 = 2.4C VGSEL = -10 VGH = 3 * AVDD
    CommandDescriptor::new(Command::PWCTR2, &[0xC5]),
    CommandDescriptor::new(Command::PWCTR3, &[0x0A, 0x00]),
    // BCLK/2, opamp current small & medium low
    CommandDescriptor::new(Command::PWCTR4, &[0x8A, 0x2A]),
    CommandDescriptor::new(Command::PWCTR5, &[0x8A, 0xEE]),
    CommandDescriptor::new(Command::VMCTR1, &[0x0E]),
    CommandDescriptor::new(Command::INVOFF, &[]),
    CommandDescriptor::new(Command::MADCTL, &[0xC8]),
    CommandDescriptor::new(Command::COLMOD, &[0x05]),
    // XSTART = 2, XEND = 127 + 2
    CommandDescriptor::new(Command::CASET, &[0x00, 0x02, 0x00, 0x7F + 0x02]),
    // YSTART = 1, YEND = 159 + 1
    CommandDescriptor::new(Command::RASET, &[0x00, 0x01, 0x00, 0x9F + 0x01]),
    CommandDescriptor::new(Command::INVON, &[]),
    CommandDescriptor::new(
        Command::GMCTRP1,
        &[
            0x02, 0x1C, 0x07, 0x12, 0x37, 0x32, 0x29, 0x2D, //
            0x29, 0x25, 0x2B, 0x39, 0x00, 0x01, 0x03, 0x10,
        ],
    ),
    CommandDescriptor::new(
        Command::GMCTRN1,
        &[
            0x03, 0x1D, 0x07, 0x06, 0x2E, 0x2C, 0x29, 0x2D, //
            0x2E, 0x2E, 0x37, 0x3F, 0x00, 0x00, 0x02, 0x10,
        ],
    ),
    CommandDescriptor::new(Command::NORON, &[]).delay_ms(10),
    CommandDescriptor::new(Command::DISPON, &[]).delay_ms(100),
];
