//! Controller commands and command descriptors
//!
//! A power-on sequence is a list of [`CommandDescriptor`] records: an
//! opcode, its argument bytes and an optional delay to honor after the
//! arguments have been sent. Vendor tables in the packed
//! `cmd/data/databytes` layout decode into the same records through
//! [`PackedCommand`].

mod packed;
pub mod sequence;

pub use packed::{decode_table, PackedCommand, DELAY_FLAG, SENTINEL};

/// Maximum argument bytes carried by one command
pub const MAX_ARGS: usize = 16;

/// Post-command delay byte that selects the long delay
pub const LONG_DELAY_RAW: u8 = 255;

/// Duration of the long delay in milliseconds
pub const LONG_DELAY_MS: u32 = 500;

/// ST7735 controller opcodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[allow(clippy::upper_case_acronyms)]
pub enum Command {
    /// No operation
    NOP = 0x00,
    /// Software reset
    SWRESET = 0x01,
    /// Read display ID
    RDDID = 0x04,
    /// Read display status
    RDDST = 0x09,
    /// Sleep in
    SLPIN = 0x10,
    /// Sleep out
    SLPOUT = 0x11,
    /// Partial mode on
    PTLON = 0x12,
    /// Normal display mode on
    NORON = 0x13,
    /// Display inversion off
    INVOFF = 0x20,
    /// Display inversion on
    INVON = 0x21,
    /// Display off
    DISPOFF = 0x28,
    /// Display on
    DISPON = 0x29,
    /// Column address set
    CASET = 0x2A,
    /// Row address set
    RASET = 0x2B,
    /// Memory write
    RAMWR = 0x2C,
    /// Memory read
    RAMRD = 0x2E,
    /// Partial area
    PTLAR = 0x30,
    /// Memory data access control
    MADCTL = 0x36,
    /// Interface pixel format
    COLMOD = 0x3A,
    /// Frame rate control, normal mode
    FRMCTR1 = 0xB1,
    /// Frame rate control, idle mode
    FRMCTR2 = 0xB2,
    /// Frame rate control, partial mode
    FRMCTR3 = 0xB3,
    /// Display inversion control
    INVCTR = 0xB4,
    /// Display function setting
    DISSET5 = 0xB6,
    /// Power control 1
    PWCTR1 = 0xC0,
    /// Power control 2
    PWCTR2 = 0xC1,
    /// Power control 3, normal mode
    PWCTR3 = 0xC2,
    /// Power control 4, idle mode
    PWCTR4 = 0xC3,
    /// Power control 5, partial mode
    PWCTR5 = 0xC4,
    /// VCOM control 1
    VMCTR1 = 0xC5,
    /// Read ID1
    RDID1 = 0xDA,
    /// Read ID2
    RDID2 = 0xDB,
    /// Read ID3
    RDID3 = 0xDC,
    /// Read ID4
    RDID4 = 0xDD,
    /// Positive gamma correction
    GMCTRP1 = 0xE0,
    /// Negative gamma correction
    GMCTRN1 = 0xE1,
    /// Power control 6, partial mode + full colors
    PWCTR6 = 0xFC,
}

impl Command {
    /// Get the opcode byte
    #[inline]
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// Delay to honor after a command's arguments are sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PostDelay {
    /// Wait the given number of milliseconds
    Millis(u8),
    /// Wait [`LONG_DELAY_MS`]
    Long,
}

impl PostDelay {
    /// Interpret a raw delay byte from a vendor table
    pub const fn from_raw(raw: u8) -> Self {
        if raw == LONG_DELAY_RAW {
            Self::Long
        } else {
            Self::Millis(raw)
        }
    }

    /// Delay duration in milliseconds
    pub const fn as_millis(self) -> u32 {
        match self {
            Self::Millis(ms) => ms as u32,
            Self::Long => LONG_DELAY_MS,
        }
    }
}

/// One entry of a power-on command sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandDescriptor<'a> {
    /// Opcode sent in the command phase
    pub opcode: u8,
    /// Argument bytes sent in the data phase (at most [`MAX_ARGS`])
    pub args: &'a [u8],
    /// Delay after the arguments, if any
    pub delay: Option<PostDelay>,
}

impl<'a> CommandDescriptor<'a> {
    /// Descriptor for a known command with no delay
    pub const fn new(command: Command, args: &'a [u8]) -> Self {
        Self::raw(command.addr(), args)
    }

    /// Descriptor for an arbitrary opcode
    pub const fn raw(opcode: u8, args: &'a [u8]) -> Self {
        assert!(args.len() <= MAX_ARGS, "command carries more than 16 arguments");
        Self {
            opcode,
            args,
            delay: None,
        }
    }

    /// Add a post-command delay in milliseconds
    ///
    /// `255` selects the long delay, matching vendor table conventions.
    pub const fn delay_ms(mut self, raw: u8) -> Self {
        self.delay = Some(PostDelay::from_raw(raw));
        self
    }

    /// Number of argument bytes
    pub const fn arg_count(&self) -> usize {
        self.args.len()
    }
}
