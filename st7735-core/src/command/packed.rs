//! Packed vendor table layout
//!
//! Vendor init tables store each command as `{cmd, data[17], databytes}`
//! where the low five bits of `databytes` are the argument count, bit 7
//! flags a trailing delay byte at `data[count]`, and `0xFF` ends the table.

use super::{CommandDescriptor, PostDelay, MAX_ARGS};

/// `databytes` bit marking a trailing delay byte
pub const DELAY_FLAG: u8 = 0x80;

/// `databytes` value terminating a table
pub const SENTINEL: u8 = 0xFF;

/// `databytes` mask for the argument count
const COUNT_MASK: u8 = 0x1F;

/// One command in the packed vendor layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PackedCommand {
    /// Opcode byte
    pub cmd: u8,
    /// Arguments, followed by the delay byte when flagged
    pub data: [u8; MAX_ARGS + 1],
    /// Argument count and flags
    pub databytes: u8,
}

impl PackedCommand {
    /// Table terminator
    pub const END: Self = Self {
        cmd: 0xFF,
        data: [0; MAX_ARGS + 1],
        databytes: SENTINEL,
    };

    /// Build an entry from a short data prefix (remaining bytes are zero)
    pub const fn new(cmd: u8, prefix: &[u8], databytes: u8) -> Self {
        assert!(prefix.len() <= MAX_ARGS + 1, "packed data holds 17 bytes");
        let mut data = [0; MAX_ARGS + 1];
        let mut i = 0;
        while i < prefix.len() {
            data[i] = prefix[i];
            i += 1;
        }
        Self {
            cmd,
            data,
            databytes,
        }
    }

    /// Whether this entry terminates the table
    pub const fn is_sentinel(&self) -> bool {
        self.databytes == SENTINEL
    }

    /// Argument count encoded in `databytes`, clamped to [`MAX_ARGS`]
    pub fn arg_count(&self) -> usize {
        let count = usize::from(self.databytes & COUNT_MASK);
        debug_assert!(count <= MAX_ARGS, "packed command declares {} args", count);
        count.min(MAX_ARGS)
    }

    /// Decode into a descriptor, or `None` for the sentinel
    pub fn decode(&self) -> Option<CommandDescriptor<'_>> {
        if self.is_sentinel() {
            return None;
        }

        let count = self.arg_count();
        let delay = if self.databytes & DELAY_FLAG != 0 {
            Some(PostDelay::from_raw(self.data[count]))
        } else {
            None
        };

        Some(CommandDescriptor {
            opcode: self.cmd,
            args: &self.data[..count],
            delay,
        })
    }
}

/// Walk a packed table up to (not including) its sentinel
///
/// The table must contain a sentinel. A table without one is a caller
/// bug: debug builds panic, release builds stop at the end of the slice.
pub fn decode_table(table: &[PackedCommand]) -> impl Iterator<Item = CommandDescriptor<'_>> {
    debug_assert!(
        table.iter().any(PackedCommand::is_sentinel),
        "packed command table has no sentinel"
    );
    table.iter().map_while(PackedCommand::decode)
}
