//! Power-on sequencing
//!
//! Reset pulse followed by a walk over a command table. Each descriptor
//! becomes one command phase and one data phase (possibly empty), then an
//! optional blocking delay.

use embedded_hal::delay::DelayNs;
use st7735_core::command::{decode_table, CommandDescriptor, PackedCommand};
use st7735_hal::{DisplayBus, DisplayBusExt, OutputPin};

/// Reset pulse hold and recovery time
pub const RESET_PULSE_MS: u32 = 100;

/// Pulse the reset line: low, wait, high, wait
pub fn hardware_reset<RST, D>(rst: &mut RST, delay: &mut D)
where
    RST: OutputPin,
    D: DelayNs,
{
    rst.set_low();
    delay.delay_ms(RESET_PULSE_MS);
    rst.set_high();
    delay.delay_ms(RESET_PULSE_MS);
}

/// Send every descriptor in order, returning how many were sent
pub fn run_sequence<'a, B, D, I>(bus: &mut B, delay: &mut D, sequence: I) -> Result<usize, B::Error>
where
    B: DisplayBus,
    D: DelayNs,
    I: IntoIterator<Item = CommandDescriptor<'a>>,
{
    let mut sent = 0;
    for desc in sequence {
        bus.write_command(desc.opcode)?;
        bus.write_data(desc.args)?;

        if let Some(wait) = desc.delay {
            delay.delay_ms(wait.as_millis());
        }

        sent += 1;
    }
    Ok(sent)
}

/// Send a packed vendor table up to its sentinel
///
/// The table must be terminated by [`PackedCommand::END`]; see
/// [`decode_table`].
pub fn run_packed<B, D>(bus: &mut B, delay: &mut D, table: &[PackedCommand]) -> Result<usize, B::Error>
where
    B: DisplayBus,
    D: DelayNs,
{
    run_sequence(bus, delay, decode_table(table))
}
