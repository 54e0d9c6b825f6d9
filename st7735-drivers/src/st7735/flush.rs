//! Region flush pipeline
//!
//! CASET, RASET, RAMWR, then the region's pixels (byte-swapped in place)
//! in bounded chunks. The completion hook fires only after the bus has
//! drained, so the graphics library never reuses a buffer still in flight.

use st7735_core::command::Command;
use st7735_core::pixel::{swap_bytes, transfer_chunks};
use st7735_core::{DisplayConfig, FlushReady, OffsetProfile, Region};
use st7735_hal::{DisplayBus, DisplayBusExt};

/// Point the controller's write window at `region`
pub fn set_address_window<B: DisplayBus>(
    bus: &mut B,
    region: &Region,
    offsets: OffsetProfile,
) -> Result<(), B::Error> {
    bus.write_command(Command::CASET.addr())?;
    bus.write_data(&region.column_window(offsets))?;

    bus.write_command(Command::RASET.addr())?;
    bus.write_data(&region.row_window(offsets))
}

/// Stream `pixels` as color bursts of at most `max_bytes` each
pub fn write_pixels<B: DisplayBus>(
    bus: &mut B,
    pixels: &[u8],
    max_bytes: usize,
) -> Result<(), B::Error> {
    for chunk in transfer_chunks(pixels, max_bytes) {
        bus.write_color(chunk)?;
    }
    Ok(())
}

/// Transfer one region from the graphics library to frame memory
///
/// `pixels` holds the region's RGB565 words in native byte order and is
/// rewritten in place. It must be exactly `region.byte_len()` bytes; extra
/// trailing bytes are ignored. On a bus error the completion hook is not
/// called.
pub fn flush_region<B, F>(
    bus: &mut B,
    config: &DisplayConfig,
    region: &Region,
    pixels: &mut [u8],
    ready: &mut F,
) -> Result<(), B::Error>
where
    B: DisplayBus,
    F: FlushReady + ?Sized,
{
    debug_assert!(region.is_valid(), "flush region corners out of order");
    debug_assert_eq!(
        pixels.len(),
        region.byte_len(),
        "pixel buffer does not match region"
    );

    #[cfg(feature = "defmt")]
    defmt::trace!("Flush {}", region);

    set_address_window(bus, region, config.offsets)?;
    bus.write_command(Command::RAMWR.addr())?;

    let len = region.byte_len().min(pixels.len());
    let pixels = &mut pixels[..len];
    swap_bytes(pixels);
    write_pixels(bus, pixels, config.chunk_bytes())?;

    bus.wait_for_pending()?;
    ready.flush_ready();
    Ok(())
}
