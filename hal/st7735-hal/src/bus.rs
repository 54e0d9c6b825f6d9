//! Display bus abstractions
//!
//! A panel controller like the ST7735 multiplexes one serial bus between
//! opcodes and payload using a data/command (DC) select line. The traits
//! here expose the three phases plus the drain point that keeps them from
//! interleaving.

use crate::gpio::OutputPin;

/// Command/data transport to the panel controller
///
/// All three send methods may return before the bytes have left the wire
/// (DMA, FIFO). Callers must invoke [`wait_for_pending`] before switching
/// phases so a DC change never lands in the middle of a previous burst.
///
/// [`wait_for_pending`]: DisplayBus::wait_for_pending
pub trait DisplayBus {
    /// Error type for bus operations
    type Error;

    /// Send one byte in the command phase (DC low)
    fn send_command(&mut self, opcode: u8) -> Result<(), Self::Error>;

    /// Send a burst in the data phase (DC high)
    ///
    /// An empty burst is permitted and emits nothing on the wire.
    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Send pixel bytes in the data phase
    ///
    /// Wire semantics are identical to [`send_data`](DisplayBus::send_data);
    /// implementations may route this through a faster path.
    fn send_color(&mut self, pixels: &[u8]) -> Result<(), Self::Error> {
        self.send_data(pixels)
    }

    /// Block until every previously issued transfer has drained
    fn wait_for_pending(&mut self) -> Result<(), Self::Error>;
}

/// Phase helpers that drain the bus before every transfer
///
/// This is the only ordering the driver relies on: bytes of one phase
/// never overlap the DC change of the next.
pub trait DisplayBusExt: DisplayBus {
    /// Drain, then send an opcode
    fn write_command(&mut self, opcode: u8) -> Result<(), Self::Error> {
        self.wait_for_pending()?;
        self.send_command(opcode)
    }

    /// Drain, then send an argument burst
    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.wait_for_pending()?;
        self.send_data(data)
    }

    /// Drain, then send a pixel burst
    fn write_color(&mut self, pixels: &[u8]) -> Result<(), Self::Error> {
        self.wait_for_pending()?;
        self.send_color(pixels)
    }
}

// Blanket implementation for all DisplayBus types
impl<T: DisplayBus + ?Sized> DisplayBusExt for T {}

/// [`DisplayBus`] over an `embedded-hal` 1.0 SPI bus and a DC pin
///
/// The SPI bus is expected to have chip-select handled externally (held
/// low for the lifetime of the driver, or tied to ground on the module).
/// `SpiBus::write` may return while bytes are still shifting out, so the
/// drain point maps onto `SpiBus::flush`.
pub struct SpiDisplayBus<SPI, DC> {
    spi: SPI,
    dc: DC,
}

impl<SPI, DC> SpiDisplayBus<SPI, DC>
where
    SPI: embedded_hal::spi::SpiBus<u8>,
    DC: OutputPin,
{
    /// Create a bus from an SPI peripheral and the DC select pin
    pub fn new(spi: SPI, dc: DC) -> Self {
        Self { spi, dc }
    }

    /// Give back the SPI bus and DC pin
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }
}

impl<SPI, DC> DisplayBus for SpiDisplayBus<SPI, DC>
where
    SPI: embedded_hal::spi::SpiBus<u8>,
    DC: OutputPin,
{
    type Error = SPI::Error;

    fn send_command(&mut self, opcode: u8) -> Result<(), Self::Error> {
        self.dc.set_low();
        self.spi.write(&[opcode])
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        if data.is_empty() {
            return Ok(());
        }
        self.dc.set_high();
        self.spi.write(data)
    }

    fn wait_for_pending(&mut self) -> Result<(), Self::Error> {
        self.spi.flush()
    }
}
