//! ST7735 TFT panel driver
//!
//! Owns the display bus, the reset line and the backlight. Startup runs
//! [`St7735::init`] once; the graphics library then calls
//! [`St7735::flush`] once per redraw. Every operation takes `&mut self`,
//! so at most one bus transaction sequence is ever in flight.

pub mod flush;
pub mod init;

use embedded_hal::delay::DelayNs;
use st7735_core::{CommandDescriptor, DisplayConfig, FlushReady, Region};
use st7735_hal::{DisplayBus, OutputPin};

use crate::backlight::Backlight;

/// ST7735 driver
pub struct St7735<B, RST, BL> {
    bus: B,
    rst: RST,
    backlight: Backlight<BL>,
    config: DisplayConfig,
}

impl<B, RST, BL> St7735<B, RST, BL>
where
    B: DisplayBus,
    RST: OutputPin,
    BL: OutputPin,
{
    /// Create a driver; nothing is sent until [`init`](Self::init)
    ///
    /// The backlight pin is only driven when `config.backlight` is set.
    pub fn new(bus: B, rst: RST, backlight: Option<BL>, config: DisplayConfig) -> Self {
        Self {
            bus,
            rst,
            backlight: Backlight::from_config(backlight, config.backlight),
            config,
        }
    }

    /// Reset the panel, run the variant's power-on sequence and light it
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), B::Error> {
        let sequence = self.config.variant.init_sequence();
        self.init_with(delay, sequence.iter().copied())
    }

    /// Like [`init`](Self::init) with a caller-supplied command sequence
    pub fn init_with<'a, D, I>(&mut self, delay: &mut D, sequence: I) -> Result<(), B::Error>
    where
        D: DelayNs,
        I: IntoIterator<Item = CommandDescriptor<'a>>,
    {
        init::hardware_reset(&mut self.rst, delay);

        #[cfg(feature = "defmt")]
        defmt::info!("ST7735 initialization ({})", self.config.variant);

        let _sent = init::run_sequence(&mut self.bus, delay, sequence)?;

        #[cfg(feature = "defmt")]
        defmt::info!("ST7735 initialization complete, {} commands", _sent);

        self.backlight.set(true);
        Ok(())
    }

    /// Light or darken the backlight (no-op when not wired)
    pub fn set_backlight(&mut self, on: bool) {
        self.backlight.set(on);
    }

    /// Transfer one region; see [`flush::flush_region`]
    pub fn flush<F>(&mut self, region: &Region, pixels: &mut [u8], ready: &mut F) -> Result<(), B::Error>
    where
        F: FlushReady + ?Sized,
    {
        flush::flush_region(&mut self.bus, &self.config, region, pixels, ready)
    }

    /// Active configuration
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Backlight state
    pub fn backlight(&self) -> &Backlight<BL> {
        &self.backlight
    }

    /// Give back the bus and pins
    pub fn release(self) -> (B, RST, Option<BL>) {
        (self.bus, self.rst, self.backlight.release())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backlight::NoPin;
    use crate::mock::{new_log, without_waits, Event, MockBus, MockDelay, MockPin};
    use st7735_core::command::Command;
    use st7735_core::{ActiveLevel, PanelVariant};

    #[test]
    fn test_init_order_reset_sequence_backlight() {
        let log = new_log();
        let config = DisplayConfig::new(PanelVariant::InitB).with_backlight(ActiveLevel::High);
        let mut display = St7735::new(
            MockBus::new(&log),
            MockPin::logged("rst", &log),
            Some(MockPin::logged("bckl", &log)),
            config,
        );

        display.init(&mut MockDelay::new(&log)).unwrap();

        let events = without_waits(&log);
        assert_eq!(
            &events[..4],
            &[
                Event::Pin("rst", false),
                Event::DelayMs(100),
                Event::Pin("rst", true),
                Event::DelayMs(100),
            ]
        );
        assert_eq!(events[4], Event::Command(Command::SWRESET.addr()));
        assert_eq!(events.last(), Some(&Event::Pin("bckl", true)));

        let commands = events
            .iter()
            .filter(|e| matches!(e, Event::Command(_)))
            .count();
        assert_eq!(commands, 18);
        assert!(display.backlight().is_on());
    }

    #[test]
    fn test_init_green_tab_sequence() {
        let log = new_log();
        let mut display = St7735::new(
            MockBus::new(&log),
            MockPin::new(),
            None::<NoPin>,
            DisplayConfig::new(PanelVariant::GreenTab160x80),
        );

        display.init(&mut MockDelay::new(&log)).unwrap();

        let commands: Vec<u8> = without_waits(&log)
            .into_iter()
            .filter_map(|e| match e {
                Event::Command(op) => Some(op),
                _ => None,
            })
            .collect();
        assert_eq!(commands.len(), 22);
        assert_eq!(commands[0], Command::SWRESET.addr());
        assert_eq!(commands[21], Command::DISPON.addr());
    }

    #[test]
    fn test_active_low_backlight_levels() {
        let log = new_log();
        let config = DisplayConfig::default().with_backlight(ActiveLevel::Low);
        let mut display = St7735::new(
            MockBus::new(&log),
            MockPin::new(),
            Some(MockPin::logged("bckl", &log)),
            config,
        );

        display.set_backlight(true);
        display.set_backlight(false);

        assert_eq!(
            *log.borrow(),
            vec![Event::Pin("bckl", false), Event::Pin("bckl", true)]
        );
    }

    #[test]
    fn test_flush_uses_configured_offsets() {
        let log = new_log();
        let mut display = St7735::new(
            MockBus::new(&log),
            MockPin::new(),
            None::<NoPin>,
            DisplayConfig::new(PanelVariant::GreenTab160x80),
        );
        let mut pixels = [0xFF, 0x00];
        let mut flushed = 0;

        display
            .flush(&Region::new(0, 0, 0, 0), &mut pixels, &mut || flushed += 1)
            .unwrap();

        assert_eq!(flushed, 1);
        let events = without_waits(&log);
        assert_eq!(events[1], Event::Data(vec![0x00, 26, 0x00, 26]));
        assert_eq!(events[3], Event::Data(vec![0x00, 1, 0x00, 1]));
        assert_eq!(events[5], Event::Color(vec![0x00, 0xFF]));
    }

    #[test]
    fn test_release_returns_parts() {
        let log = new_log();
        let config = DisplayConfig::default().with_backlight(ActiveLevel::High);
        let display = St7735::new(
            MockBus::new(&log),
            MockPin::new(),
            Some(MockPin::new()),
            config,
        );

        let (_bus, _rst, bckl) = display.release();
        assert!(bckl.is_some());
    }
}
