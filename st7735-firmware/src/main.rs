//! ST7735 panel firmware
//!
//! Drives an ST7735 module from an RP2040 over SPI1: resets and
//! initializes the panel, lights the backlight, then streams a color bar
//! pattern through the region flush path in horizontal strips.
//!
//! Panel geometry, backlight wiring and bus speed come from display.toml,
//! validated and compiled in by build.rs.
//!
//! Wiring:
//! - GP10 SCK, GP11 MOSI (SPI1, write only)
//! - GP9 CS (held low, the panel is the only device on the bus)
//! - GP8 DC, GP12 RST, GP13 backlight

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::spi::{Config as SpiConfig, Spi};
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use st7735_core::{DisplayConfig, Region};
use st7735_drivers::St7735;
use st7735_hal::{HalPin, SpiDisplayBus};

mod pattern;

/// Constants generated from display.toml
mod generated {
    #[allow(unused_imports)]
    use st7735_core::{ActiveLevel, OffsetProfile, PanelVariant};

    include!(concat!(env!("OUT_DIR"), "/display_config.rs"));
}

/// Rows per flushed strip
const STRIP_ROWS: u16 = 40;

/// Strip buffer length in bytes
const STRIP_BYTES: usize = generated::WIDTH as usize * STRIP_ROWS as usize * 2;

/// Driver configuration assembled from the generated constants
const DISPLAY_CONFIG: DisplayConfig = {
    let mut config = DisplayConfig::new(generated::VARIANT)
        .with_size(generated::WIDTH, generated::HEIGHT);
    if let Some(offsets) = generated::OFFSETS {
        config = config.with_offsets(offsets);
    }
    if let Some(level) = generated::BACKLIGHT {
        config = config.with_backlight(level);
    }
    if let Some(bytes) = generated::MAX_CHUNK_BYTES {
        config = config.with_max_chunk_bytes(bytes);
    }
    config
};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("ST7735 firmware starting...");

    let p = embassy_rp::init(Default::default());

    let mut spi_config = SpiConfig::default();
    spi_config.frequency = generated::SPI_FREQUENCY_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI1, p.PIN_10, p.PIN_11, spi_config);

    // Sole device on the bus
    let _cs = Output::new(p.PIN_9, Level::Low);
    let dc = Output::new(p.PIN_8, Level::Low);
    let rst = HalPin::new(Output::new(p.PIN_12, Level::High), true);
    let bckl = DISPLAY_CONFIG
        .backlight
        .map(|_| HalPin::new(Output::new(p.PIN_13, Level::Low), false));

    info!(
        "Panel {}: {}x{}, offsets ({}, {}), SPI {} Hz",
        DISPLAY_CONFIG.variant,
        DISPLAY_CONFIG.width,
        DISPLAY_CONFIG.height,
        DISPLAY_CONFIG.offsets.x,
        DISPLAY_CONFIG.offsets.y,
        generated::SPI_FREQUENCY_HZ
    );

    let bus = SpiDisplayBus::new(spi, HalPin::new(dc, false));
    let mut display = St7735::new(bus, rst, bckl, DISPLAY_CONFIG);

    let mut delay = Delay;
    if let Err(e) = display.init(&mut delay) {
        error!("Panel initialization failed: {}", Debug2Format(&e));
        return;
    }

    let mut strip = [0u8; STRIP_BYTES];
    let mut frame: usize = 0;

    loop {
        let mut strips_done = 0u32;
        let mut y = 0;

        while y < DISPLAY_CONFIG.height {
            let rows = STRIP_ROWS.min(DISPLAY_CONFIG.height - y);
            let region = Region::new(0, y, DISPLAY_CONFIG.width - 1, y + rows - 1);
            let buf = &mut strip[..region.byte_len()];

            pattern::color_bars(buf, DISPLAY_CONFIG.width, rows, frame);

            if let Err(e) = display.flush(&region, buf, &mut || strips_done += 1) {
                warn!("Flush of rows {}..={} failed: {}", y, y + rows - 1, Debug2Format(&e));
                break;
            }
            y += rows;
        }

        debug!("Frame {} flushed in {} strips", frame, strips_done);
        frame = frame.wrapping_add(1);
        Timer::after_millis(1000).await;
    }
}
