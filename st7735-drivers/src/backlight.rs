//! Backlight controller
//!
//! Drives the panel backlight through a GPIO pin honoring the configured
//! polarity, or does nothing when the backlight is not wired to a pin.

use st7735_core::config::{ActiveLevel, BacklightConfig};
use st7735_hal::OutputPin;

/// Placeholder pin for boards without backlight control
#[derive(Debug, Default)]
pub struct NoPin;

impl OutputPin for NoPin {
    fn set_high(&mut self) {}

    fn set_low(&mut self) {}

    fn is_set_high(&self) -> bool {
        false
    }
}

/// Backlight output
///
/// Controls the backlight via a GPIO pin. The pin can be configured as
/// active-high (default) or active-low.
pub struct Backlight<P> {
    pin: Option<P>,
    /// Polarity, `None` when control is not configured
    active_level: Option<ActiveLevel>,
    /// Current logical state (true = lit)
    on: bool,
}

impl<P: OutputPin> Backlight<P> {
    /// Create a backlight output on `pin`
    ///
    /// The pin is left untouched until the first [`set`](Self::set).
    pub fn new(pin: P, active_level: ActiveLevel) -> Self {
        Self {
            pin: Some(pin),
            active_level: Some(active_level),
            on: false,
        }
    }

    /// Create a backlight output from optional wiring
    ///
    /// Control is only wired when both a pin and a configuration exist.
    /// A pin without configuration is held so it can be released later.
    pub fn from_config(pin: Option<P>, config: Option<BacklightConfig>) -> Self {
        Self {
            pin,
            active_level: config.map(|c| c.active_level),
            on: false,
        }
    }

    /// Whether backlight control is wired
    pub fn is_wired(&self) -> bool {
        self.pin.is_some() && self.active_level.is_some()
    }

    /// Light or darken the backlight
    ///
    /// A no-op when control is not wired.
    pub fn set(&mut self, on: bool) {
        let (Some(pin), Some(active_level)) = (self.pin.as_mut(), self.active_level) else {
            return;
        };

        #[cfg(feature = "defmt")]
        defmt::debug!("{} backlight", if on { "Enabling" } else { "Disabling" });

        self.on = on;
        pin.set_state(active_level.level_for(on));
    }

    /// Current logical state
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Give back the pin, if any
    pub fn release(self) -> Option<P> {
        self.pin
    }
}

impl Backlight<NoPin> {
    /// Backlight that is not software controlled
    pub fn unwired() -> Self {
        Self {
            pin: None,
            active_level: None,
            on: false,
        }
    }
}
