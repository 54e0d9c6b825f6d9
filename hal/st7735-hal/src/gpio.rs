//! GPIO pin abstractions
//!
//! Output pins used by the panel driver: reset, backlight and the
//! data/command select line. Level changes cannot fail at this layer.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Adapter from an `embedded-hal` 1.0 output pin
///
/// Tracks the last driven level so [`OutputPin::is_set_high`] can be
/// answered without a fallible register read. Pin errors are discarded:
/// the driver has no way to recover from a GPIO write failing.
pub struct HalPin<P> {
    pin: P,
    high: bool,
}

impl<P: embedded_hal::digital::OutputPin> HalPin<P> {
    /// Wrap a pin, driving it to `initial_high`
    pub fn new(mut pin: P, initial_high: bool) -> Self {
        let _ = pin.set_state(initial_high.into());
        Self {
            pin,
            high: initial_high,
        }
    }

    /// Give back the wrapped pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: embedded_hal::digital::OutputPin> OutputPin for HalPin<P> {
    fn set_high(&mut self) {
        let _ = self.pin.set_high();
        self.high = true;
    }

    fn set_low(&mut self) {
        let _ = self.pin.set_low();
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
