//! Recording doubles for the bus, pins and delay
//!
//! All doubles can share one [`Log`] so tests can assert on the exact
//! interleaving of pin changes, delays and bus phases.

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use st7735_hal::{DisplayBus, OutputPin};

pub type Log = Rc<RefCell<Vec<Event>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Wait,
    Command(u8),
    Data(Vec<u8>),
    Color(Vec<u8>),
    DelayMs(u32),
    Pin(&'static str, bool),
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

pub struct MockBus {
    log: Log,
    /// Fail the send with this zero-based index
    fail_on: Option<usize>,
    sends: usize,
}

impl MockBus {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            fail_on: None,
            sends: 0,
        }
    }

    pub fn failing_on(log: &Log, send: usize) -> Self {
        Self {
            fail_on: Some(send),
            ..Self::new(log)
        }
    }

    fn record(&mut self, event: Event) -> Result<(), MockError> {
        let index = self.sends;
        self.sends += 1;
        if self.fail_on == Some(index) {
            return Err(MockError);
        }
        self.log.borrow_mut().push(event);
        Ok(())
    }
}

impl DisplayBus for MockBus {
    type Error = MockError;

    fn send_command(&mut self, opcode: u8) -> Result<(), Self::Error> {
        self.record(Event::Command(opcode))
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.record(Event::Data(data.to_vec()))
    }

    fn send_color(&mut self, pixels: &[u8]) -> Result<(), Self::Error> {
        self.record(Event::Color(pixels.to_vec()))
    }

    fn wait_for_pending(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Wait);
        Ok(())
    }
}

pub struct MockDelay {
    log: Log,
}

impl MockDelay {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::DelayMs(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::DelayMs(ms));
    }
}

pub struct MockPin {
    name: &'static str,
    high: bool,
    writes: usize,
    log: Option<Log>,
}

impl MockPin {
    pub fn new() -> Self {
        Self {
            name: "pin",
            high: false,
            writes: 0,
            log: None,
        }
    }

    pub fn logged(name: &'static str, log: &Log) -> Self {
        Self {
            name,
            log: Some(log.clone()),
            ..Self::new()
        }
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    fn drive(&mut self, high: bool) {
        self.high = high;
        self.writes += 1;
        if let Some(log) = &self.log {
            log.borrow_mut().push(Event::Pin(self.name, high));
        }
    }
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.drive(true);
    }

    fn set_low(&mut self) {
        self.drive(false);
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Events with the drain points removed
pub fn without_waits(log: &Log) -> Vec<Event> {
    log.borrow()
        .iter()
        .filter(|e| **e != Event::Wait)
        .cloned()
        .collect()
}
