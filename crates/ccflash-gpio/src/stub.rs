//! Logging stand-in backend for hosts without GPIO hardware

use gpiocdev::line::Offset;

use crate::backend::Backend;
use crate::controller::{Level, PinMode, Slot};
use crate::error::Result;

/// Backend that logs intended actions instead of touching hardware.
///
/// Every configure and write succeeds, and every read reports a fixed
/// [`Level::Low`], so the controller's lifecycle and pin-resolution logic
/// can be exercised anywhere and higher layers behave uniformly in
/// non-hardware environments.
#[derive(Debug, Default)]
pub struct StubBackend;

impl StubBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Backend for StubBackend {
    fn open(&mut self) -> Result<()> {
        log::info!("gpio(stub): open chip");
        Ok(())
    }

    fn close(&mut self) {
        log::info!("gpio(stub): close chip");
    }

    fn request(&mut self, slot: Slot, pin: Offset, mode: PinMode) -> Result<()> {
        log::info!("gpio(stub): request {:?} pin={} as {:?}", slot, pin, mode);
        Ok(())
    }

    fn release(&mut self, slot: Slot) {
        log::info!("gpio(stub): release {:?}", slot);
    }

    fn set_value(&mut self, _slot: Slot, pin: Offset, level: Level) -> Result<()> {
        log::info!("gpio(stub): write pin={} value={:?}", pin, level);
        Ok(())
    }

    fn value(&mut self, _slot: Slot, pin: Offset) -> Result<Level> {
        log::info!("gpio(stub): read pin={} (returning Low)", pin);
        Ok(Level::Low)
    }
}
