//! Kernel GPIO character device backend
//!
//! Holds one single-line request per slot so that `set_mode` can release
//! and re-request an individual line without disturbing the other two,
//! matching the per-line ownership model of the flashing sequence.

use gpiocdev::chip::Chip;
use gpiocdev::line::{Offset, Value};
use gpiocdev::request::{Config, Request};

use crate::backend::Backend;
use crate::controller::{Level, PinMode, Slot, SLOT_COUNT};
use crate::error::{GpioError, Result};

/// Default GPIO chip device (the primary controller on a Raspberry Pi)
pub const DEFAULT_CHIP: &str = "/dev/gpiochip0";

/// Consumer label reported to the kernel on every line request, so tools
/// like `gpioinfo` can attribute the held lines
pub const CONSUMER: &str = "ccflash";

/// Backend driving real lines through the Linux GPIO character device
pub struct HardwareBackend {
    path: String,
    chip: Option<Chip>,
    /// One held request per slot; dropping a request releases its line
    lines: [Option<Request>; SLOT_COUNT],
}

impl HardwareBackend {
    /// Create a backend for a specific chip device path
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            chip: None,
            lines: [None, None, None],
        }
    }

    /// Chip device path this backend is configured for
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Default for HardwareBackend {
    fn default() -> Self {
        Self::new(DEFAULT_CHIP)
    }
}

fn to_value(level: Level) -> Value {
    match level {
        Level::High => Value::Active,
        Level::Low => Value::Inactive,
    }
}

fn to_level(value: Value) -> Level {
    match value {
        Value::Active => Level::High,
        Value::Inactive => Level::Low,
    }
}

impl Backend for HardwareBackend {
    fn open(&mut self) -> Result<()> {
        if self.chip.is_some() {
            return Ok(());
        }
        let chip = Chip::from_path(&self.path).map_err(|e| GpioError::ChipOpen {
            path: self.path.clone(),
            source: e,
        })?;
        log::debug!("gpio: opened chip {}", self.path);
        self.chip = Some(chip);
        Ok(())
    }

    fn close(&mut self) {
        // Stragglers first: lines are released before the chip handle goes.
        for line in &mut self.lines {
            *line = None;
        }
        if self.chip.take().is_some() {
            log::debug!("gpio: closed chip {}", self.path);
        }
    }

    fn request(&mut self, slot: Slot, pin: Offset, mode: PinMode) -> Result<()> {
        let chip = self.chip.as_ref().ok_or(GpioError::NotInitialized)?;

        // Resolve the line on the chip before requesting it, so a bad pin
        // number is reported as an acquisition failure rather than a
        // configuration one.
        chip.line_info(pin)
            .map_err(|e| GpioError::LineLookup { pin, source: e })?;

        let mut cfg = Config::default();
        match mode {
            PinMode::Output => {
                cfg.with_line(pin).as_output(Value::Inactive);
            }
            PinMode::Input => {
                cfg.with_line(pin).as_input();
            }
        }

        let request = Request::from_config(cfg)
            .on_chip(&self.path)
            .with_consumer(CONSUMER)
            .request()
            .map_err(|e| GpioError::LineRequest { pin, source: e })?;

        log::debug!("gpio: requested line {} as {:?}", pin, mode);
        self.lines[slot.index()] = Some(request);
        Ok(())
    }

    fn release(&mut self, slot: Slot) {
        if self.lines[slot.index()].take().is_some() {
            log::debug!("gpio: released {:?} line", slot);
        }
    }

    fn set_value(&mut self, slot: Slot, pin: Offset, level: Level) -> Result<()> {
        let request = self.lines[slot.index()]
            .as_ref()
            .ok_or(GpioError::LineNotHeld { pin })?;
        request
            .set_value(pin, to_value(level))
            .map_err(|e| GpioError::LineIo { pin, source: e })?;
        Ok(())
    }

    fn value(&mut self, slot: Slot, pin: Offset) -> Result<Level> {
        let request = self.lines[slot.index()]
            .as_ref()
            .ok_or(GpioError::LineNotHeld { pin })?;
        let value = request
            .value(pin)
            .map_err(|e| GpioError::LineIo { pin, source: e })?;
        Ok(to_level(value))
    }
}
