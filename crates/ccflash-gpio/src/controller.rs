//! GPIO controller: lifecycle and pin resolution shared by both backends
//!
//! The controller maps the three physical pin numbers supplied to
//! [`GpioController::init`] onto fixed slots (RST, DC, DD) and delegates
//! every chip/line operation to the injected [`Backend`]. Resolution is a
//! first-match linear scan, so duplicate pin numbers are accepted but make
//! later slots unreachable by number.

use gpiocdev::line::Offset;

use crate::backend::Backend;
use crate::error::{GpioError, Result};
use crate::hardware::HardwareBackend;
use crate::stub::StubBackend;

/// Number of controlled lines
pub const SLOT_COUNT: usize = 3;

/// Roles of the three controlled lines, in fixed slot order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Reset line
    Rst = 0,
    /// Data/command select line
    Dc = 1,
    /// Debug data line
    Dd = 2,
}

impl Slot {
    /// All slots in slot order
    pub const ALL: [Slot; SLOT_COUNT] = [Slot::Rst, Slot::Dc, Slot::Dd];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Line direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    Input = 0,
    Output = 1,
}

/// Logical line level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Level {
    #[default]
    Low = 0,
    High = 1,
}

impl Level {
    #[inline]
    pub fn is_high(self) -> bool {
        self == Level::High
    }
}

/// Observable controller state: the pin map and lifecycle flags.
///
/// Read-only for callers; all mutation goes through [`GpioController`]
/// operations. The resource handles themselves live in the backend.
#[derive(Debug, Clone, Default)]
pub struct GpioContext {
    pin_numbers: [Offset; SLOT_COUNT],
    line_held: [bool; SLOT_COUNT],
    initialized: bool,
}

impl GpioContext {
    /// Physical pin numbers in RST, DC, DD order
    pub fn pin_numbers(&self) -> &[Offset; SLOT_COUNT] {
        &self.pin_numbers
    }

    /// Physical pin number assigned to `slot`
    pub fn pin_number(&self, slot: Slot) -> Offset {
        self.pin_numbers[slot.index()]
    }

    /// Whether `slot` currently holds an acquired line
    pub fn line_held(&self, slot: Slot) -> bool {
        self.line_held[slot.index()]
    }

    /// Lifecycle flag
    pub fn initialized(&self) -> bool {
        self.initialized
    }
}

/// GPIO controller for the RST/DC/DD lines of the target chip.
///
/// Single-threaded by design: one instance, no internal locking. Callers
/// needing concurrent access must serialize their own calls. Dropping the
/// controller runs [`cleanup`](Self::cleanup).
pub struct GpioController {
    backend: Box<dyn Backend>,
    ctx: GpioContext,
}

impl GpioController {
    /// Create a controller over an injected backend
    pub fn new(backend: Box<dyn Backend>) -> Self {
        Self {
            backend,
            ctx: GpioContext::default(),
        }
    }

    /// Create a controller over the default GPIO chip device
    pub fn hardware() -> Self {
        Self::new(Box::new(HardwareBackend::default()))
    }

    /// Create a controller over a specific GPIO chip device
    pub fn hardware_on(path: impl Into<String>) -> Self {
        Self::new(Box::new(HardwareBackend::new(path)))
    }

    /// Create a controller that only logs intended actions
    pub fn stub() -> Self {
        Self::new(Box::new(StubBackend::new()))
    }

    /// Initialize the controller with the three physical pin numbers.
    ///
    /// If already initialized, performs a full [`cleanup`](Self::cleanup)
    /// first. On success all three lines are held as outputs driven low.
    /// On any failure everything acquired so far is released and the
    /// controller is left uninitialized.
    ///
    /// Duplicate pin numbers are not rejected, but make slot resolution
    /// ambiguous: the first matching slot always wins.
    pub fn init(&mut self, rst: Offset, dc: Offset, dd: Offset) -> Result<()> {
        if self.ctx.initialized {
            self.cleanup();
        }

        log::debug!("gpio: init (rst={}, dc={}, dd={})", rst, dc, dd);
        self.ctx.pin_numbers = [rst, dc, dd];

        self.backend.open()?;

        for slot in Slot::ALL {
            let pin = self.ctx.pin_number(slot);
            if let Err(e) = self.backend.request(slot, pin, PinMode::Output) {
                self.teardown();
                return Err(e);
            }
            self.ctx.line_held[slot.index()] = true;
        }

        self.ctx.initialized = true;
        Ok(())
    }

    /// Release all held lines and close the chip.
    ///
    /// Idempotent and infallible: a no-op when not initialized, and
    /// release is attempted for every slot regardless of earlier slots.
    pub fn cleanup(&mut self) {
        if !self.ctx.initialized {
            return;
        }
        log::debug!("gpio: cleanup");
        self.teardown();
        self.ctx.initialized = false;
    }

    /// Lifecycle flag
    pub fn is_initialized(&self) -> bool {
        self.ctx.initialized
    }

    /// Observable controller state, for inspection only
    pub fn context(&self) -> &GpioContext {
        &self.ctx
    }

    /// Reconfigure `pin` as input or output.
    ///
    /// The held line is always released and re-requested, even when the
    /// mode is unchanged; a re-request as output resets the driven level
    /// to low. If the re-request fails the slot is left without a held
    /// line until the next `set_mode`, `cleanup` or `init`.
    ///
    /// A no-op when not initialized.
    pub fn set_mode(&mut self, pin: Offset, mode: PinMode) -> Result<()> {
        if !self.ctx.initialized {
            return Ok(());
        }
        let slot = self.resolve(pin)?;

        self.backend.release(slot);
        self.ctx.line_held[slot.index()] = false;

        match self.backend.request(slot, pin, mode) {
            Ok(()) => {
                self.ctx.line_held[slot.index()] = true;
                Ok(())
            }
            Err(e) => {
                log::error!("gpio: pin {} left unheld: {}", pin, e);
                Err(e)
            }
        }
    }

    /// Drive `pin` to `level`.
    ///
    /// A no-op when not initialized. Failures are reported to the caller
    /// and never alter the lifecycle state.
    pub fn write(&mut self, pin: Offset, level: Level) -> Result<()> {
        if !self.ctx.initialized {
            return Ok(());
        }
        let slot = self.resolve(pin)?;
        self.backend.set_value(slot, pin, level)
    }

    /// Read the current logical level of `pin`
    pub fn read(&mut self, pin: Offset) -> Result<Level> {
        if !self.ctx.initialized {
            return Err(GpioError::NotInitialized);
        }
        let slot = self.resolve(pin)?;
        self.backend.value(slot, pin)
    }

    /// Resolve a physical pin number to its slot, first match wins
    fn resolve(&self, pin: Offset) -> Result<Slot> {
        match self.ctx.pin_numbers.iter().position(|&p| p == pin) {
            Some(i) => Ok(Slot::ALL[i]),
            None => {
                log::warn!("gpio: unknown pin: {}", pin);
                Err(GpioError::UnknownPin { pin })
            }
        }
    }

    /// Best-effort release of every held line, then close the chip
    fn teardown(&mut self) {
        for slot in Slot::ALL {
            if self.ctx.line_held[slot.index()] {
                self.backend.release(slot);
                self.ctx.line_held[slot.index()] = false;
            }
        }
        self.backend.close();
    }
}

impl Drop for GpioController {
    fn drop(&mut self) {
        self.cleanup();
    }
}
