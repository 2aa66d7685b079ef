//! Backend abstraction over the chip/line operations
//!
//! The controller drives one of two interchangeable implementations:
//! [`HardwareBackend`](crate::HardwareBackend) against the kernel GPIO
//! character device, or [`StubBackend`](crate::StubBackend) which only logs
//! intended actions. The backend is chosen at construction time, so the
//! same controller logic runs on the target board and on a development
//! host without GPIO hardware.

use gpiocdev::line::Offset;

use crate::controller::{Level, PinMode, Slot};
use crate::error::Result;

/// Chip- and line-level operations performed on behalf of the controller.
///
/// The backend owns the actual resource handles; the controller tracks the
/// pin mapping and lifecycle and never touches a slot it has not
/// successfully requested. Implementations must make `close` and `release`
/// safe to call when the resource is already absent.
pub trait Backend {
    /// Open the chip resource. Idempotent while open.
    fn open(&mut self) -> Result<()>;

    /// Close the chip resource. Never fails; a no-op when not open.
    fn close(&mut self);

    /// Acquire the line for `pin` into `slot`, configured for `mode`.
    /// Outputs start driven low.
    fn request(&mut self, slot: Slot, pin: Offset, mode: PinMode) -> Result<()>;

    /// Release the line held in `slot`. Never fails; a no-op when the slot
    /// holds nothing.
    fn release(&mut self, slot: Slot);

    /// Drive the line held in `slot` to `level`. `pin` is the physical
    /// pin number, carried for diagnostics.
    fn set_value(&mut self, slot: Slot, pin: Offset, level: Level) -> Result<()>;

    /// Read the current logical level of the line held in `slot`.
    fn value(&mut self, slot: Slot, pin: Offset) -> Result<Level>;
}
