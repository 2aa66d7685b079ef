//! ccflash-gpio - GPIO line control for the ccflash CC2531 flashing tool
//!
//! Drives the three lines used to sequence the CC2531 debug-flashing
//! procedure, reset (RST), data/command (DC) and debug data (DD), through
//! the Linux GPIO character device interface (gpiocdev).
//!
//! # Overview
//!
//! [`GpioController`] maps the three physical pin numbers supplied to
//! [`init`](GpioController::init) onto fixed RST/DC/DD slots and delegates
//! every chip/line operation to a [`Backend`] chosen at construction time:
//!
//! - [`HardwareBackend`] holds real kernel line handles on a gpiochip
//!   device (Raspberry Pi and similar boards)
//! - [`StubBackend`] logs intended actions and reads back a fixed low
//!   level, for development hosts without GPIO hardware
//!
//! Both backends sit behind the same contract, so the flashing layers
//! built on this controller behave identically with or without hardware.
//!
//! # Example
//!
//! ```no_run
//! use ccflash_gpio::{GpioController, Level, PinMode};
//!
//! let mut gpio = GpioController::hardware();
//! gpio.init(17, 27, 22)?; // RST, DC, DD
//!
//! gpio.write(17, Level::High)?;
//! gpio.set_mode(22, PinMode::Input)?;
//! let dd = gpio.read(22)?;
//! println!("DD is {:?}", dd);
//!
//! gpio.cleanup();
//! # Ok::<(), ccflash_gpio::GpioError>(())
//! ```
//!
//! # System Requirements
//!
//! - Linux kernel 4.8+ with GPIO character device support (kernel 5.5+
//!   for the v2 uAPI)
//! - Access to `/dev/gpiochipN` devices (may require root or udev rules)
//!
//! Held lines are attributed to the `"ccflash"` consumer, visible in
//! `gpioinfo` output while the controller is initialized.
//!
//! # Concurrency
//!
//! Single-threaded by design: one controller instance, no internal
//! locking. Callers needing concurrent access must serialize their own
//! calls or confine all GPIO operations to one thread.

pub mod backend;
pub mod controller;
pub mod error;
pub mod hardware;
pub mod stub;

// Re-exports
pub use backend::Backend;
pub use controller::{GpioContext, GpioController, Level, PinMode, Slot, SLOT_COUNT};
pub use error::{GpioError, Result};
pub use hardware::{HardwareBackend, CONSUMER, DEFAULT_CHIP};
pub use stub::StubBackend;
