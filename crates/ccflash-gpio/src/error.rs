//! Error types for GPIO controller operations

use gpiocdev::line::Offset;
use thiserror::Error;

/// GPIO controller errors
#[derive(Debug, Error)]
pub enum GpioError {
    /// Failed to open the GPIO chip device
    #[error("Failed to open GPIO chip '{path}': {source}")]
    ChipOpen {
        path: String,
        #[source]
        source: gpiocdev::Error,
    },

    /// Failed to resolve a line on the chip for a configured pin
    #[error("Failed to get GPIO line {pin}: {source}")]
    LineLookup {
        pin: Offset,
        #[source]
        source: gpiocdev::Error,
    },

    /// Failed to request a line as input or output
    #[error("Failed to request GPIO line {pin}: {source}")]
    LineRequest {
        pin: Offset,
        #[source]
        source: gpiocdev::Error,
    },

    /// Operation referenced a pin that is not among the configured three
    #[error("Unknown pin: {pin}")]
    UnknownPin { pin: Offset },

    /// Failed to drive or read an acquired line
    #[error("GPIO line {pin} I/O failed: {source}")]
    LineIo {
        pin: Offset,
        #[source]
        source: gpiocdev::Error,
    },

    /// The slot's line was lost by a failed re-request; only another
    /// `set_mode` or a re-`init` can repair it
    #[error("GPIO line {pin} is not held (re-request it with set_mode)")]
    LineNotHeld { pin: Offset },

    /// `read` was called before `init`
    #[error("GPIO controller is not initialized")]
    NotInitialized,
}

/// Result type for GPIO controller operations
pub type Result<T> = std::result::Result<T, GpioError>;
