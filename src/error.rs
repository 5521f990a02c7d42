//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! Transport failures are propagated unchanged and never retried: the
//! protocol is timing-sensitive, and a blind retry could leave the
//! controller in a corrupted state. Usage violations (wrong lifecycle
//! state, bad window coordinates) are programmer errors reported
//! synchronously, before any hardware access.
//!
//! ## Example
//!
//! ```
//! use st7735::{Builder, BuilderError, Dimensions};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Invalid dimensions
//! let result = Dimensions::new(1000, 500); // Too large
//! assert!(result.is_err());
//! ```

use crate::display::State;
use crate::interface::DisplayInterface;
use crate::script::ScriptError;

/// Maximum source outputs (columns) supported by the ST7735 controller
///
/// The ST7735 drives up to 132 source outputs.
///
/// NOTE: Most panels wire fewer sources; configure [`crate::Dimensions`] accordingly.
pub const MAX_SOURCE_OUTPUTS: u16 = 132;

/// Maximum gate outputs (rows) supported by the ST7735 controller
///
/// The ST7735 drives up to 162 gate outputs.
///
/// NOTE: Most panels wire fewer gates; configure [`crate::Dimensions`] accordingly.
pub const MAX_GATE_OUTPUTS: u16 = 162;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`]
    /// implementation. Never retried; a failure during initialization
    /// leaves the driver [`Faulted`](State::Faulted).
    Interface(I::Error),
    /// Operation attempted in the wrong lifecycle state
    ///
    /// Pixel operations require [`State::Ready`]; a faulted or shut-down
    /// driver fails fast here without touching the hardware.
    NotReady {
        /// The driver's current lifecycle state
        state: State,
    },
    /// `initialize` was called on an already-initialized driver
    ///
    /// Script execution is not resumable or repeatable; the caller must
    /// fix the call site.
    AlreadyInitialized,
    /// Window coordinates are inverted or outside panel bounds
    ///
    /// Windows must satisfy `x0 <= x1 < width` and `y0 <= y1 < height`.
    /// Coordinates are never clamped.
    InvalidWindow {
        /// Left column, inclusive
        x0: u16,
        /// Top row, inclusive
        y0: u16,
        /// Right column, inclusive
        x1: u16,
        /// Bottom row, inclusive
        y1: u16,
    },
    /// The color source ran out before the window was filled
    NotEnoughPixels {
        /// Pixels required to fill the window
        expected: usize,
        /// Pixels the source yielded
        provided: usize,
    },
    /// The init script is structurally malformed
    ///
    /// Only possible with a hand-authored script; fatal, no runtime
    /// recovery is meaningful.
    InvalidScript(ScriptError),
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::NotReady { state } => write!(f, "Display not ready: state is {state:?}"),
            Self::AlreadyInitialized => write!(f, "Display already initialized"),
            Self::InvalidWindow { x0, y0, x1, y1 } => {
                write!(f, "Invalid window: x0={x0}, y0={y0}, x1={x1}, y1={y1}")
            }
            Self::NotEnoughPixels { expected, provided } => {
                write!(
                    f,
                    "Not enough pixels: expected {expected}, provided {provided}"
                )
            }
            Self::InvalidScript(e) => write!(f, "Invalid init script: {e}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

impl<I: DisplayInterface> From<ScriptError> for Error<I> {
    fn from(e: ScriptError) -> Self {
        Self::InvalidScript(e)
    }
}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width (columns) requested
        width: u16,
        /// Height (rows) requested
        height: u16,
    },
    /// Calibration offsets push the active area outside the frame memory
    OffsetsOutOfRange {
        /// Column offset requested
        col_offset: u16,
        /// Row offset requested
        row_offset: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_SOURCE_OUTPUTS}x{MAX_GATE_OUTPUTS})"
            ),
            Self::OffsetsOutOfRange {
                col_offset,
                row_offset,
            } => write!(
                f,
                "Offsets ({col_offset}, {row_offset}) push the active area outside frame memory"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
