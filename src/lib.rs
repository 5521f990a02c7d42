//! ST7735 TFT-LCD Display Driver
//!
//! A driver for the ST7735 display controller found on small SPI TFT
//! panels (128x160 and similar), such as the HY-1.8 module.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - Declarative init script bringing the controller from reset to ready
//! - Windowed RGB565 pixel writes with per-panel calibration offsets
//! - Panel variant (tab color) and RGB/BGR channel order configuration
//!
//! Drawing primitives (lines, fonts, blitting) are out of scope; the
//! driver exposes byte/pixel-level transfer only.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use st7735::{Builder, Color, Dimensions, Display, Interface, Variant, Window};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, rst);
//! let dims = match Dimensions::new(128, 160) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).variant(Variant::RedTab).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.reset(&mut delay);
//! let _ = display.initialize(&mut delay);
//! let _ = display.set_window_color(Window::new(0, 0, 127, 159), Color::BLACK);
//! let _ = display.set_pixel(10, 20, Color::from_rgb(0xFF, 0x80, 0x00));
//! display.shutdown();
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// RGB565 color type
pub mod color;
/// ST7735 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Hardware interface abstraction
pub mod interface;
/// Init script steps and validation
pub mod script;

pub use color::Color;
pub use config::{
    Builder, ColorOrder, Config, Dimensions, MAX_GATE_OUTPUTS, MAX_SOURCE_OUTPUTS, Variant,
};
pub use display::{Display, State, Window};
pub use error::{BuilderError, Error};
pub use interface::{
    BusMode, DisplayInterface, Interface, InterfaceError, RESET_ASSERT_MS, RESET_RELEASE_MS,
};
pub use script::{ConfigStep, ScriptError};
