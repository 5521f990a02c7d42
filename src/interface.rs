//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the ST7735 controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The ST7735 requires:
//! - SPI bus (MOSI + SCK, chip select handled by the [`SpiDevice`])
//! - 2 GPIO pins:
//!   - **DC** (A0): Data/Command select (output, low=command, high=data)
//!   - **RST**: Reset (output, active low)
//!
//! Bus mode, clock divider, bit order, and chip-select polarity are
//! setup-time concerns of the supplied [`SpiDevice`], not of this driver.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use st7735::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! # impl embedded_hal::delay::DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! // Create interface with SPI and GPIO pins
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//!
//! // Hardware reset
//! let _ = interface.reset(&mut delay);
//!
//! // Send command
//! let _ = interface.send_command(0x01); // Software reset
//!
//! // Send data
//! let _ = interface.send_data(&[0x05]);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Framing selected by the DC (A0) line
///
/// The controller interprets each transferred byte according to the level
/// of the DC pin, which must be stable for the whole byte transfer. The
/// pin level always equals the last mode explicitly selected; it is never
/// read back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BusMode {
    /// DC low: the next byte is an opcode
    Command,
    /// DC high: the next bytes are operands or pixel data
    Data,
}

/// Trait for hardware interface to the ST7735 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation that satisfies embedded-hal traits.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (e.g., different pin polarities, additional CS control),
/// implement this trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin low (command mode), even if it was already low
    /// 2. Send the command byte over SPI
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send data bytes to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin high (data mode), even if it was already high
    /// 2. Send the data bytes over SPI
    ///
    /// # Arguments
    ///
    /// * `data` - Slice of bytes to send
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// The implementation must:
    /// 1. Set RST pin low
    /// 2. Wait at least 10ms
    /// 3. Set RST pin high
    /// 4. Wait at least 120ms (controller wake-up interval)
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay implementation for timing
    ///
    /// # Errors
    ///
    /// Returns an error if GPIO fails.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Duration the RST pin is held low during hardware reset, in milliseconds
pub const RESET_ASSERT_MS: u32 = 10;

/// Wake-up interval after RST is released, in milliseconds
///
/// Hardware-mandated minimum; the controller ignores commands sent earlier.
pub const RESET_RELEASE_MS: u32 = 120;

/// Hardware interface implementation for ST7735
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
pub struct Interface<SPI, DC, RST> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
}

impl<SPI, DC, RST> Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self { spi, dc, rst }
    }

    /// Release the underlying SPI device and pins
    ///
    /// Hands pin ownership back to the host after
    /// [`Display::shutdown`](crate::display::Display::shutdown).
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC, RST, PinErr> Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
{
    /// Set the DC pin to the given framing mode
    ///
    /// Always performed before a transfer; mode changes are never elided.
    fn select(&mut self, mode: BusMode) -> Result<(), PinErr> {
        match mode {
            BusMode::Command => self.dc.set_low(),
            BusMode::Data => self.dc.set_high(),
        }
    }
}

impl<SPI, DC, RST, PinErr> DisplayInterface for Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.select(BusMode::Command).map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.select(BusMode::Data).map_err(InterfaceError::Pin)?;
        self.spi.write(data).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_ASSERT_MS);
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_RELEASE_MS);
        Ok(())
    }
}
