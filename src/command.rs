//! ST7735 command definitions
//!
//! This module defines the command bytes used to control the ST7735
//! TFT-LCD display controller. Commands are sent over SPI with the DC (A0)
//! pin low for commands and high for data.
//!
//! ## Command Structure
//!
//! All commands follow the pattern:
//! 1. Assert CS (Chip Select)
//! 2. Set DC low (command mode)
//! 3. Send command byte
//! 4. Set DC high (data mode)
//! 5. Send parameter bytes (if any)
//! 6. Deassert CS
//!
//! ## Example
//!
//! ```rust,no_run
//! use st7735::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//! // Software reset
//! let _ = interface.send_command(command::SWRESET);
//!
//! // Select 16-bit pixel format
//! let _ = interface.send_command(command::COLMOD);
//! let _ = interface.send_data(&[0x05]);
//! ```

// System commands

/// No operation command (0x00)
///
/// Does nothing; useful as a terminator after a RAM write burst.
pub const NOP: u8 = 0x00;

/// Software reset command (0x01)
///
/// Resets the controller registers to default state. The controller
/// requires at least 120ms before the next command.
pub const SWRESET: u8 = 0x01;

/// Sleep out command (0x11)
///
/// Leaves the minimum-power sleep mode. The controller requires up to
/// 500ms for the booster and oscillator to stabilize.
pub const SLPOUT: u8 = 0x11;

/// Normal display mode on command (0x13)
pub const NORON: u8 = 0x13;

/// Display inversion off command (0x20)
pub const INVOFF: u8 = 0x20;

/// Display on command (0x29)
///
/// Enables output from the frame memory to the panel.
pub const DISPON: u8 = 0x29;

// Addressing and memory commands

/// Column address set command (0x2A)
///
/// Sets the column range of the addressing window.
/// Requires 4 bytes: [XS_MSB, XS_LSB, XE_MSB, XE_LSB], inclusive bounds.
pub const CASET: u8 = 0x2A;

/// Row address set command (0x2B)
///
/// Sets the row range of the addressing window.
/// Requires 4 bytes: [YS_MSB, YS_LSB, YE_MSB, YE_LSB], inclusive bounds.
pub const RASET: u8 = 0x2B;

/// Memory write command (0x2C)
///
/// Starts a pixel data burst into the addressing window. Data bytes are
/// consumed two per pixel (RGB565, high byte first), row-major, until
/// another command ends the burst.
pub const RAMWR: u8 = 0x2C;

/// Memory access control command (0x36)
///
/// Sets scan direction and RGB/BGR channel order.
/// Requires 1 byte: MY/MX/MV/ML scan bits plus the RGB bit (0x08).
pub const MADCTL: u8 = 0x36;

/// Interface pixel format command (0x3A)
///
/// Requires 1 byte: 0x03 = 12-bit, 0x05 = 16-bit, 0x06 = 18-bit.
pub const COLMOD: u8 = 0x3A;

// Panel configuration commands

/// Frame rate control, normal mode command (0xB1)
///
/// Requires 3 bytes: [RTNA, FPA, BPA].
pub const FRMCTR1: u8 = 0xB1;

/// Frame rate control, idle mode command (0xB2)
///
/// Requires 3 bytes: [RTNB, FPB, BPB].
pub const FRMCTR2: u8 = 0xB2;

/// Frame rate control, partial mode command (0xB3)
///
/// Requires 6 bytes: dot inversion then line inversion settings.
pub const FRMCTR3: u8 = 0xB3;

/// Display inversion control command (0xB4)
///
/// Requires 1 byte selecting dot/line inversion per display mode.
pub const INVCTR: u8 = 0xB4;

// Power commands

/// Power control 1 command (0xC0)
///
/// Sets GVDD and AVDD voltages. Requires 3 bytes.
pub const PWCTR1: u8 = 0xC0;

/// Power control 2 command (0xC1)
///
/// Sets VGH/VGL supply levels. Requires 1 byte.
pub const PWCTR2: u8 = 0xC1;

/// Power control 3 command (0xC2)
///
/// Op-amp current and boost cycles in normal mode. Requires 2 bytes.
pub const PWCTR3: u8 = 0xC2;

/// Power control 4 command (0xC3)
///
/// Op-amp current and boost cycles in idle mode. Requires 2 bytes.
pub const PWCTR4: u8 = 0xC3;

/// Power control 5 command (0xC4)
///
/// Op-amp current and boost cycles in partial mode. Requires 2 bytes.
pub const PWCTR5: u8 = 0xC4;

/// VCOM control 1 command (0xC5)
///
/// Sets the VCOM voltage level. Requires 1 byte.
pub const VMCTR1: u8 = 0xC5;

// Gamma commands

/// Positive gamma correction command (0xE0)
///
/// Requires 16 bytes of gamma curve samples.
pub const GMCTRP1: u8 = 0xE0;

/// Negative gamma correction command (0xE1)
///
/// Requires 16 bytes of gamma curve samples.
pub const GMCTRN1: u8 = 0xE1;
