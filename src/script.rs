//! Init script steps and validation
//!
//! The ST7735 is brought from reset to a displayable configuration by a
//! fixed, ordered sequence of commands, parameter bytes, and hardware-
//! mandated delays. The sequence is data, not code: a flat list of
//! [`ConfigStep`] values walked once, in order, by the display driver.
//!
//! There are no loops or conditionals in the script language. A `Command`
//! step opens a controller register that the following `Data` steps belong
//! to; that grouping is a contract on the script's authoring, not checked
//! at runtime.
//!
//! ## Example
//!
//! ```
//! use st7735::script::{validate, ConfigStep};
//!
//! let script = [
//!     ConfigStep::Start,
//!     ConfigStep::Command(0x01),
//!     ConfigStep::Delay(150),
//!     ConfigStep::End,
//! ];
//! assert!(validate(&script).is_ok());
//! ```

use crate::command::{
    COLMOD, DISPON, FRMCTR1, FRMCTR2, FRMCTR3, GMCTRN1, GMCTRP1, INVCTR, INVOFF, MADCTL, NORON,
    PWCTR1, PWCTR2, PWCTR3, PWCTR4, PWCTR5, SLPOUT, SWRESET, VMCTR1,
};

/// A single step of an init script
///
/// A closed sum type; scripts are ordered slices of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigStep {
    /// Marks the beginning of a script; must be the first step
    Start,
    /// Send an opcode byte in command framing
    Command(u8),
    /// Send an operand byte in data framing
    Data(u8),
    /// Block the caller for at least this many milliseconds
    ///
    /// Used to satisfy controller power-up timing. The values are
    /// hardware-mandated minimums, not tunable.
    Delay(u32),
    /// Terminates the walk; any steps after it are unreachable
    End,
}

/// Structural script errors, detectable before any hardware access
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptError {
    /// The script does not begin with [`ConfigStep::Start`]
    MissingStart,
    /// The script contains no [`ConfigStep::End`]
    MissingEnd,
}

impl core::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingStart => write!(f, "Script does not begin with Start"),
            Self::MissingEnd => write!(f, "Script has no End step"),
        }
    }
}

impl core::error::Error for ScriptError {}

/// Validate a script's structure
///
/// Checks that the script begins with exactly one [`ConfigStep::Start`]
/// and contains an [`ConfigStep::End`]. For the hardcoded init script this
/// can only fail at authoring time, so the driver treats a failure here as
/// fatal.
///
/// # Errors
///
/// Returns [`ScriptError::MissingStart`] or [`ScriptError::MissingEnd`].
pub fn validate(script: &[ConfigStep]) -> Result<(), ScriptError> {
    if script.first() != Some(&ConfigStep::Start) {
        return Err(ScriptError::MissingStart);
    }
    if !script.contains(&ConfigStep::End) {
        return Err(ScriptError::MissingEnd);
    }
    Ok(())
}

/// Number of steps in the canonical init script
pub const INIT_SCRIPT_LEN: usize = 83;

/// Build the canonical ST7735 init script
///
/// The sequence and parameter values come from the ST7735 datasheet's
/// application notes: software reset, sleep out, frame rate and inversion
/// control, the power control chain, VCOM, memory access control, 16-bit
/// pixel format, and the gamma tables, ending with display on and normal
/// mode.
///
/// `madctl` is the panel-variant Memory Access Control byte; see
/// [`ColorOrder::madctl`](crate::config::ColorOrder::madctl).
pub fn init_script(madctl: u8) -> [ConfigStep; INIT_SCRIPT_LEN] {
    use ConfigStep::{Command, Data, Delay, End, Start};
    [
        Start,
        Command(SWRESET),
        Delay(150),
        Command(SLPOUT),
        Delay(500),
        // Frame rate: fosc / ((RTN + 20) * (LINE + FP + BP))
        Command(FRMCTR1),
        Data(0x01),
        Data(0x2C),
        Data(0x2D),
        Command(FRMCTR2),
        Data(0x01),
        Data(0x2C),
        Data(0x2D),
        Command(FRMCTR3),
        Data(0x01),
        Data(0x2C),
        Data(0x2D),
        Data(0x01),
        Data(0x2C),
        Data(0x2D),
        Command(INVCTR),
        Data(0x07),
        Command(PWCTR1),
        Data(0xA2),
        Data(0x02),
        Data(0x84),
        Command(PWCTR2),
        Data(0xC5),
        Command(PWCTR3),
        Data(0x0A),
        Data(0x00),
        Command(PWCTR4),
        Data(0x8A),
        Data(0x2A),
        Command(PWCTR5),
        Data(0x8A),
        Data(0xEE),
        Command(VMCTR1),
        Data(0x0E),
        Command(INVOFF),
        Command(MADCTL),
        Data(madctl),
        // 16-bit RGB565
        Command(COLMOD),
        Data(0x05),
        Command(GMCTRP1),
        Data(0x02),
        Data(0x1C),
        Data(0x07),
        Data(0x12),
        Data(0x37),
        Data(0x32),
        Data(0x29),
        Data(0x2D),
        Data(0x29),
        Data(0x25),
        Data(0x2B),
        Data(0x39),
        Data(0x00),
        Data(0x01),
        Data(0x03),
        Data(0x10),
        Command(GMCTRN1),
        Data(0x03),
        Data(0x1D),
        Data(0x07),
        Data(0x06),
        Data(0x2E),
        Data(0x2C),
        Data(0x29),
        Data(0x2D),
        Data(0x2E),
        Data(0x2E),
        Data(0x37),
        Data(0x3F),
        Data(0x00),
        Data(0x00),
        Data(0x02),
        Data(0x10),
        Command(DISPON),
        Delay(100),
        Command(NORON),
        Delay(10),
        End,
    ]
}
