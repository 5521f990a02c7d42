//! RGB565 color type
//!
//! The ST7735 is driven in 16-bit color mode (COLMOD = 0x05), where each
//! pixel is a packed 5-6-5 RGB value transmitted high byte first.
//!
//! ## Example
//!
//! ```
//! use st7735::Color;
//!
//! let c = Color::from_rgb(0xFF, 0x00, 0x00);
//! assert_eq!(c, Color::RED);
//! assert_eq!(c.to_be_bytes(), [0xF8, 0x00]);
//!
//! // Raw packed values work too
//! let teal = Color::new(0x0410);
//! assert_eq!(teal.raw(), 0x0410);
//! ```

/// A packed 16-bit RGB565 color
///
/// Layout: `rrrrrggg gggbbbbb` (red in the top 5 bits, green in the middle
/// 6, blue in the bottom 5). On the wire the high byte goes first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color(u16);

impl Color {
    /// Black (0x0000)
    pub const BLACK: Self = Self(0x0000);
    /// White (0xFFFF)
    pub const WHITE: Self = Self(0xFFFF);
    /// Red (0xF800)
    pub const RED: Self = Self(0xF800);
    /// Green (0x07E0)
    pub const GREEN: Self = Self(0x07E0);
    /// Blue (0x001F)
    pub const BLUE: Self = Self(0x001F);

    /// Create a color from a raw packed RGB565 value
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Create a color from 8-bit RGB components
    ///
    /// Components are truncated to 5-6-5 precision.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r = (r as u16 >> 3) << 11;
        let g = (g as u16 >> 2) << 5;
        let b = b as u16 >> 3;
        Self(r | g | b)
    }

    /// Get the raw packed RGB565 value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Get the two bytes transmitted for this pixel, high byte first
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb_primaries() {
        assert_eq!(Color::from_rgb(0xFF, 0x00, 0x00), Color::RED);
        assert_eq!(Color::from_rgb(0x00, 0xFF, 0x00), Color::GREEN);
        assert_eq!(Color::from_rgb(0x00, 0x00, 0xFF), Color::BLUE);
        assert_eq!(Color::from_rgb(0xFF, 0xFF, 0xFF), Color::WHITE);
        assert_eq!(Color::from_rgb(0x00, 0x00, 0x00), Color::BLACK);
    }

    #[test]
    fn test_from_rgb_truncates_precision() {
        // Low bits below 5-6-5 precision are dropped
        assert_eq!(Color::from_rgb(0x07, 0x03, 0x07), Color::BLACK);
    }

    #[test]
    fn test_wire_order_is_high_byte_first() {
        assert_eq!(Color::new(0x1234).to_be_bytes(), [0x12, 0x34]);
        assert_eq!(Color::GREEN.to_be_bytes(), [0x07, 0xE0]);
    }

    #[test]
    fn test_u16_round_trip() {
        let c: Color = 0xA5A5.into();
        let raw: u16 = c.into();
        assert_eq!(raw, 0xA5A5);
    }
}
