//! Styling for the ring: colors and the slice palette.
//!
//! Dark surface, neon slices, one accent per slice. Palettes are data,
//! not code: config files spell colors as `"#RRGGBB"` or `"#RRGGBBAA"`.

use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Neon green (terminal style).
    pub const NEON_GREEN: Self = Self::rgba(0.2, 1.0, 0.3, 1.0);
    /// Neon cyan.
    pub const NEON_CYAN: Self = Self::rgba(0.2, 0.9, 1.0, 1.0);
    /// Neon pink.
    pub const NEON_PINK: Self = Self::rgba(1.0, 0.2, 0.6, 1.0);
    /// Warning orange.
    pub const WARNING: Self = Self::rgba(1.0, 0.6, 0.1, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from RGB values (0-1) with full alpha.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates a color from hex value (0xRRGGBBAA).
    #[must_use]
    pub const fn hex(hex: u32) -> Self {
        let r = ((hex >> 24) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let b = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let a = (hex & 0xFF) as f32 / 255.0;
        Self::rgba(r, g, b, a)
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Linearly interpolates between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::rgba(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    /// Converts to array format.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Errors from parsing a color string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Wrong number of hex digits after the optional `#`.
    #[error("expected 6 or 8 hex digits, got {0}")]
    Length(usize),
    /// A character was not a hex digit.
    #[error("invalid hex digit in color string")]
    Digit,
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parses `"#RRGGBB"` or `"#RRGGBBAA"` (leading `#` optional).
    /// Six digits imply full alpha.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let digits = raw.strip_prefix('#').unwrap_or(raw);

        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::Length(digits.len()));
        }
        // from_str_radix tolerates a leading sign; a color is hex digits
        // only, so a stray `+` must not shift the channels.
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::Digit);
        }

        let value = u32::from_str_radix(digits, 16).map_err(|_| ColorParseError::Digit)?;

        if digits.len() == 6 {
            Ok(Self::hex((value << 8) | 0xFF))
        } else {
            Ok(Self::hex(value))
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Colors for one ring chart.
///
/// `slices` is index-matched to the value series. A series longer than
/// the palette does not fail; the widget synthesizes stable extras (see
/// [`crate::fallback::FallbackColors`]).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    /// Slice colors, in series order.
    pub slices: Vec<Color>,
    /// Color of the trailing unfilled-remainder slice.
    pub divider: Color,
    /// Center label color.
    pub text: Color,
}

impl Palette {
    /// Neon terminal palette. The house default.
    #[must_use]
    pub fn neon() -> Self {
        Self {
            slices: vec![
                Color::NEON_GREEN,
                Color::NEON_CYAN,
                Color::NEON_PINK,
                Color::WARNING,
            ],
            divider: Color::rgb(0.15, 0.2, 0.15).with_alpha(0.8),
            text: Color::rgba(0.9, 0.9, 0.9, 1.0),
        }
    }

    /// Returns the configured color for a slice, if the palette reaches
    /// that far.
    #[must_use]
    pub fn slice(&self, index: usize) -> Option<Color> {
        self.slices.get(index).copied()
    }

    /// Number of configured slice colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// True if no slice colors are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::neon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        let color = Color::hex(0xFF0000FF);
        assert!((color.r - 1.0).abs() < 0.01);
        assert!((color.g - 0.0).abs() < 0.01);
        assert!((color.b - 0.0).abs() < 0.01);
        assert!((color.a - 1.0).abs() < 0.01);
        assert_eq!(Color::WHITE.to_array(), [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_color_lerp() {
        let mid = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert!((mid.r - 0.5).abs() < 0.01);
        assert!((mid.g - 0.5).abs() < 0.01);
        assert!((mid.b - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_parse_six_digits_implies_opaque() {
        let color: Color = "#33FF4D".parse().expect("valid color");

        assert!((color.a - 1.0).abs() < 0.01);
        assert_eq!("FFFFFF".parse::<Color>(), Ok(Color::WHITE));
    }

    #[test]
    fn test_parse_eight_digits_carries_alpha() {
        let color: Color = "#00000080".parse().expect("valid color");

        assert_eq!(Color::rgb(0.0, 0.0, 0.0), Color::BLACK);
        assert!((color.a - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("#FFF".parse::<Color>(), Err(ColorParseError::Length(3)));
        assert_eq!("#GGGGGG".parse::<Color>(), Err(ColorParseError::Digit));
        assert_eq!("".parse::<Color>(), Err(ColorParseError::Length(0)));
        // Six chars, but a signed integer is not a color.
        assert_eq!("+3FF44".parse::<Color>(), Err(ColorParseError::Digit));
    }

    #[test]
    fn test_palette_slice_lookup() {
        let palette = Palette::neon();

        assert_eq!(palette.slice(0), Some(Color::NEON_GREEN));
        assert_eq!(palette.slice(palette.len()), None);
        assert!(!palette.is_empty());
    }
}
