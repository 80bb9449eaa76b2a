//! `Color` and `Hsl` — the public color representations for the wheel.
//!
//! `Color` is a packed 24-bit sRGB value with a canonical `#rrggbb` text
//! form. `Hsl` is the host-owned triple the wheel reads and updates.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::math;

/// Errors raised at the text boundary of the color model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The string is not of the form `#RRGGBB`.
    #[error("invalid color format {0:?}, expected #RRGGBB")]
    InvalidFormat(String),
    /// A wheel size string is neither a number nor a percentage.
    #[error("invalid size {0:?}")]
    InvalidSize(String),
}

/// An sRGB color packed as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u32", into = "u32"))]
pub struct Color(u32);

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self::from_packed(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xffffff);

    /// Create from a packed integer. Bits above the low 24 are dropped.
    pub const fn from_packed(value: u32) -> Self {
        Self(value & 0xff_ffff)
    }

    /// The packed `0xRRGGBB` value.
    pub const fn packed(self) -> u32 {
        self.0
    }

    /// Parse `#RRGGBB` (either hex case). Nothing else is accepted.
    pub fn parse(text: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidFormat(text.to_string());
        let digits = text.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        u32::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| invalid())
    }

    /// Format as `#rrggbb`, lowercase and zero-padded.
    pub fn stringify(self) -> String {
        format!("#{:06x}", self.0)
    }

    /// Create from unit-interval channels. Each channel is clamped (NaN → 0)
    /// and rounded to the nearest 8-bit step.
    pub fn from_rgb(r: f64, g: f64, b: f64) -> Self {
        let quantize = |v: f64| (math::clamp_value(v) * 255.0).round() as u32;
        Self((quantize(r) << 16) | (quantize(g) << 8) | quantize(b))
    }

    /// Create from HSL. Hue is normalized, saturation/lightness clamped.
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let (r, g, b) = math::hsl_to_rgb(hue, saturation, lightness);
        Self::from_rgb(r, g, b)
    }

    /// Red channel (0.0–1.0).
    pub fn red(self) -> f64 {
        ((self.0 >> 16) & 0xff) as f64 / 255.0
    }
    /// Green channel (0.0–1.0).
    pub fn green(self) -> f64 {
        ((self.0 >> 8) & 0xff) as f64 / 255.0
    }
    /// Blue channel (0.0–1.0).
    pub fn blue(self) -> f64 {
        (self.0 & 0xff) as f64 / 255.0
    }

    /// Convert to 0–255 RGB tuple.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }

    pub fn to_hsl(self) -> Hsl {
        let (h, s, l) = math::rgb_to_hsl(self.red(), self.green(), self.blue());
        Hsl::new(h, s, l)
    }

    /// Hue in `[0, 360)` degrees; 0.0 for grays.
    pub fn hue(self) -> f64 {
        math::rgb_hue(self.red(), self.green(), self.blue())
    }

    /// HSL saturation; 0.0 for grays.
    pub fn saturation(self) -> f64 {
        math::rgb_saturation(self.red(), self.green(), self.blue())
    }

    pub fn lightness(self) -> f64 {
        math::rgb_lightness(self.red(), self.green(), self.blue())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Hue (degrees), saturation and lightness.
///
/// Fields accept any value; readers normalize the hue into `[0, 360)` and
/// clamp saturation/lightness into `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Copy with the hue wrapped and saturation/lightness clamped.
    pub fn normalized(&self) -> Self {
        Self {
            hue: math::normalize_hue(self.hue),
            saturation: math::clamp_value(self.saturation),
            lightness: math::clamp_value(self.lightness),
        }
    }

    pub fn to_color(&self) -> Color {
        Color::from_hsl(self.hue, self.saturation, self.lightness)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({:.0}, {:.3}, {:.3})",
            self.hue, self.saturation, self.lightness
        )
    }
}
