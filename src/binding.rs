//! Two-way reconciliation between a host's color value and the wheel's HSL.
//!
//! Hosts push values in through explicit setters and read the current state
//! back through getters. Every setter returns the new `Hsl` when the wheel
//! needs a redraw and `None` when the input was rejected or changed nothing.

use floem::kurbo::Point;

use crate::color::{Color, Hsl};
use crate::math;
use crate::wheel::{HitRegion, WheelEngine};

/// The forms a host may hand the wheel as its value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum WheelValue {
    /// `0xRRGGBB`; higher bits are ignored. Deserializing accepts any number,
    /// truncated and wrapped to 32 bits.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_packed"))]
    Packed(u32),
    /// `#RRGGBB`.
    Hex(String),
    Hsl(Hsl),
}

/// Truncate toward zero and wrap into `u32`. Non-finite numbers become 0.
#[cfg(feature = "serde")]
fn packed_from_number(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    value.trunc().rem_euclid(4_294_967_296.0) as u32
}

#[cfg(feature = "serde")]
fn deserialize_packed<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    <f64 as serde::Deserialize>::deserialize(deserializer).map(packed_from_number)
}

impl From<Color> for WheelValue {
    fn from(color: Color) -> Self {
        WheelValue::Packed(color.packed())
    }
}

impl From<Hsl> for WheelValue {
    fn from(hsl: Hsl) -> Self {
        WheelValue::Hsl(hsl)
    }
}

impl From<&str> for WheelValue {
    fn from(text: &str) -> Self {
        WheelValue::Hex(text.to_string())
    }
}

/// Host-side state of one wheel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorBinding {
    hsl: Option<Hsl>,
}

impl ColorBinding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hsl(hsl: Hsl) -> Self {
        Self { hsl: Some(hsl) }
    }

    /// Current HSL, if a value has been set.
    pub fn hsl(&self) -> Option<Hsl> {
        self.hsl
    }

    pub fn color(&self) -> Option<Color> {
        self.hsl.map(|hsl| hsl.to_color())
    }

    /// Current value in its canonical `#rrggbb` form.
    pub fn value(&self) -> Option<String> {
        self.color().map(Color::stringify)
    }

    /// Adopt an external value.
    ///
    /// An `Hsl` is taken as-is. A packed or hex color only replaces the
    /// current HSL when that HSL does not already produce the same color, so
    /// the hue of grays and sub-8-bit precision survive echoes of our own
    /// value. Malformed hex leaves the state untouched.
    pub fn set_value(&mut self, value: WheelValue) -> Option<Hsl> {
        let color = match value {
            WheelValue::Hsl(hsl) => {
                self.hsl = Some(hsl);
                return self.hsl;
            }
            WheelValue::Packed(packed) => Color::from_packed(packed),
            WheelValue::Hex(text) => match Color::parse(&text) {
                Ok(color) => color,
                Err(err) => {
                    tracing::debug!(%err, "ignoring wheel value");
                    return None;
                }
            },
        };
        if self.color() == Some(color) {
            return None;
        }
        self.hsl = Some(color.to_hsl());
        self.hsl
    }

    /// Adopt individual components. Ignored if any of them is NaN; otherwise
    /// the hue is normalized and saturation/lightness clamped.
    pub fn set_components(&mut self, hue: f64, saturation: f64, lightness: f64) -> Option<Hsl> {
        if hue.is_nan() || saturation.is_nan() || lightness.is_nan() {
            return None;
        }
        let hsl = Hsl::new(
            math::normalize_hue(hue),
            math::clamp_value(saturation),
            math::clamp_value(lightness),
        );
        self.hsl = Some(hsl);
        self.hsl
    }

    /// Apply a press or drag through `engine`. Does nothing before a value
    /// has been set or when `region` is [`HitRegion::None`].
    pub fn apply_pointer(
        &mut self,
        engine: &WheelEngine,
        region: HitRegion,
        point: Point,
    ) -> Option<Hsl> {
        if region == HitRegion::None {
            return None;
        }
        let current = self.hsl?;
        let updated = engine.down(region, &current, point);
        self.hsl = Some(updated);
        self.hsl
    }
}
