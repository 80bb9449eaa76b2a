//! Wheel sizing configuration.
//!
//! The wheel is square: `size` is its diameter and `inner_size` the diameter
//! of the circle holding the tone triangle. Sizes may come from text, e.g.
//! `"240"` or `"75%"`.

use std::str::FromStr;

use floem::kurbo::Point;

use crate::color::ColorError;
use crate::constants;
use crate::wheel::WheelGeometry;

/// Diameter of the tone-triangle circle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InnerSize {
    /// Absolute diameter in pixels.
    Pixels(f64),
    /// Fraction of the wheel size (`"80%"` parses to `Fraction(0.8)`).
    Fraction(f64),
}

impl InnerSize {
    /// Resolve against the wheel size. Non-finite results fall back to the
    /// default fraction.
    pub fn resolve(self, size: f64) -> f64 {
        let inner = match self {
            InnerSize::Pixels(px) => px,
            InnerSize::Fraction(f) => size * f,
        };
        if inner.is_finite() {
            inner
        } else {
            size * constants::DEFAULT_INNER_FRACTION
        }
    }
}

impl Default for InnerSize {
    fn default() -> Self {
        InnerSize::Fraction(constants::DEFAULT_INNER_FRACTION)
    }
}

impl FromStr for InnerSize {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ColorError::InvalidSize(s.to_string());
        match trimmed.strip_suffix('%') {
            Some(pct) => pct
                .trim_end()
                .parse::<f64>()
                .map(|p| InnerSize::Fraction(p / 100.0))
                .map_err(|_| invalid()),
            None => trimmed
                .parse::<f64>()
                .map(InnerSize::Pixels)
                .map_err(|_| invalid()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WheelConfig {
    /// Wheel diameter in pixels.
    pub size: f64,
    pub inner_size: InnerSize,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            size: constants::DEFAULT_SIZE,
            inner_size: InnerSize::default(),
        }
    }
}

impl WheelConfig {
    pub fn new(size: f64, inner_size: InnerSize) -> Self {
        Self { size, inner_size }
    }

    /// Build from text sizes, as accepted from markup or settings files.
    pub fn parse(size: &str, inner_size: Option<&str>) -> Result<Self, ColorError> {
        let size = size
            .trim()
            .parse::<f64>()
            .map_err(|_| ColorError::InvalidSize(size.to_string()))?;
        let inner_size = inner_size
            .map(str::parse::<InnerSize>)
            .transpose()?
            .unwrap_or_default();
        Ok(Self { size, inner_size })
    }

    /// Wheel diameter, with non-finite or negative sizes replaced by the default.
    pub fn resolved_size(&self) -> f64 {
        if self.size.is_finite() && self.size >= 0.0 {
            self.size
        } else {
            tracing::debug!(size = self.size, "unusable wheel size, using default");
            constants::DEFAULT_SIZE
        }
    }

    /// Pixel geometry for a canvas of `resolved_size()` pixels. Radii are
    /// truncated to whole pixels and the wheel is centered in the canvas.
    pub fn geometry(&self) -> WheelGeometry {
        let size = self.resolved_size();
        let radius = (size / 2.0).trunc();
        let inner_radius = (self.inner_size.resolve(size) / 2.0).trunc();
        WheelGeometry::new(Point::new(radius, radius), radius, inner_radius)
    }
}
