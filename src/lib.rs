//! # floem-hsl-wheel
//!
//! An HSL color wheel for [Floem](https://github.com/lapce/floem): a hue ring
//! around a saturation/lightness triangle.
//!
//! The geometry lives in [`WheelEngine`], which knows nothing about Floem. It
//! turns an [`Hsl`] into a list of [`DrawCommand`]s and turns pointer
//! positions back into an updated [`Hsl`], so it can drive any 2D surface.
//! [`hsl_wheel`] wraps it in a ready-made Floem editor panel.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_hsl_wheel::{hsl_wheel, Color};
//!
//! let hsl = RwSignal::new(Color::parse("#3b82f6").unwrap().to_hsl());
//! // Use `hsl_wheel(hsl)` in your Floem view tree.
//! ```
//!
//! Without Floem:
//!
//! ```rust
//! use floem::kurbo::Point;
//! use floem_hsl_wheel::{HitRegion, Hsl, WheelConfig, WheelEngine};
//!
//! let engine = WheelEngine::new(WheelConfig::default().geometry());
//! let hsl = Hsl::new(0.0, 1.0, 0.5);
//! let commands = engine.draw(&hsl);
//! assert!(!commands.is_empty());
//!
//! let press = Point::new(100.0, 100.0);
//! let region = engine.hit_test(&hsl, press);
//! assert_eq!(region, HitRegion::Tone);
//! let picked = engine.down(region, &hsl, press);
//! assert!(picked.saturation < 1.0);
//! ```

mod binding;
mod color;
mod color_editor;
mod color_wheel;
mod config;
mod constants;
mod draw;
mod inputs;
mod math;
mod wheel;

pub use binding::{ColorBinding, WheelValue};
pub use color::{Color, ColorError, Hsl};
pub use color_wheel::{color_wheel, ColorWheel};
pub use config::{InnerSize, WheelConfig};
pub use draw::{DrawCommand, GradientStop, LinearGradient, Path, PathEl};
pub use math::{clamp_value, normalize_hue};
pub use wheel::{
    hue_angle, HitRegion, WheelEngine, WheelGeometry, SEGMENTS, TONE_MAX_X, TONE_MAX_Y, ZERO_ANGLE,
};

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the color wheel editor with the default 200px wheel.
///
/// The editor reads from and writes to `hsl`. External changes to the
/// signal are reflected in the UI, and user edits update the signal.
pub fn hsl_wheel(hsl: RwSignal<Hsl>) -> impl IntoView {
    hsl_wheel_with_config(hsl, RwSignal::new(WheelConfig::default()))
}

/// Like [`hsl_wheel`], with the wheel sized by `config`.
pub fn hsl_wheel_with_config(hsl: RwSignal<Hsl>, config: RwSignal<WheelConfig>) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    color_editor::color_editor(hsl, config)
}
