//! Sizing, color, and styling constants for the wheel and editor.

/// Default wheel diameter in pixels.
pub const DEFAULT_SIZE: f64 = 200.0;

/// Default tone-triangle circle diameter, as a fraction of the wheel size.
pub const DEFAULT_INNER_FRACTION: f64 = 0.8;

/// Tone selection marker radius
pub const MARKER_RADIUS: f64 = 3.5;

/// Stroke width of both selection markers
pub const MARKER_WIDTH: f64 = 2.0;

/// Segments used to flatten one full turn of an arc into lines
pub const ARC_STEPS_PER_TURN: f64 = 64.0;

/// Border radius for the swatch and inputs
pub const RADIUS: f32 = 4.0;

/// Gap between editor elements
pub const GAP: f32 = 8.0;

/// Padding around the whole editor
pub const PADDING: f32 = 8.0;

/// Numeric input field width
pub const INPUT_WIDTH: f32 = 28.0;

/// Hex input field width
pub const HEX_INPUT_WIDTH: f32 = 64.0;

/// Input font size
pub const INPUT_FONT: f32 = 11.0;

/// Label font size
pub const LABEL_FONT: f32 = 10.0;
