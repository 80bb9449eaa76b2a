//! Color math — NaN-safe normalization and HSL ⇄ RGB channel arithmetic.
//! Channels are unit-interval f64, hue is in degrees.

/// Clamp `value` to 0.0–1.0. NaN maps to 0.0.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn clamp_value(value: f64) -> f64 {
    // Negated comparisons so NaN falls into the first branch.
    if !(value > 0.0) {
        return 0.0;
    }
    if !(value < 1.0) {
        return 1.0;
    }
    value
}

/// Wrap a hue in degrees into `[0, 360)`. Non-finite input maps to 0.0.
pub fn normalize_hue(hue: f64) -> f64 {
    if !hue.is_finite() {
        return 0.0;
    }
    let wrapped = if hue >= 0.0 {
        hue % 360.0
    } else {
        hue - (hue / 360.0).floor() * 360.0
    };
    // Tiny negative hues round up to exactly 360.0.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Hue in degrees for a non-gray color. `max` and `chroma` must come from
/// the same `(r, g, b)` and `chroma` must be non-zero.
fn hue_from_channels(r: f64, g: f64, b: f64, max: f64, chroma: f64) -> f64 {
    let h = if max == r {
        let h = (g - b) / chroma;
        if h < 0.0 {
            h + 6.0
        } else {
            h
        }
    } else if max == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };
    h * 60.0
}

/// RGB → hue in degrees. Grays have hue 0.0.
pub(crate) fn rgb_hue(r: f64, g: f64, b: f64) -> f64 {
    let max = r.max(g).max(b);
    let chroma = max - r.min(g).min(b);
    if chroma == 0.0 {
        return 0.0;
    }
    hue_from_channels(r, g, b, max, chroma)
}

/// RGB → HSL saturation. Grays have saturation 0.0.
pub(crate) fn rgb_saturation(r: f64, g: f64, b: f64) -> f64 {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;
    if chroma == 0.0 {
        return 0.0;
    }
    chroma / (1.0 - (min + max - 1.0).abs())
}

/// RGB → HSL lightness.
pub(crate) fn rgb_lightness(r: f64, g: f64, b: f64) -> f64 {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    (min + max) / 2.0
}

/// RGB → HSL. Returns (hue in degrees, saturation, lightness).
pub(crate) fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;
    let l = (min + max) / 2.0;
    // Hue and saturation are undefined for grays; use 0.0.
    if chroma == 0.0 {
        return (0.0, 0.0, l);
    }
    let h = hue_from_channels(r, g, b, max, chroma);
    let s = chroma / (1.0 - (min + max - 1.0).abs());
    (h, s, l)
}

/// HSL → RGB. Hue is normalized and saturation/lightness clamped first.
pub(crate) fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (f64, f64, f64) {
    let h = normalize_hue(hue) / 60.0;
    let s = clamp_value(saturation);
    let l = clamp_value(lightness);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    // Rounding can push m slightly negative.
    let m = (l - c / 2.0).max(0.0);
    (r + m, g + m, b + m)
}
