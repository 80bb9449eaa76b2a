//! Hue ring + tone triangle geometry.
//!
//! Angle around the ring maps to hue, with hue 0 pointing up and hues
//! increasing clockwise on screen. Inside the ring an equilateral triangle
//! maps position to saturation/lightness: one corner is the pure hue, the
//! other two are black and white.
//!
//! The tone triangle is handled in a normalized local frame where the hue
//! corner sits at `(0, -1)`, the black corner at `(TONE_MAX_X, TONE_MAX_Y)`
//! and the white corner at `(-TONE_MAX_X, TONE_MAX_Y)`. In that frame
//! lightness is linear in `x` and saturation falls off toward the
//! black–white edge, so both directions of the mapping are closed-form.

use std::f64::consts::{PI, TAU};

use floem::kurbo::Point;

use crate::color::{Color, Hsl};
use crate::draw::{DrawCommand, GradientStop, LinearGradient, Path};
use crate::{constants, math};

/// Number of linear-gradient segments approximating the hue ring.
/// A multiple of 6 puts primaries and secondaries on segment boundaries.
pub const SEGMENTS: usize = 12;

/// Screen angle of hue 0 (straight up).
pub const ZERO_ANGLE: f64 = -PI / 2.0;

/// Half-width of the normalized tone triangle.
pub const TONE_MAX_X: f64 = 0.866_025_403_784_438_6; // sqrt(0.75)

/// Distance from the center to the black–white edge, normalized.
pub const TONE_MAX_Y: f64 = 0.5;

/// Per-frame wheel placement, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    center: Point,
    radius: f64,
    inner_radius: f64,
}

impl WheelGeometry {
    /// Radii are forced into `0 <= inner_radius <= radius`; non-finite
    /// radii become 0.
    pub fn new(center: Point, radius: f64, inner_radius: f64) -> Self {
        let finite = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
        let radius = finite(radius);
        let inner_radius = finite(inner_radius).min(radius);
        Self {
            center,
            radius,
            inner_radius,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// Point at `angle` (radians) and distance `radius` from the center.
    pub fn polar(&self, angle: f64, radius: f64) -> Point {
        Point::new(
            self.center.x + angle.cos() * radius,
            self.center.y + angle.sin() * radius,
        )
    }
}

/// Which part of the wheel a pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HitRegion {
    #[default]
    None,
    Hue,
    Tone,
}

/// Screen angle of a hue in degrees.
pub fn hue_angle(hue: f64) -> f64 {
    hue * PI / 180.0 + ZERO_ANGLE
}

/// Fully saturated, half-lightness color for `hue`.
fn pure_hue(hue: f64) -> Color {
    Color::from_hsl(hue, 1.0, 0.5)
}

/// Renders and hit-tests a wheel for one geometry.
///
/// The ring gradients only depend on the geometry, so they are built once
/// here and reused by every [`WheelEngine::draw`].
#[derive(Debug, Clone)]
pub struct WheelEngine {
    geometry: WheelGeometry,
    hue_gradients: Vec<LinearGradient>,
}

impl WheelEngine {
    pub fn new(geometry: WheelGeometry) -> Self {
        tracing::debug!(
            radius = geometry.radius,
            inner_radius = geometry.inner_radius,
            "building wheel engine"
        );
        let hue_gradients = (0..SEGMENTS)
            .map(|i| {
                let (start_angle, end_angle) = Self::segment_angles(&geometry, i);
                let start_hue = i as f64 / SEGMENTS as f64 * 360.0;
                let end_hue = (i + 1) as f64 / SEGMENTS as f64 * 360.0;
                // Both ends on the inner radius so neighbours share colors.
                LinearGradient::new(
                    geometry.polar(start_angle, geometry.inner_radius),
                    geometry.polar(end_angle, geometry.inner_radius),
                )
                .with_stop(GradientStop::opaque(0.0, pure_hue(start_hue)))
                .with_stop(GradientStop::opaque(1.0, pure_hue(end_hue)))
            })
            .collect();
        Self {
            geometry,
            hue_gradients,
        }
    }

    pub fn geometry(&self) -> &WheelGeometry {
        &self.geometry
    }

    /// Angle by which each segment is extended backwards, ~1px at the inner
    /// radius, to hide anti-aliasing seams between neighbours.
    fn overdraw_angle(geometry: &WheelGeometry) -> f64 {
        if geometry.inner_radius > 0.0 {
            1f64.atan2(geometry.inner_radius)
        } else {
            0.0
        }
    }

    fn segment_angles(geometry: &WheelGeometry, index: usize) -> (f64, f64) {
        let step = TAU / SEGMENTS as f64;
        let start = ZERO_ANGLE + index as f64 * step - Self::overdraw_angle(geometry);
        let end = ZERO_ANGLE + (index + 1) as f64 * step;
        (start, end)
    }

    /// Drawing instructions for one frame, in paint order: hue ring, tone
    /// triangle, hue marker, tone marker.
    pub fn draw(&self, hsl: &Hsl) -> Vec<DrawCommand> {
        let hsl = hsl.normalized();
        let angle = hue_angle(hsl.hue);

        let mut commands = Vec::with_capacity(SEGMENTS + 4);
        self.draw_hue_ring(&mut commands);
        self.draw_tone_triangle(&mut commands, hsl.hue, angle);
        commands.push(self.hue_marker(angle));
        commands.push(self.tone_marker(&hsl));
        commands
    }

    fn draw_hue_ring(&self, commands: &mut Vec<DrawCommand>) {
        let g = &self.geometry;
        for (i, gradient) in self.hue_gradients.iter().enumerate() {
            let (start_angle, end_angle) = Self::segment_angles(g, i);
            let mut path = Path::new();
            path.arc(g.center, g.radius, start_angle, end_angle, false);
            path.arc(g.center, g.inner_radius, end_angle, start_angle, true);
            path.close();
            commands.push(DrawCommand::FillPath {
                path,
                gradient: gradient.clone(),
            });
        }
    }

    fn draw_tone_triangle(&self, commands: &mut Vec<DrawCommand>, hue: f64, angle: f64) {
        let g = &self.geometry;
        let r = g.inner_radius;
        let hue_corner = g.polar(angle, r);
        let black_corner = g.polar(angle + TAU / 3.0, r);
        let white_corner = g.polar(angle - TAU / 3.0, r);
        let gray = black_corner.midpoint(white_corner);

        let mut path = Path::new();
        path.move_to(hue_corner);
        path.line_to(black_corner);
        path.line_to(white_corner);
        path.close();

        // Lightness axis first, then saturation fading in toward the hue corner.
        let lightness = LinearGradient::new(black_corner, white_corner)
            .with_stop(GradientStop::opaque(0.0, Color::BLACK))
            .with_stop(GradientStop::opaque(1.0, Color::WHITE));
        let saturation = LinearGradient::new(gray, hue_corner)
            .with_stop(GradientStop::transparent_black(0.0))
            .with_stop(GradientStop::opaque(1.0, pure_hue(hue)));

        commands.push(DrawCommand::FillPath {
            path: path.clone(),
            gradient: lightness,
        });
        commands.push(DrawCommand::FillPath {
            path,
            gradient: saturation,
        });
    }

    fn hue_marker(&self, angle: f64) -> DrawCommand {
        let g = &self.geometry;
        DrawCommand::StrokeLine {
            from: g.polar(angle, g.inner_radius),
            to: g.polar(angle, g.radius),
            color: Color::BLACK,
            width: constants::MARKER_WIDTH,
        }
    }

    fn tone_marker(&self, hsl: &Hsl) -> DrawCommand {
        // Inverted against the triangle underneath it.
        let color = if hsl.lightness < 0.5 {
            Color::WHITE
        } else {
            Color::BLACK
        };
        DrawCommand::StrokeCircle {
            center: self.tone_position(hsl),
            radius: constants::MARKER_RADIUS,
            color,
            width: constants::MARKER_WIDTH,
        }
    }

    /// Pixel position of `(saturation, lightness)` inside the triangle for
    /// the given hue.
    pub fn tone_position(&self, hsl: &Hsl) -> Point {
        let hsl = hsl.normalized();
        let t = 2.0 * hsl.lightness - 1.0;
        let c = (1.0 - t.abs()) * hsl.saturation;
        let dx = -TONE_MAX_X * t;
        let dy = TONE_MAX_Y - c * (1.0 + TONE_MAX_Y);

        let (sr, cr) = (-hsl.hue.to_radians()).sin_cos();
        let rx = dx * cr + dy * sr;
        let ry = -dx * sr + dy * cr;

        let g = &self.geometry;
        Point::new(
            g.center.x + rx * g.inner_radius,
            g.center.y + ry * g.inner_radius,
        )
    }

    /// Inverse of [`WheelEngine::tone_position`]'s rotate-and-scale: the
    /// point in the normalized triangle frame. `None` for a zero inner radius.
    fn tone_local(&self, hue: f64, point: Point) -> Option<(f64, f64)> {
        let g = &self.geometry;
        if g.inner_radius <= 0.0 {
            return None;
        }
        let dx = point.x - g.center.x;
        let dy = point.y - g.center.y;
        let (sr, cr) = math::normalize_hue(hue).to_radians().sin_cos();
        let nx = (dx * cr + dy * sr) / g.inner_radius;
        let ny = (-dx * sr + dy * cr) / g.inner_radius;
        Some((nx, ny))
    }

    /// Classify `point` against the current frame.
    pub fn hit_test(&self, hsl: &Hsl, point: Point) -> HitRegion {
        let g = &self.geometry;
        let dx = point.x - g.center.x;
        let dy = point.y - g.center.y;
        let r2 = dx * dx + dy * dy;
        let region = if g.inner_radius * g.inner_radius <= r2 && r2 <= g.radius * g.radius {
            HitRegion::Hue
        } else {
            match self.tone_local(hsl.hue, point) {
                // Inside the triangle both implied values are in [0, 1]. Saturation
                // alone also lands in range past the black and white corners.
                Some((nx, ny)) => {
                    let (s, l) = tone_from_local(nx, ny);
                    if (0.0..=1.0).contains(&s) && (0.0..=1.0).contains(&l) {
                        HitRegion::Tone
                    } else {
                        HitRegion::None
                    }
                }
                None => HitRegion::None,
            }
        };
        tracing::trace!(x = point.x, y = point.y, ?region, "hit test");
        region
    }

    /// Apply a press or drag at `point` within `region`, returning the
    /// updated color. Tone drags outside the triangle snap onto its edge.
    pub fn down(&self, region: HitRegion, hsl: &Hsl, point: Point) -> Hsl {
        let g = &self.geometry;
        match region {
            HitRegion::None => *hsl,
            HitRegion::Hue => {
                let dx = point.x - g.center.x;
                let dy = point.y - g.center.y;
                Hsl {
                    hue: (dy.atan2(dx) - ZERO_ANGLE) * 180.0 / PI,
                    ..*hsl
                }
            }
            HitRegion::Tone => {
                let Some((nx, ny)) = self.tone_local(hsl.hue, point) else {
                    return *hsl;
                };
                let (nx, ny) = clamp_to_triangle(nx, ny);
                let (s, l) = tone_from_local(nx, ny);
                Hsl {
                    saturation: math::clamp_value(s),
                    lightness: math::clamp_value(l),
                    ..*hsl
                }
            }
        }
    }
}

/// Saturation and lightness implied by a point in the normalized frame.
/// Unclamped; corners divide by zero and yield inf/NaN.
fn tone_from_local(nx: f64, ny: f64) -> (f64, f64) {
    let t = -nx / TONE_MAX_X;
    let c = (TONE_MAX_Y - ny) / (1.0 + TONE_MAX_Y);
    let s = c / (1.0 - t.abs());
    let l = (t + 1.0) / 2.0;
    (s, l)
}

/// Pull a normalized point onto the triangle.
///
/// Past the black–white edge the point is projected onto that edge. Otherwise
/// `u` picks a point along the matching hue-side edge, and the point is moved
/// there if it lies beyond it.
fn clamp_to_triangle(mut nx: f64, mut ny: f64) -> (f64, f64) {
    let (mx, my) = (TONE_MAX_X, TONE_MAX_Y);
    if ny > my {
        ny = my;
        nx = nx.clamp(-mx, mx);
    } else {
        let u = math::clamp_value((nx.abs() * mx + (ny + 1.0) * (my + 1.0)) / 3.0);
        if ny < u * (my + 1.0) - 1.0 {
            nx = u * if nx < 0.0 { -mx } else { mx };
            ny = u * (my + 1.0) - 1.0;
        }
    }
    (nx, ny)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::PathEl;

    fn engine() -> WheelEngine {
        WheelEngine::new(WheelGeometry::new(Point::new(100.0, 100.0), 100.0, 70.0))
    }

    fn approx_eq(a: f64, b: f64, eps: f64) {
        assert!((a - b).abs() < eps, "expected {a} ~= {b}");
    }

    #[test]
    fn tone_max_x_is_sqrt_three_quarters() {
        approx_eq(TONE_MAX_X, 0.75f64.sqrt(), 1e-15);
    }

    #[test]
    fn geometry_enforces_radius_ordering() {
        let g = WheelGeometry::new(Point::ORIGIN, 50.0, 80.0);
        assert_eq!(g.inner_radius(), 50.0);
        let g = WheelGeometry::new(Point::ORIGIN, f64::NAN, -3.0);
        assert_eq!(g.radius(), 0.0);
        assert_eq!(g.inner_radius(), 0.0);
    }

    #[test]
    fn hit_test_point_above_center_in_ring_is_hue() {
        let hsl = Hsl::new(0.0, 1.0, 0.5);
        assert_eq!(engine().hit_test(&hsl, Point::new(100.0, 15.0)), HitRegion::Hue);
    }

    #[test]
    fn hit_test_mid_ring_is_hue_at_any_angle() {
        let e = engine();
        let hsl = Hsl::new(200.0, 0.3, 0.6);
        for i in 0..72 {
            let angle = i as f64 * TAU / 72.0;
            let p = e.geometry().polar(angle, 85.0);
            assert_eq!(e.hit_test(&hsl, p), HitRegion::Hue, "angle {angle}");
        }
    }

    #[test]
    fn hit_test_center_is_tone_for_any_hue() {
        let e = engine();
        for hue in [0.0, 33.0, 180.0, 359.0, -720.0, f64::NAN] {
            let hsl = Hsl::new(hue, 0.5, 0.5);
            assert_eq!(e.hit_test(&hsl, Point::new(100.0, 100.0)), HitRegion::Tone);
        }
    }

    #[test]
    fn hit_test_outside_triangle_and_ring() {
        let e = engine();
        let hsl = Hsl::new(0.0, 1.0, 0.5);
        // Inside the inner circle but beyond the black–white edge.
        assert_eq!(e.hit_test(&hsl, Point::new(100.0, 165.0)), HitRegion::None);
        assert_eq!(e.hit_test(&hsl, Point::new(300.0, 300.0)), HitRegion::None);
    }

    #[test]
    fn hit_test_rejects_points_past_the_gray_corners() {
        // Saturation alone is back in [0, 1] out here; lightness is not.
        let (s, l) = tone_from_local(2.0 * TONE_MAX_X, 1.0);
        assert!((0.0..=1.0).contains(&s));
        assert!(l < 0.0);

        let e = engine();
        let hsl = Hsl::new(0.0, 1.0, 0.5);
        assert_eq!(e.hit_test(&hsl, Point::new(200.0, 200.0)), HitRegion::None);
    }

    #[test]
    fn tone_position_places_corners() {
        let e = engine();
        let hue_corner = e.tone_position(&Hsl::new(0.0, 1.0, 0.5));
        approx_eq(hue_corner.x, 100.0, 1e-9);
        approx_eq(hue_corner.y, 30.0, 1e-9);
        let black = e.tone_position(&Hsl::new(0.0, 0.0, 0.0));
        approx_eq(black.x, 100.0 + 70.0 * TONE_MAX_X, 1e-9);
        approx_eq(black.y, 135.0, 1e-9);
        let white = e.tone_position(&Hsl::new(0.0, 0.0, 1.0));
        approx_eq(white.x, 100.0 - 70.0 * TONE_MAX_X, 1e-9);
        approx_eq(white.y, 135.0, 1e-9);
        // Hue 90 puts the hue corner at 3 o'clock.
        let right = e.tone_position(&Hsl::new(90.0, 1.0, 0.5));
        approx_eq(right.x, 170.0, 1e-9);
        approx_eq(right.y, 100.0, 1e-9);
    }

    #[test]
    fn tone_position_and_down_are_inverse() {
        let e = engine();
        for hue in [0.0, 17.0, 120.0, 245.5, 359.9] {
            for si in 1..=10 {
                for li in 1..=9 {
                    let hsl = Hsl::new(hue, si as f64 / 10.0, li as f64 / 10.0);
                    let p = e.tone_position(&hsl);
                    if si < 10 {
                        assert_eq!(e.hit_test(&hsl, p), HitRegion::Tone);
                    }
                    let back = e.down(HitRegion::Tone, &hsl, p);
                    approx_eq(back.saturation, hsl.saturation, 1e-9);
                    approx_eq(back.lightness, hsl.lightness, 1e-9);
                    assert_eq!(back.hue, hue);
                }
            }
        }
    }

    #[test]
    fn down_on_hue_uses_pointer_angle() {
        let e = engine();
        let hsl = Hsl::new(0.0, 0.4, 0.6);
        let right = e.down(HitRegion::Hue, &hsl, Point::new(185.0, 100.0));
        approx_eq(right.hue, 90.0, 1e-9);
        assert_eq!(right.saturation, 0.4);
        assert_eq!(right.lightness, 0.6);
        // Upper left comes out negative; it is normalized on read.
        let left = e.down(HitRegion::Hue, &hsl, Point::new(40.0, 40.0));
        approx_eq(left.hue, -45.0, 1e-9);
        approx_eq(math::normalize_hue(left.hue), 315.0, 1e-9);
    }

    #[test]
    fn down_on_tone_far_outside_stays_in_range() {
        let e = engine();
        for hue in [0.0, 45.0, 200.0] {
            let hsl = Hsl::new(hue, 0.5, 0.5);
            for (x, y) in [(1e4, 1e4), (-1e4, 5.0), (100.0, -1e6), (100.0, 1e6), (-3e3, -3e3)] {
                let out = e.down(HitRegion::Tone, &hsl, Point::new(x, y));
                assert!((0.0..=1.0).contains(&out.saturation), "{out:?}");
                assert!((0.0..=1.0).contains(&out.lightness), "{out:?}");
            }
        }
    }

    #[test]
    fn down_on_tone_snaps_to_edges() {
        let e = engine();
        let hsl = Hsl::new(0.0, 0.5, 0.5);
        // Straight up past the hue corner.
        let top = e.down(HitRegion::Tone, &hsl, Point::new(100.0, -1e6));
        assert_eq!((top.saturation, top.lightness), (1.0, 0.5));
        // Straight down past the black–white edge.
        let bottom = e.down(HitRegion::Tone, &hsl, Point::new(100.0, 1e6));
        assert_eq!(bottom.saturation, 0.0);
        approx_eq(bottom.lightness, 0.5, 1e-12);
        // Far left lands on the white side.
        let left = e.down(HitRegion::Tone, &hsl, Point::new(-1e4, 5.0));
        assert_eq!(left.lightness, 1.0);
    }

    #[test]
    fn down_with_no_region_is_identity() {
        let hsl = Hsl::new(12.0, 0.3, 0.7);
        assert_eq!(engine().down(HitRegion::None, &hsl, Point::ORIGIN), hsl);
    }

    #[test]
    fn zero_inner_radius_is_safe() {
        let e = WheelEngine::new(WheelGeometry::new(Point::new(10.0, 10.0), 10.0, 0.0));
        let hsl = Hsl::new(30.0, 0.5, 0.5);
        assert_eq!(e.hit_test(&hsl, Point::new(10.0, 10.0)), HitRegion::Hue);
        assert_eq!(e.hit_test(&hsl, Point::new(50.0, 50.0)), HitRegion::None);
        assert_eq!(e.down(HitRegion::Tone, &hsl, Point::new(12.0, 10.0)), hsl);
        let commands = e.draw(&hsl);
        assert_eq!(commands.len(), SEGMENTS + 4);
        let marker = e.tone_position(&hsl);
        assert_eq!(marker, Point::new(10.0, 10.0));
    }

    #[test]
    fn draw_emits_ring_triangle_and_markers_in_order() {
        let e = engine();
        let commands = e.draw(&Hsl::new(120.0, 1.0, 0.5));
        assert_eq!(commands.len(), SEGMENTS + 4);
        for command in &commands[..SEGMENTS] {
            let DrawCommand::FillPath { path, gradient } = command else {
                panic!("expected ring segment, got {command:?}");
            };
            assert!(matches!(
                path.elements(),
                [
                    PathEl::Arc {
                        anticlockwise: false,
                        ..
                    },
                    PathEl::Arc {
                        anticlockwise: true,
                        ..
                    },
                    PathEl::ClosePath
                ]
            ));
            assert_eq!(gradient.stops.len(), 2);
        }
        let DrawCommand::FillPath { gradient, .. } = &commands[SEGMENTS] else {
            panic!("expected lightness fill");
        };
        assert_eq!(gradient.stops[0].color, Color::BLACK);
        assert_eq!(gradient.stops[1].color, Color::WHITE);
        let DrawCommand::FillPath { gradient, .. } = &commands[SEGMENTS + 1] else {
            panic!("expected saturation fill");
        };
        assert_eq!(gradient.stops[0], GradientStop::transparent_black(0.0));
        assert_eq!(gradient.stops[1].color.packed(), 0x00ff00);
        assert!(matches!(commands[SEGMENTS + 2], DrawCommand::StrokeLine { .. }));
        assert!(matches!(commands[SEGMENTS + 3], DrawCommand::StrokeCircle { .. }));
    }

    #[test]
    fn ring_segments_start_at_red_and_wrap_back_to_red() {
        let e = engine();
        let commands = e.draw(&Hsl::default());
        let stops = |i: usize| match &commands[i] {
            DrawCommand::FillPath { gradient, .. } => gradient.stops.clone(),
            other => panic!("expected fill, got {other:?}"),
        };
        assert_eq!(stops(0)[0].color.packed(), 0xff0000);
        assert_eq!(stops(1)[0].color.packed(), 0xff8000);
        assert_eq!(stops(2)[0].color.packed(), 0xffff00);
        assert_eq!(stops(SEGMENTS - 1)[1].color.packed(), 0xff0000);
        // Neighbouring segments share their boundary color.
        for i in 0..SEGMENTS - 1 {
            assert_eq!(stops(i)[1].color, stops(i + 1)[0].color);
        }
    }

    #[test]
    fn ring_segments_overdraw_their_start() {
        let e = engine();
        let commands = e.draw(&Hsl::default());
        let DrawCommand::FillPath { path, .. } = &commands[0] else {
            panic!("expected fill");
        };
        let PathEl::Arc {
            start_angle,
            end_angle,
            radius,
            ..
        } = path.elements()[0]
        else {
            panic!("expected arc");
        };
        assert_eq!(radius, 100.0);
        approx_eq(start_angle, ZERO_ANGLE - 1f64.atan2(70.0), 1e-12);
        approx_eq(end_angle, ZERO_ANGLE + TAU / 12.0, 1e-12);
    }

    #[test]
    fn tone_marker_contrasts_with_lightness() {
        let e = engine();
        let marker_color = |l: f64| match e.draw(&Hsl::new(0.0, 0.5, l)).pop() {
            Some(DrawCommand::StrokeCircle { color, .. }) => color,
            other => panic!("expected marker, got {other:?}"),
        };
        assert_eq!(marker_color(0.2), Color::WHITE);
        assert_eq!(marker_color(0.5), Color::BLACK);
        assert_eq!(marker_color(0.9), Color::BLACK);
    }

    #[test]
    fn draw_is_deterministic() {
        let e = engine();
        let hsl = Hsl::new(77.0, 0.25, 0.75);
        assert_eq!(e.draw(&hsl), e.draw(&hsl));
    }

    #[test]
    fn draw_tolerates_out_of_range_hsl() {
        let e = engine();
        let commands = e.draw(&Hsl::new(f64::NAN, 7.0, -2.0));
        let Some(DrawCommand::StrokeCircle { center, .. }) = commands.last() else {
            panic!("expected marker");
        };
        assert!(center.x.is_finite() && center.y.is_finite());
    }
}
