//! Floem view hosting the wheel engine.
//!
//! The view owns a copy of the current `Hsl`, asks the engine for a fresh
//! draw list on every paint and replays it onto the Floem renderer. A press
//! classifies the hit region once; the drag keeps that region until release
//! even if the pointer wanders out of it.

use std::f64::consts::TAU;

use floem::kurbo::{BezPath, Circle, Line, Point, Stroke};
use floem::peniko::{self, Color as PenikoColor};

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::{Color, Hsl};
use crate::config::WheelConfig;
use crate::constants;
use crate::draw::{DrawCommand, GradientStop, LinearGradient, Path, PathEl};
use crate::wheel::{HitRegion, WheelEngine};

/// Signed sweep of a canvas-style arc from `start` to `end`.
fn arc_sweep(start: f64, end: f64, anticlockwise: bool) -> f64 {
    let delta = end - start;
    if anticlockwise {
        if delta <= -TAU {
            -TAU
        } else {
            -(-delta).rem_euclid(TAU)
        }
    } else if delta >= TAU {
        TAU
    } else {
        delta.rem_euclid(TAU)
    }
}

/// Build a `BezPath` from line segments only (no cubic curves); arcs are
/// flattened at [`constants::ARC_STEPS_PER_TURN`].
fn to_bez_path(path: &Path) -> BezPath {
    let mut bez = BezPath::new();
    let mut started = false;
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                bez.move_to(p);
                started = true;
            }
            PathEl::LineTo(p) => {
                if started {
                    bez.line_to(p);
                } else {
                    bez.move_to(p);
                    started = true;
                }
            }
            PathEl::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                anticlockwise,
            } => {
                let sweep = arc_sweep(start_angle, end_angle, anticlockwise);
                let steps = ((sweep.abs() / TAU) * constants::ARC_STEPS_PER_TURN)
                    .ceil()
                    .max(1.0) as usize;
                for i in 0..=steps {
                    let angle = start_angle + sweep * i as f64 / steps as f64;
                    let pt = Point::new(
                        center.x + angle.cos() * radius,
                        center.y + angle.sin() * radius,
                    );
                    if started {
                        bez.line_to(pt);
                    } else {
                        bez.move_to(pt);
                        started = true;
                    }
                }
            }
            PathEl::ClosePath => bez.close_path(),
        }
    }
    bez
}

fn to_peniko_color(color: Color, alpha: f64) -> PenikoColor {
    let (r, g, b) = color.to_rgb8();
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    PenikoColor::rgba8(r, g, b, a)
}

fn to_peniko_gradient(gradient: &LinearGradient) -> peniko::Gradient {
    let stops: Vec<peniko::ColorStop> = gradient
        .stops
        .iter()
        .map(|&GradientStop { offset, color, alpha }| peniko::ColorStop {
            offset: offset as f32,
            color: to_peniko_color(color, alpha),
        })
        .collect();
    peniko::Gradient::new_linear(gradient.start, gradient.end).with_stops(stops.as_slice())
}

fn paint_command(cx: &mut PaintCx, command: &DrawCommand) {
    match command {
        DrawCommand::FillPath { path, gradient } => {
            cx.fill(&to_bez_path(path), &to_peniko_gradient(gradient), 0.0);
        }
        DrawCommand::StrokeLine {
            from,
            to,
            color,
            width,
        } => {
            cx.stroke(
                &Line::new(*from, *to),
                to_peniko_color(*color, 1.0),
                &Stroke::new(*width),
            );
        }
        DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            width,
        } => {
            cx.stroke(
                &Circle::new(*center, *radius),
                to_peniko_color(*color, 1.0),
                &Stroke::new(*width),
            );
        }
    }
}

enum WheelUpdate {
    Hsl(Hsl),
    Config(WheelConfig),
}

pub struct ColorWheel {
    id: ViewId,
    hsl: Hsl,
    engine: WheelEngine,
    /// Region captured by the current drag; `None` when not dragging.
    drag: HitRegion,
    on_change: Option<Box<dyn Fn(Hsl)>>,
}

/// Creates a hue ring + tone triangle wheel.
///
/// - `hsl`: read and written; pointer edits are stored back unnormalized.
/// - `config`: read-only; the wheel is rebuilt when its geometry changes.
pub fn color_wheel(hsl: RwSignal<Hsl>, config: RwSignal<WheelConfig>) -> ColorWheel {
    let id = ViewId::new();

    create_effect(move |_| {
        let value = hsl.get();
        id.update_state(WheelUpdate::Hsl(value));
    });

    create_effect(move |_| {
        let cfg = config.get();
        id.update_state(WheelUpdate::Config(cfg));
    });

    ColorWheel {
        id,
        hsl: hsl.get_untracked(),
        engine: WheelEngine::new(config.get_untracked().geometry()),
        drag: HitRegion::None,
        on_change: Some(Box::new(move |value| {
            hsl.set(value);
        })),
    }
    .style(move |s| {
        let side = config.get().resolved_size() as f32;
        s.width(side)
            .height(side)
            .cursor(floem::style::CursorStyle::Default)
    })
}

impl ColorWheel {
    fn update_from_pointer(&mut self, pos: Point) {
        self.hsl = self.engine.down(self.drag, &self.hsl, pos);
        if let Some(cb) = &self.on_change {
            cb(self.hsl);
        }
        self.id.request_paint();
    }
}

impl View for ColorWheel {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<WheelUpdate>() {
            match *update {
                WheelUpdate::Hsl(value) => self.hsl = value,
                WheelUpdate::Config(cfg) => {
                    let geometry = cfg.geometry();
                    if *self.engine.geometry() != geometry {
                        self.engine = WheelEngine::new(geometry);
                    }
                }
            }
            self.id.request_paint();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                if !e.button.is_primary() {
                    return EventPropagation::Continue;
                }
                let region = self.engine.hit_test(&self.hsl, e.pos);
                if region == HitRegion::None {
                    tracing::trace!(x = e.pos.x, y = e.pos.y, "press outside wheel");
                    return EventPropagation::Continue;
                }
                cx.update_active(self.id());
                self.drag = region;
                self.update_from_pointer(e.pos);
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.drag != HitRegion::None {
                    self.update_from_pointer(e.pos);
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.drag = HitRegion::None;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        for command in self.engine.draw(&self.hsl) {
            paint_command(cx, &command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floem::kurbo::PathEl as BezEl;

    #[test]
    fn arc_sweep_follows_canvas_direction_rules() {
        assert!((arc_sweep(0.0, 1.0, false) - 1.0).abs() < 1e-12);
        assert!((arc_sweep(1.0, 0.0, true) + 1.0).abs() < 1e-12);
        // Clockwise from 1 back to 0 goes the long way round.
        assert!((arc_sweep(1.0, 0.0, false) - (TAU - 1.0)).abs() < 1e-12);
        assert_eq!(arc_sweep(0.0, 10.0, false), TAU);
        assert_eq!(arc_sweep(0.0, -10.0, true), -TAU);
    }

    #[test]
    fn ring_segment_flattens_to_a_closed_polygon() {
        let mut path = Path::new();
        path.arc(Point::ORIGIN, 10.0, 0.0, TAU / 12.0, false);
        path.arc(Point::ORIGIN, 5.0, TAU / 12.0, 0.0, true);
        path.close();
        let bez = to_bez_path(&path);
        let els = bez.elements();
        assert!(matches!(els[0], BezEl::MoveTo(_)));
        assert!(matches!(els[els.len() - 1], BezEl::ClosePath));
        assert!(els[1..els.len() - 1]
            .iter()
            .all(|el| matches!(el, BezEl::LineTo(_))));
        // Outer arc ends where the inner one starts its connecting line.
        let BezEl::MoveTo(first) = els[0] else {
            unreachable!()
        };
        assert!((first.x - 10.0).abs() < 1e-12 && first.y.abs() < 1e-12);
    }

    #[test]
    fn stop_alpha_maps_to_8_bit() {
        let transparent = to_peniko_color(Color::BLACK, 0.0);
        assert_eq!(transparent, PenikoColor::rgba8(0, 0, 0, 0));
        let opaque = to_peniko_color(Color::from_packed(0x336699), 1.0);
        assert_eq!(opaque, PenikoColor::rgba8(0x33, 0x66, 0x99, 255));
    }
}
