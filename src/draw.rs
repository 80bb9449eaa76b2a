//! Drawing instructions produced by the wheel engine.
//!
//! These are surface-agnostic: a path is a list of move/line/arc/close
//! elements, fills are linear gradients with ordered stops, and strokes are
//! solid. Hosts replay them onto whatever 2D surface they have.

use floem::kurbo::Point;

use crate::color::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathEl {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc, angles in radians measured clockwise from +x in screen
    /// space. Joins the current point to the arc start with a line.
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    },
    ClosePath,
}

/// An ordered list of path elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    elements: Vec<PathEl>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, point: Point) {
        self.elements.push(PathEl::MoveTo(point));
    }

    pub fn line_to(&mut self, point: Point) {
        self.elements.push(PathEl::LineTo(point));
    }

    pub fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) {
        self.elements.push(PathEl::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        });
    }

    pub fn close(&mut self) {
        self.elements.push(PathEl::ClosePath);
    }

    pub fn elements(&self) -> &[PathEl] {
        &self.elements
    }
}

/// A gradient color stop. Alpha is straight (not premultiplied), so a
/// transparent stop keeps its own RGB for interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
    pub alpha: f64,
}

impl GradientStop {
    pub fn opaque(offset: f64, color: Color) -> Self {
        Self {
            offset,
            color,
            alpha: 1.0,
        }
    }

    pub fn transparent_black(offset: f64) -> Self {
        Self {
            offset,
            color: Color::BLACK,
            alpha: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            stops: Vec::new(),
        }
    }

    /// Append a stop. Stops are expected in increasing offset order.
    pub fn with_stop(mut self, stop: GradientStop) -> Self {
        self.stops.push(stop);
        self
    }
}

/// One drawing step, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillPath {
        path: Path,
        gradient: LinearGradient,
    },
    StrokeLine {
        from: Point,
        to: Point,
        color: Color,
        width: f64,
    },
    StrokeCircle {
        center: Point,
        radius: f64,
        color: Color,
        width: f64,
    },
}
