//! Compiling geometry into surface calls.
//!
//! Every draw call runs the same steps:
//!
//! 1. `begin_path`, then `move_to` the path start.
//! 2. One surface call per segment.
//! 3. `close_path` if the style (or the geometry's default) says so.
//! 4. Fill, then stroke, so outlines sit on top of the fill.
//! 5. The brush, if any, once, with the realized path.

use crate::{Style, Surface};
use geometry::{Bezier2, Bezier3, Circle, Geometry, Line, Path, Rect, Segment};

/// Decoration run after a shape has been filled and stroked.
///
/// Any `FnMut(&Path, &mut Draw<S>)` closure is a brush.
pub trait Brush<S: Surface> {
    fn paint(&mut self, path: &Path, draw: &mut Draw<'_, S>);
}

impl<S, F> Brush<S> for F
where
    S: Surface,
    F: FnMut(&Path, &mut Draw<'_, S>),
{
    fn paint(&mut self, path: &Path, draw: &mut Draw<'_, S>) {
        self(path, draw)
    }
}

pub struct Draw<'a, S: Surface> {
    surface: &'a mut S,
}

impl<'a, S: Surface> Draw<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        Self { surface }
    }

    pub fn surface(&mut self) -> &mut S {
        &mut *self.surface
    }

    pub fn circle(&mut self, circle: Circle, style: &Style) {
        self.geometry(circle, style, None);
    }

    pub fn rect(&mut self, rect: Rect, style: &Style) {
        self.geometry(rect, style, None);
    }

    pub fn line(&mut self, line: Line, style: &Style) {
        self.geometry(line, style, None);
    }

    pub fn bez2(&mut self, curve: Bezier2, style: &Style) {
        self.geometry(curve, style, None);
    }

    pub fn bez3(&mut self, curve: Bezier3, style: &Style) {
        self.geometry(curve, style, None);
    }

    /// Draw a free path. Closed unless `style.close` is `Some(false)`.
    pub fn path(&mut self, path: &Path, style: &Style) {
        self.compile(path, style.close.unwrap_or(true), style);
    }

    /// Draw `geometry` and hand the result to `brush`.
    pub fn with_brush(
        &mut self,
        geometry: impl Into<Geometry>,
        style: &Style,
        mut brush: impl Brush<S>,
    ) {
        let brush: &mut dyn Brush<S> = &mut brush;
        self.geometry(geometry, style, Some(brush));
    }

    pub fn geometry(
        &mut self,
        geometry: impl Into<Geometry>,
        style: &Style,
        brush: Option<&mut dyn Brush<S>>,
    ) {
        let geometry = geometry.into();
        let path = geometry.to_path();
        let close = style.close.unwrap_or_else(|| geometry.default_closed());
        self.compile(&path, close, style);
        if let Some(brush) = brush {
            brush.paint(&path, self);
        }
    }

    fn compile(&mut self, path: &Path, close: bool, style: &Style) {
        log::trace!(
            "draw: {} segments from {:?} (close: {close})",
            path.len(),
            path.start()
        );
        self.trace(path);
        if close {
            self.surface.close_path();
        }
        self.paint(style);
    }

    fn trace(&mut self, path: &Path) {
        let start = path.start();
        self.surface.begin_path();
        self.surface.move_to(start.x(), start.y());

        for segment in path.segments() {
            match *segment {
                Segment::Move { end, .. } => self.surface.move_to(end.x(), end.y()),
                Segment::Line { end, .. } => self.surface.line_to(end.x(), end.y()),
                Segment::Bezier2 { end, control, .. } => {
                    self.surface
                        .quadratic_curve_to(control.x(), control.y(), end.x(), end.y())
                }
                Segment::Bezier3 {
                    end,
                    control1,
                    control2,
                    ..
                } => self.surface.bezier_curve_to(
                    control1.x(),
                    control1.y(),
                    control2.x(),
                    control2.y(),
                    end.x(),
                    end.y(),
                ),
                Segment::Arc {
                    start,
                    center,
                    radius,
                    angle,
                    ..
                } => {
                    let from = start.diff(center).angle();
                    self.surface.arc(
                        center.x(),
                        center.y(),
                        radius,
                        from,
                        from + angle,
                        angle < 0.0,
                    )
                }
            }
        }
    }

    fn paint(&mut self, style: &Style) {
        if let Some(fill) = &style.fill {
            self.surface.set_fill_style(&fill.0.to_css());
            self.surface.fill();
        }
        if let Some(stroke) = &style.stroke {
            self.surface.set_line_width(stroke.width);
            if let Some(cap) = stroke.cap {
                self.surface.set_line_cap(cap);
            }
            self.surface.set_stroke_style(&stroke.color.to_css());
            self.surface.stroke();
        }
    }
}
