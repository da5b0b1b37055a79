use math::{normalize_angle, Vec2};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// One drawing instruction within a [`crate::Path`].
///
/// Every variant records where it starts and ends so a path can be walked
/// without replaying its builders.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    /// Jump to `end` without drawing.
    Move { start: Vec2, end: Vec2 },
    Line { start: Vec2, end: Vec2 },
    /// Circular arc around `center`. `angle` is the signed sweep in radians,
    /// positive is clockwise in screen coordinates.
    Arc {
        start: Vec2,
        end: Vec2,
        center: Vec2,
        radius: f64,
        angle: f64,
    },
    /// Quadratic Bezier curve.
    Bezier2 { start: Vec2, end: Vec2, control: Vec2 },
    /// Cubic Bezier curve.
    Bezier3 {
        start: Vec2,
        end: Vec2,
        control1: Vec2,
        control2: Vec2,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum SegmentKind {
    Move,
    Line,
    Arc,
    Bezier2,
    Bezier3,
}

impl Segment {
    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Move { .. } => SegmentKind::Move,
            Segment::Line { .. } => SegmentKind::Line,
            Segment::Arc { .. } => SegmentKind::Arc,
            Segment::Bezier2 { .. } => SegmentKind::Bezier2,
            Segment::Bezier3 { .. } => SegmentKind::Bezier3,
        }
    }

    pub fn start(&self) -> Vec2 {
        match *self {
            Segment::Move { start, .. }
            | Segment::Line { start, .. }
            | Segment::Arc { start, .. }
            | Segment::Bezier2 { start, .. }
            | Segment::Bezier3 { start, .. } => start,
        }
    }

    pub fn end(&self) -> Vec2 {
        match *self {
            Segment::Move { end, .. }
            | Segment::Line { end, .. }
            | Segment::Arc { end, .. }
            | Segment::Bezier2 { end, .. }
            | Segment::Bezier3 { end, .. } => end,
        }
    }

    /// Length contributed to [`crate::Path::length`].
    ///
    /// Moves are zero and arcs are exact (`radius * |angle|`). Bezier
    /// curves report the chord from start to end, which undercounts any
    /// curve that bends; see [`crate::Path::approximate_length`].
    pub fn length(&self) -> f64 {
        match *self {
            Segment::Move { .. } => 0.0,
            Segment::Line { start, end }
            | Segment::Bezier2 { start, end, .. }
            | Segment::Bezier3 { start, end, .. } => start.distance(end),
            Segment::Arc { radius, angle, .. } => radius * angle.abs(),
        }
    }

    /// The point at parameter `t` in `[0, 1]` along the segment.
    ///
    /// A move has no drawn extent and yields its end for any `t`.
    pub fn point_at(&self, t: f64) -> Vec2 {
        match *self {
            Segment::Move { end, .. } => end,
            Segment::Line { start, end } => start.lerp(end, t),
            Segment::Arc {
                start,
                center,
                angle,
                ..
            } => start.rotate_around(center, angle * t),
            Segment::Bezier2 {
                start,
                end,
                control,
            } => {
                let u = 1.0 - t;
                start * (u * u) + control * (2.0 * u * t) + end * (t * t)
            }
            Segment::Bezier3 {
                start,
                end,
                control1,
                control2,
            } => {
                let u = 1.0 - t;
                start * (u * u * u)
                    + control1 * (3.0 * u * u * t)
                    + control2 * (3.0 * u * t * t)
                    + end * (t * t * t)
            }
        }
    }

    /// Points besides `start` and `end` that bound the segment.
    ///
    /// Arcs add every axis-aligned extreme their sweep passes through.
    /// Bezier control points are left out, so bounds of a bulging curve are
    /// the bounds of its chord.
    pub(crate) fn extremes(&self) -> Vec<Vec2> {
        let Segment::Arc {
            start,
            center,
            radius,
            angle,
            ..
        } = *self
        else {
            return Vec::new();
        };

        let from = start.diff(center).angle();
        let sweep = angle.abs();
        let axes = [
            (0.0, Vec2::new(radius, 0.0)),
            (std::f64::consts::FRAC_PI_2, Vec2::new(0.0, radius)),
            (std::f64::consts::PI, Vec2::new(-radius, 0.0)),
            (3.0 * std::f64::consts::FRAC_PI_2, Vec2::new(0.0, -radius)),
        ];
        axes.into_iter()
            .filter(|(theta, _)| {
                let offset = if angle >= 0.0 {
                    normalize_angle(theta - from)
                } else {
                    normalize_angle(from - theta)
                };
                offset <= sweep
            })
            .map(|(_, offset)| center + offset)
            .collect()
    }

    /// The same segment shifted by `offset`.
    pub fn translate(&self, offset: Vec2) -> Segment {
        match *self {
            Segment::Move { start, end } => Segment::Move {
                start: start + offset,
                end: end + offset,
            },
            Segment::Line { start, end } => Segment::Line {
                start: start + offset,
                end: end + offset,
            },
            Segment::Arc {
                start,
                end,
                center,
                radius,
                angle,
            } => Segment::Arc {
                start: start + offset,
                end: end + offset,
                center: center + offset,
                radius,
                angle,
            },
            Segment::Bezier2 {
                start,
                end,
                control,
            } => Segment::Bezier2 {
                start: start + offset,
                end: end + offset,
                control: control + offset,
            },
            Segment::Bezier3 {
                start,
                end,
                control1,
                control2,
            } => Segment::Bezier3 {
                start: start + offset,
                end: end + offset,
                control1: control1 + offset,
                control2: control2 + offset,
            },
        }
    }
}
