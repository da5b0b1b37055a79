//! Chained segments.
//!
//! Builders take the path by value and hand it back, so a path reads as a
//! single expression:
//!
//! ```
//! use geometry::Path;
//! use math::{Vec2, TAU};
//!
//! let petal = Path::new(Vec2::new(10.0, 0.0))
//!     .arc(Vec2::origin(), TAU / 4.0)
//!     .bez2(Vec2::new(5.0, 5.0), Vec2::new(10.0, 0.0));
//! assert_eq!(petal.len(), 2);
//! ```

use crate::primitive::{Bezier2, Bezier3, Circle, Line, Rect};
use crate::segment::Segment;
use math::{Bounds, Vec2, TAU};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("segment {index} starts at {found:?}, expected {expected:?}")]
    BrokenChain {
        index: usize,
        expected: Vec2,
        found: Vec2,
    },
}

/// A start point and the segments drawn from it.
///
/// Every segment starts where the previous one ended; the first starts at
/// `start`. Paths built with the methods below hold this by construction
/// and deserialized paths are checked against it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PathData")]
pub struct Path {
    start: Vec2,
    segments: Vec<Segment>,
}

#[derive(Deserialize)]
struct PathData {
    start: Vec2,
    #[serde(default)]
    segments: Vec<Segment>,
}

impl TryFrom<PathData> for Path {
    type Error = GeometryError;

    fn try_from(data: PathData) -> Result<Self, Self::Error> {
        Path::from_segments(data.start, data.segments)
    }
}

impl Path {
    pub fn new(start: Vec2) -> Self {
        Self {
            start,
            segments: Vec::new(),
        }
    }

    /// A path from already computed segments, checking that they chain.
    pub fn from_segments(start: Vec2, segments: Vec<Segment>) -> Result<Self, GeometryError> {
        let mut expected = start;
        for (index, segment) in segments.iter().enumerate() {
            if segment.start() != expected {
                return Err(GeometryError::BrokenChain {
                    index,
                    expected,
                    found: segment.start(),
                });
            }
            expected = segment.end();
        }
        Ok(Self { start, segments })
    }

    pub fn start(&self) -> Vec2 {
        self.start
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Where the next segment will start: the end of the last segment, or
    /// `start` for an empty path.
    pub fn current_end(&self) -> Vec2 {
        self.segments
            .last()
            .map(Segment::end)
            .unwrap_or(self.start)
    }

    // === Builders ===

    pub fn move_to(mut self, destination: Vec2) -> Self {
        let start = self.current_end();
        self.segments.push(Segment::Move {
            start,
            end: destination,
        });
        self
    }

    pub fn line(mut self, destination: Vec2) -> Self {
        let start = self.current_end();
        self.segments.push(Segment::Line {
            start,
            end: destination,
        });
        self
    }

    /// Sweep `angle` radians around `center` from the current end.
    ///
    /// The radius is the distance from the current end to `center`, which
    /// need not match the distance from the path's `start`.
    pub fn arc(mut self, center: Vec2, angle: f64) -> Self {
        let start = self.current_end();
        self.segments.push(Segment::Arc {
            start,
            end: start.rotate_around(center, angle),
            center,
            radius: start.distance(center),
            angle,
        });
        self
    }

    pub fn bez2(mut self, control: Vec2, destination: Vec2) -> Self {
        let start = self.current_end();
        self.segments.push(Segment::Bezier2 {
            start,
            end: destination,
            control,
        });
        self
    }

    pub fn bez3(mut self, control1: Vec2, control2: Vec2, destination: Vec2) -> Self {
        let start = self.current_end();
        self.segments.push(Segment::Bezier3 {
            start,
            end: destination,
            control1,
            control2,
        });
        self
    }

    // === Factories ===

    /// One full clockwise turn starting at `center + (radius, 0)`.
    pub fn from_circle(circle: &Circle) -> Self {
        Path::new(circle.center + Vec2::new(circle.radius, 0.0)).arc(circle.center, TAU)
    }

    /// Four lines from `point`: to `+width`, `+width+height`, `+height` and
    /// back to `point`.
    pub fn from_rect(rect: &Rect) -> Self {
        let Rect {
            point,
            width,
            height,
        } = *rect;
        Path::new(point)
            .line(point + Vec2::new(width, 0.0))
            .line(point + Vec2::new(width, height))
            .line(point + Vec2::new(0.0, height))
            .line(point)
    }

    pub fn from_line(line: &Line) -> Self {
        Path::new(line.start).line(line.end)
    }

    pub fn from_bez2(curve: &Bezier2) -> Self {
        Path::new(curve.start).bez2(curve.control, curve.end)
    }

    pub fn from_bez3(curve: &Bezier3) -> Self {
        Path::new(curve.start).bez3(curve.control1, curve.control2, curve.end)
    }

    // === Measurements ===

    /// Axis-aligned box over `start`, every segment end, and the axis
    /// extremes swept by arcs.
    ///
    /// Bezier control points are not included, so a curve that bulges past
    /// its endpoints pokes out of the box.
    pub fn bounds(&self) -> Bounds {
        self.segments
            .iter()
            .fold(Bounds::from_point(self.start), |bounds, segment| {
                segment
                    .extremes()
                    .into_iter()
                    .fold(bounds.include(segment.end()), |bounds, point| {
                        bounds.include(point)
                    })
            })
    }

    /// Sum of [`Segment::length`]. Bezier curves count their chord.
    pub fn length(&self) -> f64 {
        self.segments.iter().map(Segment::length).sum()
    }

    /// Like [`Path::length`] but Bezier curves are measured along `steps`
    /// samples each instead of by their chord.
    pub fn approximate_length(&self, steps: usize) -> f64 {
        let steps = steps.max(1);
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Bezier2 { .. } | Segment::Bezier3 { .. } => {
                    let mut previous = segment.start();
                    (1..=steps)
                        .map(|i| {
                            let point = segment.point_at(i as f64 / steps as f64);
                            let distance = previous.distance(point);
                            previous = point;
                            distance
                        })
                        .sum::<f64>()
                }
                _ => segment.length(),
            })
            .sum()
    }

    /// Sample the path into points, `steps` per arc or curve segment.
    ///
    /// Moves and lines contribute their end point only, so a move shows up
    /// as a jump between consecutive points.
    pub fn flatten(&self, steps: usize) -> Vec<Vec2> {
        let steps = steps.max(1);
        let mut points = vec![self.start];
        for segment in &self.segments {
            match segment {
                Segment::Move { end, .. } | Segment::Line { end, .. } => points.push(*end),
                _ => points.extend((1..=steps).map(|i| segment.point_at(i as f64 / steps as f64))),
            }
        }
        points
    }

    /// The same path shifted by `offset`.
    pub fn translate(&self, offset: Vec2) -> Path {
        Path {
            start: self.start + offset,
            segments: self
                .segments
                .iter()
                .map(|segment| segment.translate(offset))
                .collect(),
        }
    }
}
