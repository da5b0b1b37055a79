//! Axis-aligned extents.

use crate::Vec2;
use serde::{Deserialize, Serialize};

/// The box spanned by `min` and `max`, edges included.
///
/// Built by growing from a point with [`Bounds::include`], which is how
/// paths measure themselves. `new` trusts its arguments; `from_corners`
/// sorts them.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self::new(a.min(b), a.max(b))
    }

    pub fn from_point(point: Vec2) -> Self {
        Self::new(point, point)
    }

    /// None when `points` yields nothing.
    pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = Self::from_point(points.next()?);
        Some(points.fold(first, |bounds, point| bounds.include(point)))
    }

    pub fn width(&self) -> f64 {
        self.max.x() - self.min.x()
    }

    pub fn height(&self) -> f64 {
        self.max.y() - self.min.y()
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    pub fn center(&self) -> Vec2 {
        self.min.lerp(self.max, 0.5)
    }

    /// True when either side has no extent, as for a single point.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    pub fn include(&self, point: Vec2) -> Self {
        Self::new(self.min.min(point), self.max.max(point))
    }

    pub fn union(&self, other: &Self) -> Self {
        self.include(other.min).include(other.max)
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        (self.min.x()..=self.max.x()).contains(&point.x())
            && (self.min.y()..=self.max.y()).contains(&point.y())
    }

    /// Grow every side by `margin`; a negative margin shrinks.
    pub fn expand(&self, margin: f64) -> Self {
        Self::new(self.min.diff_scalar(margin), self.max.add_scalar(margin))
    }

    /// Clockwise from `min` in screen coordinates (y down).
    pub fn corners(&self) -> [Vec2; 4] {
        let (x0, y0, x1, y1) = (self.min.x(), self.min.y(), self.max.x(), self.max.y());
        [
            Vec2::new(x0, y0),
            Vec2::new(x1, y0),
            Vec2::new(x1, y1),
            Vec2::new(x0, y1),
        ]
    }
}
