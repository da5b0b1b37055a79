//! Shape descriptions that expand into paths.

use crate::Path;
use math::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f64,
}

/// Rectangle with its corner at `point`, extending `width` along x and
/// `height` along y.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub point: Vec2,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Vec2,
    pub end: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bezier2 {
    pub start: Vec2,
    pub control: Vec2,
    pub end: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bezier3 {
    pub start: Vec2,
    pub control1: Vec2,
    pub control2: Vec2,
    pub end: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Primitive {
    Circle(Circle),
    Rect(Rect),
    Line(Line),
    Bezier2(Bezier2),
    Bezier3(Bezier3),
}

impl Primitive {
    pub fn to_path(&self) -> Path {
        match self {
            Primitive::Circle(circle) => Path::from_circle(circle),
            Primitive::Rect(rect) => Path::from_rect(rect),
            Primitive::Line(line) => Path::from_line(line),
            Primitive::Bezier2(curve) => Path::from_bez2(curve),
            Primitive::Bezier3(curve) => Path::from_bez3(curve),
        }
    }

    /// Whether the outline is closed when a style does not say.
    /// Circles and rectangles close; lines and curves stay open.
    pub fn default_closed(&self) -> bool {
        matches!(self, Primitive::Circle(_) | Primitive::Rect(_))
    }
}

/// Anything that can be drawn: a primitive shape or a free path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Geometry {
    Primitive(Primitive),
    Path(Path),
}

impl Geometry {
    pub fn to_path(&self) -> Path {
        match self {
            Geometry::Primitive(primitive) => primitive.to_path(),
            Geometry::Path(path) => path.clone(),
        }
    }

    /// Free paths close by default, primitives as
    /// [`Primitive::default_closed`].
    pub fn default_closed(&self) -> bool {
        match self {
            Geometry::Primitive(primitive) => primitive.default_closed(),
            Geometry::Path(_) => true,
        }
    }
}

macro_rules! into_primitive {
    ($($shape:ident),*) => {
        $(
            impl From<$shape> for Primitive {
                fn from(shape: $shape) -> Self {
                    Primitive::$shape(shape)
                }
            }

            impl From<$shape> for Geometry {
                fn from(shape: $shape) -> Self {
                    Geometry::Primitive(Primitive::$shape(shape))
                }
            }
        )*
    };
}

into_primitive!(Circle, Rect, Line, Bezier2, Bezier3);

impl From<Primitive> for Geometry {
    fn from(primitive: Primitive) -> Self {
        Geometry::Primitive(primitive)
    }
}

impl From<Path> for Geometry {
    fn from(path: Path) -> Self {
        Geometry::Path(path)
    }
}
