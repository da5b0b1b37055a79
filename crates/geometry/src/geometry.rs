//! # Paths and shapes
//!
//! A [`Path`] is a start point plus a chain of [`Segment`]s, each one
//! beginning where the previous one ended. Shapes such as circles and
//! rectangles are described by the small structs in [`primitive`] and
//! expand into paths with [`Primitive::to_path`].
//!
//! ```
//! use geometry::Path;
//! use math::Vec2;
//!
//! let path = Path::new(Vec2::origin())
//!     .line(Vec2::new(10.0, 0.0))
//!     .line(Vec2::new(10.0, 10.0));
//! assert_eq!(path.len(), 2);
//! assert_eq!(path.current_end(), Vec2::new(10.0, 10.0));
//! ```

pub mod path;
pub mod primitive;
pub mod segment;

pub use path::{GeometryError, Path};
pub use primitive::{Bezier2, Bezier3, Circle, Geometry, Line, Primitive, Rect};
pub use segment::{Segment, SegmentKind};
