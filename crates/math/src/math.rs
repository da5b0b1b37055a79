//! # Vector math for easel
//!
//! This crate provides the small set of math types every other easel crate
//! builds on: an immutable 2D vector, an axis-aligned bounding box, and a
//! few angle and range helpers.

pub mod angle;
pub mod bounds;
pub mod vec2;

pub use angle::{clamp, normalize_angle, to_degrees, to_radians, TAU};
pub use bounds::Bounds;
pub use vec2::Vec2;
