//! Immutable two dimensional vector.
//!
//! Most methods treat the vector as cartesian coordinates `(x, y)`. The two
//! conversion methods, [`Vec2::to_polar`] and [`Vec2::to_coords`], switch
//! between `(x, y)` and `(radius, angle)` where the angle is in radians,
//! measured from the x axis.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D vector with `f64` components.
///
/// Every operation returns a new value; nothing mutates the receiver.
/// Non-finite components are not rejected and propagate through math.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2(pub DVec2);

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    /// Both components set to `value`.
    pub fn splat(value: f64) -> Self {
        Self(DVec2::splat(value))
    }

    /// The origin of the plane, `(0, 0)`.
    pub fn origin() -> Self {
        Self(DVec2::ZERO)
    }

    /// Alias for [`Vec2::origin`].
    pub fn zero() -> Self {
        Self::origin()
    }

    /// Length 1 along the x axis, `(1, 0)`.
    pub fn unit() -> Self {
        Self(DVec2::X)
    }

    /// `(1, 1)`
    pub fn ones() -> Self {
        Self(DVec2::ONE)
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    // === Properties ===

    pub fn magnitude(&self) -> f64 {
        self.0.length()
    }

    /// Angle in radians from the positive x axis, in `(-π, π]`.
    pub fn angle(&self) -> f64 {
        self.0.y.atan2(self.0.x)
    }

    // === Base maths ===

    pub fn add(self, other: Vec2) -> Vec2 {
        Vec2(self.0 + other.0)
    }

    pub fn add_scalar(self, value: f64) -> Vec2 {
        Vec2(self.0 + DVec2::splat(value))
    }

    /// Subtract `other` from this vector.
    pub fn diff(self, other: Vec2) -> Vec2 {
        Vec2(self.0 - other.0)
    }

    pub fn diff_scalar(self, value: f64) -> Vec2 {
        Vec2(self.0 - DVec2::splat(value))
    }

    /// Uniform scale.
    pub fn scale(self, factor: f64) -> Vec2 {
        Vec2(self.0 * factor)
    }

    /// Componentwise scale.
    pub fn scale_by(self, factor: Vec2) -> Vec2 {
        Vec2(self.0 * factor.0)
    }

    pub fn dot(self, other: Vec2) -> f64 {
        self.0.dot(other.0)
    }

    /// The 2D determinant `x1*y2 - y1*x2`, not the 3D cross product.
    pub fn cross(self, other: Vec2) -> f64 {
        self.0.perp_dot(other.0)
    }

    /// Strictly inside the box spanned by the origin and `max`.
    pub fn within(self, max: Vec2) -> bool {
        self.within_range(max, Vec2::origin())
    }

    /// Strictly inside the box spanned by `min` and `max` on both axes.
    pub fn within_range(self, max: Vec2, min: Vec2) -> bool {
        self.0.x < max.0.x && self.0.y < max.0.y && self.0.x > min.0.x && self.0.y > min.0.y
    }

    pub fn distance(self, other: Vec2) -> f64 {
        self.diff(other).magnitude()
    }

    // === Modify ===

    /// Unit vector in the same direction.
    ///
    /// A zero vector divides by zero and yields NaN components.
    pub fn normalize(self) -> Vec2 {
        let magnitude = self.magnitude();
        Vec2::new(self.0.x / magnitude, self.0.y / magnitude)
    }

    /// Rotate by `angle` radians around the origin, via polar coordinates.
    pub fn rotate(self, angle: f64) -> Vec2 {
        self.to_polar().add(Vec2::new(0.0, angle)).to_coords()
    }

    /// Rotate by `angle` radians around `pivot`.
    pub fn rotate_around(self, pivot: Vec2, angle: f64) -> Vec2 {
        pivot.add(self.diff(pivot).rotate(angle))
    }

    pub fn with_magnitude(self, magnitude: f64) -> Vec2 {
        self.normalize().scale(magnitude)
    }

    pub fn with_angle(self, angle: f64) -> Vec2 {
        Vec2::unit().rotate(angle).scale(self.magnitude())
    }

    // === Convert ===

    /// Cartesian `(x, y)` to polar `(radius, theta)`.
    pub fn to_polar(self) -> Vec2 {
        Vec2::new(self.magnitude(), self.angle())
    }

    /// Polar `(radius, theta)` to cartesian `(x, y)`.
    pub fn to_coords(self) -> Vec2 {
        let (radius, theta) = (self.0.x, self.0.y);
        Vec2::new(theta.cos() * radius, theta.sin() * radius)
    }

    /// Componentwise minimum.
    pub fn min(self, other: Vec2) -> Vec2 {
        Vec2(self.0.min(other.0))
    }

    /// Componentwise maximum.
    pub fn max(self, other: Vec2) -> Vec2 {
        Vec2(self.0.max(other.0))
    }

    /// Linear interpolation toward `other`, `t = 0` is `self`.
    pub fn lerp(self, other: Vec2, t: f64) -> Vec2 {
        Vec2(self.0.lerp(other.0, t))
    }

    /// True when both components differ by no more than `epsilon`.
    pub fn approx_eq(self, other: Vec2, epsilon: f64) -> bool {
        self.0.abs_diff_eq(other.0, epsilon)
    }
}

impl From<DVec2> for Vec2 {
    fn from(v: DVec2) -> Self {
        Self(v)
    }
}

impl From<Vec2> for DVec2 {
    fn from(v: Vec2) -> Self {
        v.0
    }
}

/// Scalar broadcast to both components.
impl From<f64> for Vec2 {
    fn from(value: f64) -> Self {
        Self::splat(value)
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Self::Output {
        Vec2(self.0 + other.0)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, other: Vec2) -> Self::Output {
        Vec2(self.0 - other.0)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, factor: f64) -> Self::Output {
        Vec2(self.0 * factor)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Vec2(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_identities() {
        let v = Vec2::new(3.5, -2.25);
        assert_eq!(v.add(Vec2::origin()), v);
        assert_eq!(v.scale(1.0), v);
        assert_eq!(v.diff(v), Vec2::zero());
    }

    #[test]
    fn test_scalar_broadcast() {
        assert_eq!(Vec2::from(10.0), Vec2::new(10.0, 10.0));
        assert_eq!(Vec2::new(1.0, 2.0).add_scalar(1.0), Vec2::new(2.0, 3.0));
        assert_eq!(Vec2::new(1.0, 2.0).diff_scalar(1.0), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_products() {
        let a = Vec2::new(2.0, 3.0);
        let b = Vec2::new(4.0, -1.0);
        assert_eq!(a.dot(b), 5.0);
        assert_eq!(a.cross(b), -14.0);
        assert_eq!(a.scale_by(b), Vec2::new(8.0, -3.0));
    }

    #[test]
    fn test_angles() {
        assert_eq!(Vec2::unit().angle(), 0.0);
        assert!((Vec2::unit().rotate(FRAC_PI_2).angle() - FRAC_PI_2).abs() < EPSILON);
        assert!((Vec2::new(-1.0, 0.0).angle() - PI).abs() < EPSILON);
    }

    #[test]
    fn test_rotate_round_trip() {
        let v = Vec2::new(7.0, -3.0);
        for step in 0..16 {
            let theta = step as f64 * 0.7 - 5.0;
            assert!(v.rotate(theta).rotate(-theta).approx_eq(v, EPSILON));
        }
    }

    #[test]
    fn test_polar_conversion() {
        let v = Vec2::new(0.0, 2.0);
        let polar = v.to_polar();
        assert!((polar.x() - 2.0).abs() < EPSILON);
        assert!((polar.y() - FRAC_PI_2).abs() < EPSILON);
        assert!(polar.to_coords().approx_eq(v, EPSILON));
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        let n = Vec2::zero().normalize();
        assert!(n.x().is_nan() && n.y().is_nan());
        assert!((Vec2::new(3.0, 4.0).normalize().magnitude() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_within_is_strict() {
        let max = Vec2::new(10.0, 10.0);
        assert!(Vec2::new(5.0, 5.0).within(max));
        assert!(!Vec2::new(0.0, 5.0).within(max));
        assert!(!Vec2::new(10.0, 5.0).within(max));
        assert!(Vec2::new(-1.0, -1.0).within_range(max, Vec2::splat(-2.0)));
    }

    #[test]
    fn test_magnitude_helpers() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.distance(Vec2::zero()), 5.0);
        assert!((v.with_magnitude(10.0).magnitude() - 10.0).abs() < EPSILON);
        assert!(v.with_angle(0.0).approx_eq(Vec2::new(5.0, 0.0), EPSILON));
    }

    #[test]
    fn test_serializes_as_pair() {
        let json = serde_json::to_string(&Vec2::new(1.0, 2.5)).unwrap();
        assert_eq!(json, "[1.0,2.5]");
    }
}
