//! Angle and range helpers.

/// A full turn in radians.
pub const TAU: f64 = std::f64::consts::TAU;

pub fn to_degrees(radians: f64) -> f64 {
    (radians / TAU) * 360.0
}

pub fn to_radians(degrees: f64) -> f64 {
    (degrees / 360.0) * TAU
}

/// Restrict `value` to `[min, max]`.
///
/// Unlike `f64::clamp` this never panics when `min > max`; `max` wins.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    min.max(value).min(max)
}

/// Wrap an angle into `[0, TAU)`.
pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}
