//! Curl angles from a noise field.

use crate::{Noise3, Noise4, Simplex3, Simplex4};
use math::Vec2;

/// Where to slice the field and how far apart the difference samples are.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurlOptions {
    pub z: f64,
    pub w: f64,
    pub resolution: f64,
}

impl Default for CurlOptions {
    fn default() -> Self {
        Self {
            z: 0.0,
            w: 0.0,
            resolution: 0.01,
        }
    }
}

/// A field that can be sampled at `(x, y, z, w)`; 3D fields ignore `w`.
pub trait CurlField {
    fn sample_at(&self, x: f64, y: f64, z: f64, w: f64) -> f64;
}

impl CurlField for Simplex3 {
    fn sample_at(&self, x: f64, y: f64, z: f64, _w: f64) -> f64 {
        Noise3::sample(self, x, y, z)
    }
}

impl CurlField for Simplex4 {
    fn sample_at(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        Noise4::sample(self, x, y, z, w)
    }
}

/// The 2D curl direction at `position`, in radians.
///
/// Forward differences over `resolution` give the partials `dx` and `dy`;
/// the result is the angle of `(dy, dx)`.
pub fn curl(position: Vec2, field: &impl CurlField, options: CurlOptions) -> f64 {
    let CurlOptions { z, w, resolution } = options;
    let (x0, y0) = (position.x(), position.y());
    let (x1, y1) = (x0 + resolution, y0 + resolution);

    let here = field.sample_at(x0, y0, z, w);
    let dx = (field.sample_at(x1, y0, z, w) - here) / resolution;
    let dy = (field.sample_at(x0, y1, z, w) - here) / resolution;
    Vec2::new(dy, dx).angle()
}
