//! The host drawing surface.
//!
//! [`Surface`] mirrors the immediate-mode calls of an HTML canvas 2D
//! context. Nothing in this crate rasterizes; a surface implementation
//! forwards these calls to whatever does.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanvasError {
    #[error("surface host could not provide a 2D context")]
    NoContext,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Compositing operation, named as in CSS `mix-blend-mode`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    #[default]
    SourceOver,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
}

/// A 2D drawing context.
///
/// Coordinates are in the surface's current transform. Angles are radians.
/// Colors are CSS color strings.
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    // === Path construction ===
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64);
    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64);
    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    );
    fn close_path(&mut self);

    // === Painting ===
    fn set_fill_style(&mut self, color: &str);
    fn fill(&mut self);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_line_cap(&mut self, cap: LineCap);
    fn stroke(&mut self);
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    // === State ===
    /// Push the transform and blend mode.
    fn save(&mut self);
    /// Pop the state pushed by the matching [`Surface::save`].
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);
    fn scale(&mut self, x: f64, y: f64);
    fn set_blend_mode(&mut self, mode: BlendMode);

    // === Layers ===
    /// A blank surface with the same dimensions.
    fn create_layer(&self) -> Self
    where
        Self: Sized;
    /// Composite `layer` onto this surface at the origin.
    fn draw_layer(&mut self, layer: &Self)
    where
        Self: Sized;
}

/// Something that may be able to hand out a 2D context, such as a window or
/// an offscreen buffer.
pub trait SurfaceHost {
    type Surface: Surface;

    fn context_2d(&mut self) -> Option<Self::Surface>;
}
