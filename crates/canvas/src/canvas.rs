//! # Canvas
//!
//! Drawing for sketches. A [`Canvas`] wraps a host [`Surface`] and offers:
//!
//! - [`Draw`], which compiles [`geometry`] shapes and paths into surface
//!   calls with a [`Style`] and an optional [`Brush`].
//! - Scoped state: [`Canvas::transform`] and [`Canvas::layer`] restore the
//!   surface's transform and blend mode when they end.
//! - [`RecordingSurface`], a surface that records every call as a
//!   serializable [`DrawOp`].
//!
//! ```
//! use canvas::{Canvas, RecordingHost, Style};
//! use geometry::Circle;
//! use math::Vec2;
//!
//! let mut canvas = Canvas::from_host(&mut RecordingHost::new(200.0, 100.0)).unwrap();
//! canvas.draw().circle(
//!     Circle { center: Vec2::new(50.0, 50.0), radius: 20.0 },
//!     &Style::filled("orange"),
//! );
//! assert_eq!(canvas.min_dim(), 100.0);
//! ```

mod draw;
mod recording;
mod scope;
mod style;
mod surface;

pub use draw::{Brush, Draw};
pub use recording::{DrawOp, RecordingHost, RecordingSurface};
pub use scope::TransformGuard;
pub use style::{Fill, Stroke, Style};
pub use surface::{BlendMode, CanvasError, LineCap, Surface, SurfaceHost};

use color::ColorSelection;

pub struct Canvas<S: Surface> {
    surface: S,
}

impl<S: Surface> Canvas<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    /// Ask `host` for a 2D context. Fails with [`CanvasError::NoContext`]
    /// when it has none.
    pub fn from_host<H>(host: &mut H) -> Result<Self, CanvasError>
    where
        H: SurfaceHost<Surface = S>,
    {
        match host.context_2d() {
            Some(surface) => {
                log::debug!(
                    "canvas: acquired {}x{} surface",
                    surface.width(),
                    surface.height()
                );
                Ok(Self::new(surface))
            }
            None => {
                log::error!("canvas: host has no 2D context");
                Err(CanvasError::NoContext)
            }
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    // === Dimensions ===

    pub fn width(&self) -> f64 {
        self.surface.width()
    }

    pub fn height(&self) -> f64 {
        self.surface.height()
    }

    pub fn min_dim(&self) -> f64 {
        self.width().min(self.height())
    }

    pub fn max_dim(&self) -> f64 {
        self.width().max(self.height())
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width() / self.height()
    }

    // === Drawing ===

    /// Clear every mark, back to fully transparent.
    pub fn clear(&mut self) {
        let (width, height) = (self.width(), self.height());
        self.surface.clear_rect(0.0, 0.0, width, height);
    }

    pub fn fill_background(&mut self, color: impl Into<ColorSelection>) {
        let (width, height) = (self.width(), self.height());
        let css = color.into().to_css();
        self.surface.set_fill_style(&css);
        self.surface.fill_rect(0.0, 0.0, width, height);
    }

    pub fn draw(&mut self) -> Draw<'_, S> {
        Draw::new(&mut self.surface)
    }

    /// Save the surface state; it is restored when the guard drops.
    pub fn transform(&mut self) -> TransformGuard<'_, S> {
        TransformGuard::new(&mut self.surface)
    }

    pub fn with_transform<R>(&mut self, f: impl FnOnce(&mut TransformGuard<'_, S>) -> R) -> R {
        let mut guard = self.transform();
        f(&mut guard)
    }

    /// Draw into a fresh layer, then composite it onto this canvas with
    /// `blend`. The blend mode only applies to the composite.
    pub fn layer<R>(&mut self, blend: BlendMode, f: impl FnOnce(&mut Canvas<S>) -> R) -> R {
        let mut layer = Canvas::new(self.surface.create_layer());
        let result = f(&mut layer);

        log::trace!("canvas: compositing layer with {blend}");
        let mut guard = self.transform();
        guard.blend(blend);
        guard.surface().draw_layer(&layer.surface);
        result
    }
}
