use crate::{BlendMode, Draw, Surface};
use math::Vec2;

/// Saved surface state, restored when the guard drops.
///
/// Created by [`crate::Canvas::transform`]. Transforms and blend modes set
/// through the guard apply to draws made through it and are undone on every
/// exit path, including `?` returns and panics.
pub struct TransformGuard<'a, S: Surface> {
    surface: &'a mut S,
}

impl<'a, S: Surface> TransformGuard<'a, S> {
    pub(crate) fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }

    pub fn translate(&mut self, offset: Vec2) -> &mut Self {
        self.surface.translate(offset.x(), offset.y());
        self
    }

    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        self.surface.rotate(angle);
        self
    }

    pub fn scale(&mut self, factor: Vec2) -> &mut Self {
        self.surface.scale(factor.x(), factor.y());
        self
    }

    pub fn blend(&mut self, mode: BlendMode) -> &mut Self {
        self.surface.set_blend_mode(mode);
        self
    }

    pub fn draw(&mut self) -> Draw<'_, S> {
        Draw::new(&mut *self.surface)
    }

    pub fn surface(&mut self) -> &mut S {
        &mut *self.surface
    }
}

impl<S: Surface> Drop for TransformGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}
