use crate::backend::{Backend, ImagePattern};
use crate::coords::Rect;
use crate::error::Result;
use crate::paint::{LinearGradient, Paint, RadialGradient};

use super::Canvas;

impl<B: Backend> Canvas<B> {
    /// Builds a native linear-gradient paint for the current frame.
    ///
    /// Allocates the two endpoint colors and the paint; all three are
    /// released with the frame.
    pub fn linear_gradient(&mut self, gradient: &LinearGradient) -> Result<Paint> {
        self.ensure_live()?;
        let (start, end) = gradient.endpoints();

        let inner = self.arena.alloc_color(&mut self.backend, gradient.start)?;
        let outer = self.arena.alloc_color(&mut self.backend, gradient.end)?;
        let paint = self
            .backend
            .alloc_linear_gradient(start, end, inner, outer, gradient.feather())?;

        Ok(Paint::Reference(self.arena.adopt_paint(paint)))
    }

    /// Builds a native radial-gradient paint centred on the gradient's
    /// alignment anchor.
    pub fn radial_gradient(&mut self, gradient: &RadialGradient) -> Result<Paint> {
        self.ensure_live()?;

        let inner = self.arena.alloc_color(&mut self.backend, gradient.start)?;
        let outer = self.arena.alloc_color(&mut self.backend, gradient.end)?;
        let paint = self.backend.alloc_radial_gradient(
            gradient.center(),
            gradient.inner_radius,
            gradient.outer_radius,
            inner,
            outer,
            gradient.feather(),
        )?;

        Ok(Paint::Reference(self.arena.adopt_paint(paint)))
    }

    /// Native pixel size of texture `id`.
    pub fn texture_size(&mut self, id: &str) -> Result<(i32, i32)> {
        self.ensure_live()?;
        let image = self.textures.get(id)?;
        Ok(self.backend.image_size(image))
    }

    /// Builds an image-pattern paint that stretches texture `id` over
    /// `bounds`, unrotated and fully opaque.
    pub fn texture(&mut self, id: &str, bounds: Rect) -> Result<Paint> {
        self.ensure_live()?;
        let image = self.textures.get(id)?;

        let (w, h) = self.backend.image_size(image);
        log::trace!("texture `{id}` ({w}x{h}) patterned over {bounds:?}");

        let paint = self.backend.alloc_image_pattern(ImagePattern {
            origin: bounds.origin,
            size: bounds.size,
            angle: 0.0,
            image,
            alpha: 1.0,
        })?;

        Ok(Paint::Reference(self.arena.adopt_paint(paint)))
    }
}
