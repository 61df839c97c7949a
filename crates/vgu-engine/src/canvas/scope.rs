use std::ops::{Deref, DerefMut};

use crate::backend::Backend;
use crate::coords::Vec2;
use crate::error::Result;

use super::Canvas;

/// A saved transform state that is restored when the guard drops.
///
/// Derefs to the canvas, so drawing and further transforms go through the
/// guard. The matching `restore` runs on every exit path, including `?`
/// returns and panics. If the canvas is destroyed inside the scope the
/// restore is skipped.
pub struct TransformScope<'a, B: Backend> {
    canvas: &'a mut Canvas<B>,
}

impl<B: Backend> Deref for TransformScope<'_, B> {
    type Target = Canvas<B>;

    fn deref(&self) -> &Canvas<B> {
        self.canvas
    }
}

impl<B: Backend> DerefMut for TransformScope<'_, B> {
    fn deref_mut(&mut self) -> &mut Canvas<B> {
        self.canvas
    }
}

impl<B: Backend> Drop for TransformScope<'_, B> {
    fn drop(&mut self) {
        if !self.canvas.destroyed {
            self.canvas.backend.restore();
        }
    }
}

impl<B: Backend> Canvas<B> {
    /// Pushes the current transform; call [`restore`](Self::restore) to pop it.
    ///
    /// Prefer [`transform_scope`](Self::transform_scope) or
    /// [`scope`](Self::scope), which cannot leave the stack unbalanced.
    pub fn save(&mut self) -> Result<()> {
        self.ensure_live()?;
        self.backend.save();
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        self.ensure_live()?;
        self.backend.restore();
        Ok(())
    }

    /// Saves the transform and returns a guard that restores it on drop.
    pub fn transform_scope(&mut self) -> Result<TransformScope<'_, B>> {
        self.save()?;
        Ok(TransformScope { canvas: self })
    }

    /// Runs `draw` between a save and its matching restore.
    pub fn scope<R>(&mut self, draw: impl FnOnce(&mut Self) -> Result<R>) -> Result<R> {
        let mut scope = self.transform_scope()?;
        draw(&mut *scope)
    }

    // ── transforms ────────────────────────────────────────────────────────

    pub fn translate(&mut self, x: f32, y: f32) -> Result<()> {
        self.ensure_live()?;
        self.backend.translate(x, y);
        Ok(())
    }

    /// Rotates by `degrees` around `pivot`.
    pub fn rotate_degrees(&mut self, pivot: Vec2, degrees: f32) -> Result<()> {
        self.rotate_radians(pivot, degrees.to_radians())
    }

    /// Rotates by `radians` around `pivot`.
    pub fn rotate_radians(&mut self, pivot: Vec2, radians: f32) -> Result<()> {
        self.about(pivot, |b| b.rotate(radians))
    }

    /// Scales by `(sx, sy)` around `pivot`.
    pub fn scale(&mut self, pivot: Vec2, sx: f32, sy: f32) -> Result<()> {
        self.about(pivot, |b| b.scale(sx, sy))
    }

    pub fn scale_uniform(&mut self, pivot: Vec2, factor: f32) -> Result<()> {
        self.scale(pivot, factor, factor)
    }

    /// Draws `draw` rotated by `degrees` around `pivot`; the rotation ends with it.
    pub fn rotate_degrees_with<R>(
        &mut self,
        pivot: Vec2,
        degrees: f32,
        draw: impl FnOnce(&mut Self) -> Result<R>,
    ) -> Result<R> {
        self.scope(|c| {
            c.rotate_degrees(pivot, degrees)?;
            draw(c)
        })
    }

    pub fn rotate_radians_with<R>(
        &mut self,
        pivot: Vec2,
        radians: f32,
        draw: impl FnOnce(&mut Self) -> Result<R>,
    ) -> Result<R> {
        self.scope(|c| {
            c.rotate_radians(pivot, radians)?;
            draw(c)
        })
    }

    pub fn scale_with<R>(
        &mut self,
        pivot: Vec2,
        sx: f32,
        sy: f32,
        draw: impl FnOnce(&mut Self) -> Result<R>,
    ) -> Result<R> {
        self.scope(|c| {
            c.scale(pivot, sx, sy)?;
            draw(c)
        })
    }

    /// translate(pivot) → `op` → translate(-pivot)
    fn about(&mut self, pivot: Vec2, op: impl FnOnce(&mut B)) -> Result<()> {
        self.ensure_live()?;
        self.backend.translate(pivot.x, pivot.y);
        op(&mut self.backend);
        self.backend.translate(-pivot.x, -pivot.y);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::recording::{Call, RecordingBackend};
    use crate::coords::Rect;
    use crate::error::Error;
    use crate::paint::Color;

    fn canvas() -> Canvas<RecordingBackend> {
        let mut c = Canvas::with_defaults(RecordingBackend::new()).unwrap();
        c.backend_mut().take_calls();
        c
    }

    // ── pivots ────────────────────────────────────────────────────────────

    #[test]
    fn rotate_degrees_pivots_and_converts() {
        let mut c = canvas();
        c.rotate_degrees(Vec2::new(165.0, 20.0), 45.0).unwrap();
        assert_eq!(
            c.backend().calls(),
            &[
                Call::Translate(165.0, 20.0),
                Call::Rotate(45.0f32.to_radians()),
                Call::Translate(-165.0, -20.0),
            ]
        );
    }

    #[test]
    fn scale_pivots_around_point() {
        let mut c = canvas();
        c.scale_uniform(Vec2::new(10.0, 5.0), 0.75).unwrap();
        assert_eq!(
            c.backend().calls(),
            &[
                Call::Translate(10.0, 5.0),
                Call::Scale(0.75, 0.75),
                Call::Translate(-10.0, -5.0),
            ]
        );
    }

    // ── scope balance ─────────────────────────────────────────────────────

    #[test]
    fn scope_saves_and_restores_once() {
        let mut c = canvas();
        c.scope(|c| c.translate(1.0, 2.0)).unwrap();
        assert_eq!(
            c.backend().calls(),
            &[Call::Save, Call::Translate(1.0, 2.0), Call::Restore]
        );
    }

    #[test]
    fn scope_restores_when_draw_fails() {
        let mut c = canvas();
        let out: Result<()> = c.scope(|c| {
            c.rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::RED)?;
            c.text("boom", Vec2::zero(), Color::WHITE)
        });
        assert_eq!(out, Err(Error::NoFontSelected));
        assert_eq!(c.backend().save_depth(), 0);
    }

    #[test]
    fn nested_scopes_unwind_in_order() {
        let mut c = canvas();
        c.scope(|c| {
            c.scope(|c| c.scope(|c| c.translate(1.0, 1.0)))?;
            c.translate(2.0, 2.0)
        })
        .unwrap();
        assert_eq!(c.backend().max_save_depth(), 3);
        assert_eq!(c.backend().save_depth(), 0);
    }

    #[test]
    fn guard_restores_at_end_of_block() {
        let mut c = canvas();
        {
            let mut s = c.transform_scope().unwrap();
            s.rotate_radians(Vec2::zero(), 1.0).unwrap();
            assert_eq!(s.backend().save_depth(), 1);
        }
        assert_eq!(c.backend().save_depth(), 0);
        assert_eq!(c.backend().calls().last(), Some(&Call::Restore));
    }

    #[test]
    fn rotate_with_wraps_transform_and_drawing() {
        let mut c = canvas();
        c.rotate_degrees_with(Vec2::new(5.0, 5.0), 90.0, |c| {
            c.rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::CYAN)
        })
        .unwrap();

        let calls = c.backend().calls();
        assert_eq!(calls.first(), Some(&Call::Save));
        assert!(matches!(calls[2], Call::Rotate(_)));
        assert_eq!(calls.last(), Some(&Call::Restore));
        assert_eq!(c.backend().save_depth(), 0);
    }

    #[test]
    fn scale_with_restores_after_error() {
        let mut c = canvas();
        let out = c.scale_with(Vec2::zero(), 2.0, 2.0, |c| c.polygon(&[], Color::RED));
        assert_eq!(out, Err(Error::EmptyPolygon));
        assert_eq!(c.backend().save_depth(), 0);
    }
}
