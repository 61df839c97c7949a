//! The stateful drawing façade.
//!
//! A [`Canvas`] owns a [`Backend`] plus everything the backend protocol leaves
//! to the caller: the per-frame [`ResourceArena`], the [`TextureRegistry`],
//! and the current font defaults. Frame flow:
//!
//! ```text
//! begin_frame → draw calls (may build gradient/texture paints) → end_frame → free_resources
//! ```
//!
//! [`Canvas::frame`] runs that sequence around a closure.

mod draw;
mod paints;
mod scope;
mod text;

pub use scope::TransformScope;
pub use text::TextStyle;

use crate::backend::{Backend, FontHandle, ImageFlags, ImageHandle};
use crate::config::CanvasConfig;
use crate::error::{Error, Result};
use crate::resource::{ResourceArena, TextureRegistry};

use text::FontState;

/// Drawing context over a backend `B`.
///
/// Single-threaded. Dropping a canvas that was not [`destroy`](Self::destroy)ed
/// destroys it.
pub struct Canvas<B: Backend> {
    backend: B,
    config: CanvasConfig,
    arena: ResourceArena,
    textures: TextureRegistry,
    font: FontState,
    destroyed: bool,
}

impl<B: Backend> Canvas<B> {
    /// Creates the native context on `backend`.
    pub fn new(mut backend: B, config: CanvasConfig) -> Result<Self> {
        backend.create(config.create_flags)?;
        log::debug!("canvas created ({:?})", config.create_flags);

        Ok(Self {
            backend,
            config,
            arena: ResourceArena::new(),
            textures: TextureRegistry::new(),
            font: FontState::default(),
            destroyed: false,
        })
    }

    /// Creates a canvas with [`CanvasConfig::default`].
    pub fn with_defaults(backend: B) -> Result<Self> {
        Self::new(backend, CanvasConfig::default())
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Direct backend access. Handles tracked by the arena must not be
    /// released through it.
    #[inline]
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[inline]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Colors and paints allocated since the last [`free_resources`](Self::free_resources).
    #[inline]
    pub fn tracked_resources(&self) -> usize {
        self.arena.len()
    }

    #[inline]
    pub fn textures(&self) -> &TextureRegistry {
        &self.textures
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    #[inline]
    fn ensure_live(&self) -> Result<()> {
        if self.destroyed {
            Err(Error::Destroyed)
        } else {
            Ok(())
        }
    }

    // ── assets ────────────────────────────────────────────────────────────

    /// Registers a font face under `id` from raw font bytes.
    pub fn create_font(&mut self, id: &str, bytes: &[u8]) -> Result<FontHandle> {
        self.ensure_live()?;
        let font = self.backend.create_font(id, bytes)?;
        log::debug!("font `{id}` loaded as {font:?}");
        Ok(font)
    }

    /// Registers a texture under `id` from encoded image bytes.
    ///
    /// `flags` defaults to [`CanvasConfig::texture_flags`]. Registering an
    /// identifier twice keeps the first image and ignores the new bytes.
    pub fn create_texture(
        &mut self,
        id: &str,
        bytes: &[u8],
        flags: Option<ImageFlags>,
    ) -> Result<ImageHandle> {
        self.ensure_live()?;
        let flags = flags.unwrap_or(self.config.texture_flags);
        self.textures.register(&mut self.backend, id, bytes, flags)
    }

    // ── frame lifecycle ───────────────────────────────────────────────────

    pub fn begin_frame(&mut self, width: f32, height: f32) -> Result<()> {
        self.ensure_live()?;
        log::trace!("begin frame {width}x{height}");
        self.backend.begin_frame(width, height, self.config.pixel_ratio);
        Ok(())
    }

    pub fn end_frame(&mut self) -> Result<()> {
        self.ensure_live()?;
        self.backend.end_frame();
        log::trace!("end frame ({} resources pending release)", self.arena.len());
        Ok(())
    }

    /// Releases every color and paint allocated since the last call.
    ///
    /// Must run after the last draw call that uses them. Returns the number
    /// released; on partial failure every handle has still been attempted.
    pub fn free_resources(&mut self) -> Result<usize> {
        self.ensure_live()?;
        self.arena.free_all(&mut self.backend)
    }

    /// Runs `render` inside a frame, then ends the frame and frees the
    /// frame's resources.
    ///
    /// The frame is closed and swept even when `render` fails; its error is
    /// returned in preference to any error from closing.
    pub fn frame<R>(
        &mut self,
        width: f32,
        height: f32,
        render: impl FnOnce(&mut Self) -> Result<R>,
    ) -> Result<R> {
        self.begin_frame(width, height)?;

        let rendered = render(self);
        let ended = self.end_frame();
        let freed = self.free_resources();

        let value = rendered?;
        ended?;
        freed?;
        Ok(value)
    }

    // ── teardown ──────────────────────────────────────────────────────────

    /// Releases pending frame resources, deletes every texture and destroys
    /// the native context. Every later call fails with [`Error::Destroyed`].
    pub fn destroy(&mut self) -> Result<()> {
        self.ensure_live()?;

        let swept = self.arena.free_all(&mut self.backend);
        self.textures.clear(&mut self.backend);
        self.backend.destroy();
        self.destroyed = true;
        log::debug!("canvas destroyed");

        swept.map(|_| ())
    }
}

impl<B: Backend> Drop for Canvas<B> {
    fn drop(&mut self) {
        if !self.destroyed {
            if let Err(err) = self.destroy() {
                log::warn!("canvas teardown: {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CreateFlags;
    use crate::backend::recording::{Call, RecordingBackend};
    use crate::coords::Rect;
    use crate::paint::Color;

    fn canvas() -> Canvas<RecordingBackend> {
        Canvas::with_defaults(RecordingBackend::new()).unwrap()
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn new_creates_context_with_configured_flags() {
        let c = Canvas::new(
            RecordingBackend::new(),
            CanvasConfig::default().with_create_flags(CreateFlags::DEBUG),
        )
        .unwrap();
        assert_eq!(c.backend().calls()[0], Call::Create(CreateFlags::DEBUG));
    }

    #[test]
    fn begin_frame_passes_pixel_ratio() {
        let mut c = Canvas::new(
            RecordingBackend::new(),
            CanvasConfig::default().with_pixel_ratio(2.0),
        )
        .unwrap();
        c.begin_frame(600.0, 300.0).unwrap();
        assert_eq!(
            c.backend().calls().last(),
            Some(&Call::BeginFrame {
                width: 600.0,
                height: 300.0,
                pixel_ratio: 2.0,
            })
        );
    }

    #[test]
    fn frame_sweeps_even_when_render_fails() {
        let mut c = canvas();
        let out: Result<()> = c.frame(10.0, 10.0, |c| {
            c.rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::RED)?;
            Err(Error::NoFontSelected)
        });

        assert_eq!(out, Err(Error::NoFontSelected));
        assert_eq!(c.tracked_resources(), 0);
        assert_eq!(c.backend().live_resources(), 0);
        assert_eq!(c.backend().count(|c| *c == Call::EndFrame), 1);
    }

    #[test]
    fn frame_ends_before_it_frees() {
        let mut c = canvas();
        c.frame(10.0, 10.0, |c| c.rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::RED))
            .unwrap();

        let calls = c.backend().calls();
        let end = calls.iter().position(|c| *c == Call::EndFrame).unwrap();
        let release = calls.iter().position(|c| matches!(c, Call::Release(_))).unwrap();
        assert!(end < release);
    }

    // ── textures ──────────────────────────────────────────────────────────

    #[test]
    fn create_texture_uses_configured_default_flags() {
        let mut c = Canvas::new(
            RecordingBackend::new(),
            CanvasConfig::default().with_texture_flags(ImageFlags::GENERATE_MIPMAPS),
        )
        .unwrap();
        let image = c.create_texture("t", b"img", None).unwrap();
        assert!(
            c.backend()
                .calls()
                .contains(&Call::CreateImage(ImageFlags::GENERATE_MIPMAPS, image))
        );
    }

    // ── teardown ──────────────────────────────────────────────────────────

    #[test]
    fn destroy_deletes_textures_and_context() {
        let mut c = canvas();
        c.create_texture("a", b"1", None).unwrap();
        c.create_texture("b", b"2", Some(ImageFlags::REPEAT_X)).unwrap();

        c.destroy().unwrap();

        let calls = c.backend().calls();
        assert_eq!(calls.iter().filter(|c| matches!(c, Call::DeleteImage(_))).count(), 2);
        assert_eq!(calls.last(), Some(&Call::Destroy));
        assert!(c.textures().is_empty());
    }

    #[test]
    fn calls_after_destroy_are_rejected() {
        let mut c = canvas();
        c.destroy().unwrap();

        assert_eq!(c.begin_frame(1.0, 1.0), Err(Error::Destroyed));
        assert_eq!(c.rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::RED), Err(Error::Destroyed));
        assert_eq!(c.save(), Err(Error::Destroyed));
        assert_eq!(c.destroy(), Err(Error::Destroyed));
        assert_eq!(c.backend().count(|c| *c == Call::Destroy), 1);
    }

    #[test]
    fn destroy_releases_resources_left_in_the_arena() {
        let mut c = canvas();
        c.begin_frame(10.0, 10.0).unwrap();
        c.rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::RED).unwrap();
        assert_eq!(c.tracked_resources(), 1);

        c.destroy().unwrap();
        assert_eq!(c.backend().live_resources(), 0);
    }
}
