//! Low-level immediate-mode drawing API consumed by the canvas.
//!
//! A [`Backend`] value *is* the native drawing context: it is created with
//! [`Backend::create`], receives path/paint/transform calls in issue order, and
//! is torn down with [`Backend::destroy`]. The canvas never rasterizes
//! anything itself.
//!
//! Native objects are referenced through small `Copy` handles. Colors and
//! paints ([`ResourceHandle`]) are per-frame allocations owned by the canvas
//! arena; images and fonts live until the context is destroyed.

mod flags;
mod fonts;
pub mod recording;

pub use flags::{CreateFlags, ImageFlags, TextAlign};
pub use fonts::FontBook;

use crate::coords::{CornerRadii, Rect, Vec2};
use crate::paint::Color;

/// Native color buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ColorHandle(pub u64);

/// Native paint record (gradient or image pattern).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PaintHandle(pub u64);

/// Native image created from encoded bytes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ImageHandle(pub i32);

/// Native font registered under a face name.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontHandle(pub i32);

/// A per-frame native allocation released in bulk by the arena.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ResourceHandle {
    Color(ColorHandle),
    Paint(PaintHandle),
}

impl From<ColorHandle> for ResourceHandle {
    fn from(h: ColorHandle) -> Self {
        ResourceHandle::Color(h)
    }
}

impl From<PaintHandle> for ResourceHandle {
    fn from(h: PaintHandle) -> Self {
        ResourceHandle::Paint(h)
    }
}

/// Errors reported by a backend.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BackendError {
    #[error("native allocation failed: out of memory")]
    OutOfMemory,

    #[error("invalid or already released handle: {0:?}")]
    InvalidHandle(ResourceHandle),

    #[error("font error: {0}")]
    Font(String),

    #[error("image error: {0}")]
    Image(String),
}

/// Text extents returned by [`Backend::text_metrics`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TextMetrics {
    pub ascender: f32,
    pub descender: f32,
    pub line_height: f32,
}

/// Parameters of a native image-pattern paint.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ImagePattern {
    pub origin: Vec2,
    pub size: Vec2,
    /// Rotation in radians.
    pub angle: f32,
    pub image: ImageHandle,
    pub alpha: f32,
}

/// Immediate-mode vector drawing context.
///
/// Single-threaded; every call takes effect in issue order. Path, transform
/// and bind calls cannot fail. Anything that allocates can.
pub trait Backend {
    // ── context / frame lifecycle ─────────────────────────────────────────

    fn create(&mut self, flags: CreateFlags) -> Result<(), BackendError>;
    fn destroy(&mut self);

    fn begin_frame(&mut self, width: f32, height: f32, pixel_ratio: f32);
    fn end_frame(&mut self);

    // ── transform stack ───────────────────────────────────────────────────

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    /// Rotation in radians about the current origin.
    fn rotate(&mut self, angle: f32);
    fn scale(&mut self, x: f32, y: f32);

    // ── path construction ─────────────────────────────────────────────────

    fn begin_path(&mut self);
    fn rect(&mut self, rect: Rect);
    fn rounded_rect_varying(&mut self, rect: Rect, radii: CornerRadii);
    fn circle(&mut self, center: Vec2, radius: f32);
    fn move_to(&mut self, p: Vec2);
    fn line_to(&mut self, p: Vec2);
    fn close_path(&mut self);

    // ── paint application ─────────────────────────────────────────────────

    fn fill_color(&mut self, color: ColorHandle);
    fn stroke_color(&mut self, color: ColorHandle);
    fn fill_paint(&mut self, paint: PaintHandle);
    fn stroke_paint(&mut self, paint: PaintHandle);
    fn stroke_width(&mut self, width: f32);
    fn fill(&mut self);
    fn stroke(&mut self);

    // ── native resources ──────────────────────────────────────────────────

    fn alloc_color(&mut self, color: Color) -> Result<ColorHandle, BackendError>;

    fn alloc_linear_gradient(
        &mut self,
        start: Vec2,
        end: Vec2,
        inner: ColorHandle,
        outer: ColorHandle,
        feather: f32,
    ) -> Result<PaintHandle, BackendError>;

    fn alloc_radial_gradient(
        &mut self,
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        inner: ColorHandle,
        outer: ColorHandle,
        feather: f32,
    ) -> Result<PaintHandle, BackendError>;

    fn alloc_image_pattern(&mut self, pattern: ImagePattern) -> Result<PaintHandle, BackendError>;

    fn release(&mut self, handle: ResourceHandle) -> Result<(), BackendError>;

    // ── fonts / text ──────────────────────────────────────────────────────

    fn create_font(&mut self, name: &str, bytes: &[u8]) -> Result<FontHandle, BackendError>;
    fn font_face(&mut self, name: &str);
    fn font_size(&mut self, size: f32);
    fn text_align(&mut self, align: TextAlign);
    fn text(&mut self, pos: Vec2, text: &str);
    /// Returns `[xmin, ymin, xmax, ymax]` of `text` laid out at `pos`.
    fn text_bounds(&mut self, pos: Vec2, text: &str) -> [f32; 4];
    fn text_metrics(&mut self) -> TextMetrics;

    // ── images ────────────────────────────────────────────────────────────

    fn create_image(
        &mut self,
        flags: ImageFlags,
        bytes: &[u8],
    ) -> Result<ImageHandle, BackendError>;
    fn image_size(&mut self, image: ImageHandle) -> (i32, i32);
    fn delete_image(&mut self, image: ImageHandle);
}
