//! In-memory [`Backend`] that records every call.
//!
//! Nothing is rasterized. Each call is appended to a [`Call`] log, native
//! handles are issued from a counter, and the set of live colors/paints is
//! tracked so tests (and the studio demo) can check that every per-frame
//! allocation is released exactly once.
//!
//! Text is measured with [`FontBook`] when the registered font data parses;
//! otherwise a fixed approximation is used (advance = 0.5 × size per char,
//! line height = 1.2 × size).

use std::collections::{HashMap, HashSet};

use crate::coords::{CornerRadii, Rect, Vec2};
use crate::paint::Color;

use super::fonts::FontBook;
use super::{
    Backend, BackendError, ColorHandle, CreateFlags, FontHandle, ImageFlags, ImageHandle,
    ImagePattern, PaintHandle, ResourceHandle, TextAlign, TextMetrics,
};

/// One recorded backend invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(CreateFlags),
    Destroy,
    BeginFrame {
        width: f32,
        height: f32,
        pixel_ratio: f32,
    },
    EndFrame,

    Save,
    Restore,
    Translate(f32, f32),
    Rotate(f32),
    Scale(f32, f32),

    BeginPath,
    Rect(Rect),
    RoundedRectVarying(Rect, CornerRadii),
    Circle(Vec2, f32),
    MoveTo(Vec2),
    LineTo(Vec2),
    ClosePath,

    FillColor(ColorHandle),
    StrokeColor(ColorHandle),
    FillPaint(PaintHandle),
    StrokePaint(PaintHandle),
    StrokeWidth(f32),
    Fill,
    Stroke,

    AllocColor(Color, ColorHandle),
    AllocLinearGradient {
        start: Vec2,
        end: Vec2,
        inner: ColorHandle,
        outer: ColorHandle,
        feather: f32,
        paint: PaintHandle,
    },
    AllocRadialGradient {
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        inner: ColorHandle,
        outer: ColorHandle,
        feather: f32,
        paint: PaintHandle,
    },
    AllocImagePattern(ImagePattern, PaintHandle),
    Release(ResourceHandle),

    CreateFont(String),
    FontFace(String),
    FontSize(f32),
    TextAlign(TextAlign),
    Text(Vec2, String),
    TextBounds(Vec2, String),
    TextMetrics,

    CreateImage(ImageFlags, ImageHandle),
    ImageSize(ImageHandle),
    DeleteImage(ImageHandle),
}

impl Call {
    /// True for the calls that allocate an arena-owned resource.
    pub fn is_alloc(&self) -> bool {
        matches!(
            self,
            Call::AllocColor(..)
                | Call::AllocLinearGradient { .. }
                | Call::AllocRadialGradient { .. }
                | Call::AllocImagePattern(..)
        )
    }
}

/// Font face and size, saved and restored with the transform.
#[derive(Debug, Clone, Default)]
struct FontState {
    face: Option<String>,
    size: f32,
}

/// Recording backend with live-resource accounting and fault injection.
#[derive(Debug)]
pub struct RecordingBackend {
    calls: Vec<Call>,
    next_handle: u64,
    next_image: i32,
    next_font: i32,

    fonts: FontBook,
    font: FontState,
    saved_fonts: Vec<FontState>,

    live: HashSet<ResourceHandle>,
    released: Vec<ResourceHandle>,

    images: HashMap<ImageHandle, (i32, i32)>,
    image_size: (i32, i32),

    save_depth: i32,
    max_save_depth: i32,

    /// Remaining successful allocations before the next one fails.
    alloc_budget: Option<usize>,
    failing_releases: HashSet<ResourceHandle>,
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            next_handle: 1,
            next_image: 1,
            next_font: 0,
            fonts: FontBook::new(),
            font: FontState::default(),
            saved_fonts: Vec::new(),
            live: HashSet::new(),
            released: Vec::new(),
            images: HashMap::new(),
            image_size: (64, 64),
            save_depth: 0,
            max_save_depth: 0,
            alloc_budget: None,
            failing_releases: HashSet::new(),
        }
    }
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pixel size reported for images created after this call.
    pub fn with_image_size(mut self, width: i32, height: i32) -> Self {
        self.image_size = (width, height);
        self
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Returns and clears the call log. Accounting state is kept.
    pub fn take_calls(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    /// Colors and paints allocated and not yet released.
    pub fn live_resources(&self) -> usize {
        self.live.len()
    }

    /// Every handle successfully released, in release order.
    pub fn released(&self) -> &[ResourceHandle] {
        &self.released
    }

    /// Current depth of the native save stack (saves minus restores).
    pub fn save_depth(&self) -> i32 {
        self.save_depth
    }

    pub fn max_save_depth(&self) -> i32 {
        self.max_save_depth
    }

    /// Lets the next `n` allocations succeed and fails every one after that
    /// with [`BackendError::OutOfMemory`].
    pub fn fail_allocations_after(&mut self, n: usize) {
        self.alloc_budget = Some(n);
    }

    /// Makes [`Backend::release`] fail for `handle`. The handle stays live.
    pub fn fail_release_of(&mut self, handle: ResourceHandle) {
        self.failing_releases.insert(handle);
    }

    fn issue(&mut self) -> Result<u64, BackendError> {
        if let Some(budget) = self.alloc_budget.as_mut() {
            if *budget == 0 {
                return Err(BackendError::OutOfMemory);
            }
            *budget -= 1;
        }
        let id = self.next_handle;
        self.next_handle += 1;
        Ok(id)
    }

    fn issue_paint(&mut self) -> Result<PaintHandle, BackendError> {
        let paint = PaintHandle(self.issue()?);
        self.live.insert(paint.into());
        Ok(paint)
    }
}

impl Backend for RecordingBackend {
    fn create(&mut self, flags: CreateFlags) -> Result<(), BackendError> {
        self.calls.push(Call::Create(flags));
        Ok(())
    }

    fn destroy(&mut self) {
        self.calls.push(Call::Destroy);
    }

    fn begin_frame(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.calls.push(Call::BeginFrame {
            width,
            height,
            pixel_ratio,
        });
    }

    fn end_frame(&mut self) {
        self.calls.push(Call::EndFrame);
    }

    fn save(&mut self) {
        self.save_depth += 1;
        self.max_save_depth = self.max_save_depth.max(self.save_depth);
        self.saved_fonts.push(self.font.clone());
        self.calls.push(Call::Save);
    }

    fn restore(&mut self) {
        self.save_depth -= 1;
        if let Some(font) = self.saved_fonts.pop() {
            self.font = font;
        }
        self.calls.push(Call::Restore);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.calls.push(Call::Translate(x, y));
    }

    fn rotate(&mut self, angle: f32) {
        self.calls.push(Call::Rotate(angle));
    }

    fn scale(&mut self, x: f32, y: f32) {
        self.calls.push(Call::Scale(x, y));
    }

    fn begin_path(&mut self) {
        self.calls.push(Call::BeginPath);
    }

    fn rect(&mut self, rect: Rect) {
        self.calls.push(Call::Rect(rect));
    }

    fn rounded_rect_varying(&mut self, rect: Rect, radii: CornerRadii) {
        self.calls.push(Call::RoundedRectVarying(rect, radii));
    }

    fn circle(&mut self, center: Vec2, radius: f32) {
        self.calls.push(Call::Circle(center, radius));
    }

    fn move_to(&mut self, p: Vec2) {
        self.calls.push(Call::MoveTo(p));
    }

    fn line_to(&mut self, p: Vec2) {
        self.calls.push(Call::LineTo(p));
    }

    fn close_path(&mut self) {
        self.calls.push(Call::ClosePath);
    }

    fn fill_color(&mut self, color: ColorHandle) {
        self.calls.push(Call::FillColor(color));
    }

    fn stroke_color(&mut self, color: ColorHandle) {
        self.calls.push(Call::StrokeColor(color));
    }

    fn fill_paint(&mut self, paint: PaintHandle) {
        self.calls.push(Call::FillPaint(paint));
    }

    fn stroke_paint(&mut self, paint: PaintHandle) {
        self.calls.push(Call::StrokePaint(paint));
    }

    fn stroke_width(&mut self, width: f32) {
        self.calls.push(Call::StrokeWidth(width));
    }

    fn fill(&mut self) {
        self.calls.push(Call::Fill);
    }

    fn stroke(&mut self) {
        self.calls.push(Call::Stroke);
    }

    fn alloc_color(&mut self, color: Color) -> Result<ColorHandle, BackendError> {
        let handle = ColorHandle(self.issue()?);
        self.live.insert(handle.into());
        self.calls.push(Call::AllocColor(color, handle));
        Ok(handle)
    }

    fn alloc_linear_gradient(
        &mut self,
        start: Vec2,
        end: Vec2,
        inner: ColorHandle,
        outer: ColorHandle,
        feather: f32,
    ) -> Result<PaintHandle, BackendError> {
        let paint = self.issue_paint()?;
        self.calls.push(Call::AllocLinearGradient {
            start,
            end,
            inner,
            outer,
            feather,
            paint,
        });
        Ok(paint)
    }

    fn alloc_radial_gradient(
        &mut self,
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        inner: ColorHandle,
        outer: ColorHandle,
        feather: f32,
    ) -> Result<PaintHandle, BackendError> {
        let paint = self.issue_paint()?;
        self.calls.push(Call::AllocRadialGradient {
            center,
            inner_radius,
            outer_radius,
            inner,
            outer,
            feather,
            paint,
        });
        Ok(paint)
    }

    fn alloc_image_pattern(&mut self, pattern: ImagePattern) -> Result<PaintHandle, BackendError> {
        let paint = self.issue_paint()?;
        self.calls.push(Call::AllocImagePattern(pattern, paint));
        Ok(paint)
    }

    fn release(&mut self, handle: ResourceHandle) -> Result<(), BackendError> {
        self.calls.push(Call::Release(handle));
        if self.failing_releases.contains(&handle) || !self.live.remove(&handle) {
            return Err(BackendError::InvalidHandle(handle));
        }
        self.released.push(handle);
        Ok(())
    }

    fn create_font(&mut self, name: &str, bytes: &[u8]) -> Result<FontHandle, BackendError> {
        if bytes.is_empty() {
            return Err(BackendError::Font(format!("`{name}`: empty font data")));
        }
        self.calls.push(Call::CreateFont(name.to_owned()));
        if let Err(err) = self.fonts.load(name, bytes) {
            log::debug!("{err}; measuring with approximate metrics");
        }
        let font = FontHandle(self.next_font);
        self.next_font += 1;
        Ok(font)
    }

    fn font_face(&mut self, name: &str) {
        self.calls.push(Call::FontFace(name.to_owned()));
        self.font.face = Some(name.to_owned());
    }

    fn font_size(&mut self, size: f32) {
        self.calls.push(Call::FontSize(size));
        self.font.size = size;
    }

    fn text_align(&mut self, align: TextAlign) {
        self.calls.push(Call::TextAlign(align));
    }

    fn text(&mut self, pos: Vec2, text: &str) {
        self.calls.push(Call::Text(pos, text.to_owned()));
    }

    fn text_bounds(&mut self, pos: Vec2, text: &str) -> [f32; 4] {
        self.calls.push(Call::TextBounds(pos, text.to_owned()));
        let size = self.font.size;
        let width = self
            .font
            .face
            .as_deref()
            .and_then(|face| self.fonts.advance_width(face, text, size))
            .unwrap_or_else(|| text.chars().count() as f32 * size * 0.5);
        [pos.x, pos.y, pos.x + width, pos.y + size * 1.2]
    }

    fn text_metrics(&mut self) -> TextMetrics {
        self.calls.push(Call::TextMetrics);
        let size = self.font.size;
        self.font
            .face
            .as_deref()
            .and_then(|face| self.fonts.metrics(face, size))
            .unwrap_or(TextMetrics {
                ascender: size * 0.8,
                descender: -size * 0.2,
                line_height: size * 1.2,
            })
    }

    fn create_image(
        &mut self,
        flags: ImageFlags,
        bytes: &[u8],
    ) -> Result<ImageHandle, BackendError> {
        if bytes.is_empty() {
            return Err(BackendError::Image("empty image data".into()));
        }
        let image = ImageHandle(self.next_image);
        self.next_image += 1;
        self.images.insert(image, self.image_size);
        self.calls.push(Call::CreateImage(flags, image));
        Ok(image)
    }

    fn image_size(&mut self, image: ImageHandle) -> (i32, i32) {
        self.calls.push(Call::ImageSize(image));
        self.images.get(&image).copied().unwrap_or((0, 0))
    }

    fn delete_image(&mut self, image: ImageHandle) {
        self.images.remove(&image);
        self.calls.push(Call::DeleteImage(image));
    }
}
