use crate::backend::Backend;
use crate::coords::{CornerRadii, Rect, Vec2};
use crate::error::{Error, Result};
use crate::paint::{ApplyMode, Paint};
use crate::shapes::{Border, TriangleCorner};

use super::Canvas;

impl<B: Backend> Canvas<B> {
    /// begin-path → geometry → (stroke width) → paint → close-path
    ///
    /// Preconditions are checked before the path is opened so a rejected
    /// call leaves no half-built path on the backend.
    fn draw_path(
        &mut self,
        paint: Paint,
        mode: ApplyMode,
        geometry: impl FnOnce(&mut B),
    ) -> Result<()> {
        self.ensure_live()?;
        if let Paint::Reference(r) = paint {
            self.arena.check(r)?;
        }

        self.backend.begin_path();
        geometry(&mut self.backend);
        paint.apply(&mut self.backend, &mut self.arena, mode)?;
        self.backend.close_path();
        Ok(())
    }

    fn stroke_path(
        &mut self,
        paint: Paint,
        thickness: f32,
        geometry: impl FnOnce(&mut B),
    ) -> Result<()> {
        self.draw_path(paint, ApplyMode::Stroke, |b| {
            geometry(b);
            b.stroke_width(thickness);
        })
    }

    // ── rectangles ────────────────────────────────────────────────────────

    pub fn rect(&mut self, rect: Rect, paint: impl Into<Paint>) -> Result<()> {
        self.draw_path(paint.into(), ApplyMode::Fill, |b| b.rect(rect))
    }

    pub fn rect_border(
        &mut self,
        rect: Rect,
        border: impl Into<Border>,
        paint: impl Into<Paint>,
    ) -> Result<()> {
        let border = border.into();
        let placed = border.placed_rect(rect);
        self.stroke_path(paint.into(), border.thickness, |b| b.rect(placed))
    }

    pub fn rounded_rect(
        &mut self,
        rect: Rect,
        radii: impl Into<CornerRadii>,
        paint: impl Into<Paint>,
    ) -> Result<()> {
        let radii = radii.into();
        self.draw_path(paint.into(), ApplyMode::Fill, |b| b.rounded_rect_varying(rect, radii))
    }

    pub fn rounded_rect_border(
        &mut self,
        rect: Rect,
        radii: impl Into<CornerRadii>,
        border: impl Into<Border>,
        paint: impl Into<Paint>,
    ) -> Result<()> {
        let (radii, border) = (radii.into(), border.into());
        let placed = border.placed_rect(rect);
        self.stroke_path(paint.into(), border.thickness, |b| {
            b.rounded_rect_varying(placed, radii)
        })
    }

    // ── circles ───────────────────────────────────────────────────────────

    pub fn circle(&mut self, center: Vec2, radius: f32, paint: impl Into<Paint>) -> Result<()> {
        self.draw_path(paint.into(), ApplyMode::Fill, |b| b.circle(center, radius))
    }

    pub fn circle_border(
        &mut self,
        center: Vec2,
        radius: f32,
        border: impl Into<Border>,
        paint: impl Into<Paint>,
    ) -> Result<()> {
        let border = border.into();
        let radius = border.placed_radius(radius);
        self.stroke_path(paint.into(), border.thickness, |b| b.circle(center, radius))
    }

    // ── triangles / polygons ──────────────────────────────────────────────

    /// Right-angled triangle filling half of `bounds`, with the right angle
    /// at `corner`.
    pub fn right_triangle(
        &mut self,
        bounds: Rect,
        corner: TriangleCorner,
        paint: impl Into<Paint>,
    ) -> Result<()> {
        let points = corner.points(bounds);
        self.draw_path(paint.into(), ApplyMode::Fill, |b| closed_polyline(b, &points))
    }

    pub fn right_triangle_border(
        &mut self,
        bounds: Rect,
        corner: TriangleCorner,
        thickness: f32,
        paint: impl Into<Paint>,
    ) -> Result<()> {
        let points = corner.points(bounds);
        self.stroke_path(paint.into(), thickness, |b| closed_polyline(b, &points))
    }

    /// Filled polygon through `points` in order. Needs at least one point.
    pub fn polygon(&mut self, points: &[Vec2], paint: impl Into<Paint>) -> Result<()> {
        if points.is_empty() {
            return Err(Error::EmptyPolygon);
        }
        self.draw_path(paint.into(), ApplyMode::Fill, |b| polyline(b, points))
    }

    pub fn polygon_border(
        &mut self,
        points: &[Vec2],
        thickness: f32,
        paint: impl Into<Paint>,
    ) -> Result<()> {
        if points.is_empty() {
            return Err(Error::EmptyPolygon);
        }
        self.stroke_path(paint.into(), thickness, |b| polyline(b, points))
    }

    // ── textured shapes ───────────────────────────────────────────────────

    /// Rectangle filled with texture `id` stretched over `rect`.
    pub fn textured_rect(&mut self, rect: Rect, id: &str) -> Result<()> {
        let paint = self.texture(id, rect)?;
        self.rect(rect, paint)
    }

    pub fn textured_rect_border(
        &mut self,
        rect: Rect,
        border: impl Into<Border>,
        id: &str,
    ) -> Result<()> {
        let paint = self.texture(id, rect)?;
        self.rect_border(rect, border, paint)
    }

    pub fn textured_rounded_rect(
        &mut self,
        rect: Rect,
        radii: impl Into<CornerRadii>,
        id: &str,
    ) -> Result<()> {
        let paint = self.texture(id, rect)?;
        self.rounded_rect(rect, radii, paint)
    }

    pub fn textured_rounded_rect_border(
        &mut self,
        rect: Rect,
        radii: impl Into<CornerRadii>,
        border: impl Into<Border>,
        id: &str,
    ) -> Result<()> {
        let paint = self.texture(id, rect)?;
        self.rounded_rect_border(rect, radii, border, paint)
    }
}

/// move-to the first point, line-to each following one.
fn polyline<B: Backend>(backend: &mut B, points: &[Vec2]) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    backend.move_to(*first);
    for p in rest {
        backend.line_to(*p);
    }
}

/// Polyline that returns to its first point.
fn closed_polyline<B: Backend>(backend: &mut B, points: &[Vec2]) {
    polyline(backend, points);
    if let Some(first) = points.first() {
        backend.line_to(*first);
    }
}
