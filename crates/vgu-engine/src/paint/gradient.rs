use crate::coords::{Alignment, Rect, Vec2};

use super::Color;

/// Direction of a two-color linear gradient across its bounding box.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum LinearDirection {
    #[default]
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
    DiagonalLeftToRightUp,
    DiagonalLeftToRightDown,
    DiagonalRightToLeftUp,
    DiagonalRightToLeftDown,
}

impl LinearDirection {
    pub const ALL: [LinearDirection; 8] = [
        LinearDirection::LeftToRight,
        LinearDirection::RightToLeft,
        LinearDirection::TopToBottom,
        LinearDirection::BottomToTop,
        LinearDirection::DiagonalLeftToRightUp,
        LinearDirection::DiagonalLeftToRightDown,
        LinearDirection::DiagonalRightToLeftUp,
        LinearDirection::DiagonalRightToLeftDown,
    ];

    /// Start and end points of the gradient axis inside `rect`.
    pub fn endpoints(self, rect: Rect) -> (Vec2, Vec2) {
        let (x0, y0) = (rect.x(), rect.y());
        let Vec2 { x: x1, y: y1 } = rect.max();

        let (start, end) = match self {
            LinearDirection::LeftToRight => ((x0, y0), (x1, y0)),
            LinearDirection::RightToLeft => ((x1, y0), (x0, y0)),
            LinearDirection::TopToBottom => ((x0, y0), (x0, y1)),
            LinearDirection::BottomToTop => ((x0, y1), (x0, y0)),
            LinearDirection::DiagonalLeftToRightUp => ((x0, y1), (x1, y0)),
            LinearDirection::DiagonalLeftToRightDown => ((x0, y0), (x1, y1)),
            LinearDirection::DiagonalRightToLeftUp => ((x1, y1), (x0, y0)),
            LinearDirection::DiagonalRightToLeftDown => ((x1, y0), (x0, y1)),
        };
        (start.into(), end.into())
    }
}

/// Request for a two-color linear gradient paint.
///
/// `feather` defaults to the longest side of `bounds`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinearGradient {
    pub bounds: Rect,
    pub feather: Option<f32>,
    pub start: Color,
    pub end: Color,
    pub direction: LinearDirection,
}

impl LinearGradient {
    pub fn new(bounds: Rect, start: Color, end: Color, direction: LinearDirection) -> Self {
        Self {
            bounds,
            feather: None,
            start,
            end,
            direction,
        }
    }

    pub fn with_feather(mut self, feather: f32) -> Self {
        self.feather = Some(feather);
        self
    }

    #[inline]
    pub fn feather(&self) -> f32 {
        self.feather.unwrap_or_else(|| self.bounds.longest_side())
    }

    #[inline]
    pub fn endpoints(&self) -> (Vec2, Vec2) {
        self.direction.endpoints(self.bounds)
    }
}

/// Request for a two-color radial gradient paint.
///
/// The centre sits on the `alignment` anchor of `bounds`; `feather` defaults
/// to the longest side of `bounds`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RadialGradient {
    pub bounds: Rect,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub feather: Option<f32>,
    pub start: Color,
    pub end: Color,
    pub alignment: Alignment,
}

impl RadialGradient {
    pub fn new(
        bounds: Rect,
        inner_radius: f32,
        outer_radius: f32,
        start: Color,
        end: Color,
        alignment: Alignment,
    ) -> Self {
        Self {
            bounds,
            inner_radius,
            outer_radius,
            feather: None,
            start,
            end,
            alignment,
        }
    }

    pub fn with_feather(mut self, feather: f32) -> Self {
        self.feather = Some(feather);
        self
    }

    #[inline]
    pub fn feather(&self) -> f32 {
        self.feather.unwrap_or_else(|| self.bounds.longest_side())
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.alignment.anchor(self.bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    // ── linear endpoints ──────────────────────────────────────────────────

    #[test]
    fn every_direction_maps_to_its_corner_pair() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let expected = [
            (LinearDirection::LeftToRight, p(0.0, 0.0), p(100.0, 0.0)),
            (LinearDirection::RightToLeft, p(100.0, 0.0), p(0.0, 0.0)),
            (LinearDirection::TopToBottom, p(0.0, 0.0), p(0.0, 50.0)),
            (LinearDirection::BottomToTop, p(0.0, 50.0), p(0.0, 0.0)),
            (LinearDirection::DiagonalLeftToRightUp, p(0.0, 50.0), p(100.0, 0.0)),
            (LinearDirection::DiagonalLeftToRightDown, p(0.0, 0.0), p(100.0, 50.0)),
            (LinearDirection::DiagonalRightToLeftUp, p(100.0, 50.0), p(0.0, 0.0)),
            (LinearDirection::DiagonalRightToLeftDown, p(100.0, 0.0), p(0.0, 50.0)),
        ];
        assert_eq!(expected.len(), LinearDirection::ALL.len());
        for (dir, start, end) in expected {
            assert_eq!(dir.endpoints(rect), (start, end), "{dir:?}");
        }
    }

    #[test]
    fn endpoints_follow_rect_origin() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(
            LinearDirection::DiagonalRightToLeftDown.endpoints(rect),
            (p(40.0, 20.0), p(10.0, 60.0))
        );
    }

    // ── feather ───────────────────────────────────────────────────────────

    #[test]
    fn feather_defaults_to_longest_side() {
        let g = LinearGradient::new(
            Rect::new(0.0, 0.0, 30.0, 80.0),
            Color::RED,
            Color::GREEN,
            LinearDirection::LeftToRight,
        );
        assert_eq!(g.feather(), 80.0);
        assert_eq!(g.with_feather(20.0).feather(), 20.0);
    }

    // ── radial centre ─────────────────────────────────────────────────────

    #[test]
    fn radial_center_uses_alignment_anchor() {
        let g = RadialGradient::new(
            Rect::new(10.0, 10.0, 40.0, 20.0),
            1.0,
            35.0,
            Color::YELLOW,
            Color::MAGENTA,
            Alignment::RightBottom,
        );
        assert_eq!(g.center(), p(50.0, 30.0));
        assert_eq!(g.feather(), 40.0);
    }
}
