use crate::coords::Rect;

/// How a stroke of width `t` sits relative to the nominal shape bounds.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum BorderPlacement {
    /// Outer edge of the stroke on the nominal bounds.
    Inside,
    /// Inner edge of the stroke on the nominal bounds.
    Outside,
    /// Stroke straddles the nominal bounds.
    #[default]
    Centered,
}

impl BorderPlacement {
    /// Geometry to stroke so the border lands where the placement asks.
    #[inline]
    pub fn rect(self, rect: Rect, thickness: f32) -> Rect {
        match self {
            BorderPlacement::Inside => rect.inset(thickness / 2.0),
            BorderPlacement::Outside => rect.outset(thickness / 2.0),
            BorderPlacement::Centered => rect,
        }
    }

    #[inline]
    pub fn radius(self, radius: f32, thickness: f32) -> f32 {
        match self {
            BorderPlacement::Inside => radius - thickness / 2.0,
            BorderPlacement::Outside => radius + thickness / 2.0,
            BorderPlacement::Centered => radius,
        }
    }
}

/// Stroke thickness plus placement.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Border {
    pub thickness: f32,
    pub placement: BorderPlacement,
}

impl Border {
    /// Centered border of the given thickness.
    #[inline]
    pub const fn new(thickness: f32) -> Self {
        Self {
            thickness,
            placement: BorderPlacement::Centered,
        }
    }

    #[inline]
    pub const fn inside(thickness: f32) -> Self {
        Self {
            thickness,
            placement: BorderPlacement::Inside,
        }
    }

    #[inline]
    pub const fn outside(thickness: f32) -> Self {
        Self {
            thickness,
            placement: BorderPlacement::Outside,
        }
    }

    #[inline]
    pub fn placed_rect(self, rect: Rect) -> Rect {
        self.placement.rect(rect, self.thickness)
    }

    #[inline]
    pub fn placed_radius(self, radius: f32) -> f32 {
        self.placement.radius(radius, self.thickness)
    }
}

impl From<f32> for Border {
    #[inline]
    fn from(thickness: f32) -> Self {
        Border::new(thickness)
    }
}
