use super::Vec2;

/// Axis-aligned rectangle (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn x(self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn y(self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    /// The larger of width and height. Default gradient feather.
    #[inline]
    pub fn longest_side(self) -> f32 {
        self.size.x.max(self.size.y)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Shrinks the rectangle by `d` on every side.
    ///
    /// Width and height lose `2 * d`; they are not clamped, so an inset larger
    /// than half the size yields a negative extent.
    #[inline]
    pub fn inset(self, d: f32) -> Self {
        Rect::new(
            self.origin.x + d,
            self.origin.y + d,
            self.size.x - 2.0 * d,
            self.size.y - 2.0 * d,
        )
    }

    /// Grows the rectangle by `d` on every side.
    #[inline]
    pub fn outset(self, d: f32) -> Self {
        self.inset(-d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h)
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[test]
    fn max_is_origin_plus_size() {
        assert_eq!(r(10.0, 20.0, 30.0, 40.0).max(), Vec2::new(40.0, 60.0));
    }

    #[test]
    fn longest_side_picks_larger_extent() {
        assert_eq!(r(0.0, 0.0, 100.0, 50.0).longest_side(), 100.0);
        assert_eq!(r(0.0, 0.0, 10.0, 50.0).longest_side(), 50.0);
    }

    // ── inset / outset ────────────────────────────────────────────────────

    #[test]
    fn inset_moves_origin_and_shrinks_both_axes() {
        assert_eq!(r(0.0, 0.0, 20.0, 20.0).inset(2.0), r(2.0, 2.0, 16.0, 16.0));
    }

    #[test]
    fn outset_is_negative_inset() {
        assert_eq!(r(0.0, 0.0, 20.0, 20.0).outset(2.0), r(-2.0, -2.0, 24.0, 24.0));
    }

    #[test]
    fn oversized_inset_is_not_clamped() {
        let i = r(0.0, 0.0, 4.0, 4.0).inset(3.0);
        assert_eq!(i.size, Vec2::new(-2.0, -2.0));
        assert!(i.is_empty());
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
    }

    #[test]
    fn is_empty_positive_size() {
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
