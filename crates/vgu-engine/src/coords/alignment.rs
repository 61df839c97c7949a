use crate::backend::TextAlign;

use super::{Rect, Vec2};

/// Horizontal third of a box.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HorizontalAnchor {
    Left,
    Center,
    Right,
}

/// Vertical third of a box.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum VerticalAnchor {
    Top,
    Middle,
    Bottom,
}

/// One of the nine anchor points of a box (horizontal × vertical).
///
/// Used both as the text anchor and as the centre of a radial gradient.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Alignment {
    #[default]
    LeftTop,
    CenterTop,
    RightTop,

    LeftMiddle,
    CenterMiddle,
    RightMiddle,

    LeftBottom,
    CenterBottom,
    RightBottom,
}

impl Alignment {
    pub const ALL: [Alignment; 9] = [
        Alignment::LeftTop,
        Alignment::CenterTop,
        Alignment::RightTop,
        Alignment::LeftMiddle,
        Alignment::CenterMiddle,
        Alignment::RightMiddle,
        Alignment::LeftBottom,
        Alignment::CenterBottom,
        Alignment::RightBottom,
    ];

    #[inline]
    pub const fn from_anchors(h: HorizontalAnchor, v: VerticalAnchor) -> Self {
        use HorizontalAnchor as H;
        use VerticalAnchor as V;
        match (h, v) {
            (H::Left, V::Top) => Alignment::LeftTop,
            (H::Center, V::Top) => Alignment::CenterTop,
            (H::Right, V::Top) => Alignment::RightTop,
            (H::Left, V::Middle) => Alignment::LeftMiddle,
            (H::Center, V::Middle) => Alignment::CenterMiddle,
            (H::Right, V::Middle) => Alignment::RightMiddle,
            (H::Left, V::Bottom) => Alignment::LeftBottom,
            (H::Center, V::Bottom) => Alignment::CenterBottom,
            (H::Right, V::Bottom) => Alignment::RightBottom,
        }
    }

    #[inline]
    pub const fn horizontal(self) -> HorizontalAnchor {
        match self {
            Alignment::LeftTop | Alignment::LeftMiddle | Alignment::LeftBottom => {
                HorizontalAnchor::Left
            }
            Alignment::CenterTop | Alignment::CenterMiddle | Alignment::CenterBottom => {
                HorizontalAnchor::Center
            }
            Alignment::RightTop | Alignment::RightMiddle | Alignment::RightBottom => {
                HorizontalAnchor::Right
            }
        }
    }

    #[inline]
    pub const fn vertical(self) -> VerticalAnchor {
        match self {
            Alignment::LeftTop | Alignment::CenterTop | Alignment::RightTop => VerticalAnchor::Top,
            Alignment::LeftMiddle | Alignment::CenterMiddle | Alignment::RightMiddle => {
                VerticalAnchor::Middle
            }
            Alignment::LeftBottom | Alignment::CenterBottom | Alignment::RightBottom => {
                VerticalAnchor::Bottom
            }
        }
    }

    /// Anchor point of `rect`: offset from its origin by 0, w/2 or w
    /// horizontally and 0, h/2 or h vertically.
    #[inline]
    pub fn anchor(self, rect: Rect) -> Vec2 {
        let dx = match self.horizontal() {
            HorizontalAnchor::Left => 0.0,
            HorizontalAnchor::Center => rect.width() / 2.0,
            HorizontalAnchor::Right => rect.width(),
        };
        let dy = match self.vertical() {
            VerticalAnchor::Top => 0.0,
            VerticalAnchor::Middle => rect.height() / 2.0,
            VerticalAnchor::Bottom => rect.height(),
        };
        Vec2::new(rect.x() + dx, rect.y() + dy)
    }

    /// Native text-alignment flags for this anchor.
    #[inline]
    pub fn text_align(self) -> TextAlign {
        let h = match self.horizontal() {
            HorizontalAnchor::Left => TextAlign::LEFT,
            HorizontalAnchor::Center => TextAlign::CENTER,
            HorizontalAnchor::Right => TextAlign::RIGHT,
        };
        let v = match self.vertical() {
            VerticalAnchor::Top => TextAlign::TOP,
            VerticalAnchor::Middle => TextAlign::MIDDLE,
            VerticalAnchor::Bottom => TextAlign::BOTTOM,
        };
        h | v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: Rect = Rect::new(10.0, 10.0, 40.0, 20.0);

    #[test]
    fn anchors_cover_the_three_by_three_grid() {
        let expected = [
            (Alignment::LeftTop, (10.0, 10.0)),
            (Alignment::CenterTop, (30.0, 10.0)),
            (Alignment::RightTop, (50.0, 10.0)),
            (Alignment::LeftMiddle, (10.0, 20.0)),
            (Alignment::CenterMiddle, (30.0, 20.0)),
            (Alignment::RightMiddle, (50.0, 20.0)),
            (Alignment::LeftBottom, (10.0, 30.0)),
            (Alignment::CenterBottom, (30.0, 30.0)),
            (Alignment::RightBottom, (50.0, 30.0)),
        ];
        for (alignment, (x, y)) in expected {
            assert_eq!(alignment.anchor(BOX), Vec2::new(x, y), "{alignment:?}");
        }
    }

    #[test]
    fn anchors_roundtrip_through_components() {
        for a in Alignment::ALL {
            assert_eq!(Alignment::from_anchors(a.horizontal(), a.vertical()), a);
        }
    }

    #[test]
    fn text_align_sets_one_horizontal_and_one_vertical_flag() {
        assert_eq!(Alignment::LeftTop.text_align(), TextAlign::LEFT | TextAlign::TOP);
        assert_eq!(
            Alignment::CenterMiddle.text_align(),
            TextAlign::CENTER | TextAlign::MIDDLE
        );
        assert_eq!(
            Alignment::RightBottom.text_align(),
            TextAlign::RIGHT | TextAlign::BOTTOM
        );
    }

    #[test]
    fn text_align_flags_are_distinct_per_alignment() {
        let mut seen = std::collections::HashSet::new();
        for a in Alignment::ALL {
            assert!(seen.insert(a.text_align().bits()), "{a:?}");
        }
    }
}
