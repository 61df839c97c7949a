use crate::coords::{Rect, Vec2};

/// Corner of the bounding box that holds the right angle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TriangleCorner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl TriangleCorner {
    pub const ALL: [TriangleCorner; 4] = [
        TriangleCorner::TopLeft,
        TriangleCorner::TopRight,
        TriangleCorner::BottomLeft,
        TriangleCorner::BottomRight,
    ];

    /// Vertices in path order: the right-angle corner, its horizontal
    /// neighbour, then its vertical neighbour.
    pub fn points(self, rect: Rect) -> [Vec2; 3] {
        let (x0, y0) = (rect.x(), rect.y());
        let Vec2 { x: x1, y: y1 } = rect.max();

        let pts = match self {
            TriangleCorner::TopLeft => [(x0, y0), (x1, y0), (x0, y1)],
            TriangleCorner::TopRight => [(x1, y0), (x0, y0), (x1, y1)],
            TriangleCorner::BottomLeft => [(x0, y1), (x1, y1), (x0, y0)],
            TriangleCorner::BottomRight => [(x1, y1), (x0, y1), (x1, y0)],
        };
        pts.map(Vec2::from)
    }
}
