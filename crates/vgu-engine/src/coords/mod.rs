//! Geometry types shared by the canvas, the paint builders and backends.
//!
//! Canvas space:
//! - origin top-left
//! - +X right, +Y down
//! - units are whatever the backend frame was opened with (usually pixels)

mod alignment;
mod corner_radii;
mod rect;
mod vec2;

pub use alignment::{Alignment, HorizontalAnchor, VerticalAnchor};
pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use vec2::Vec2;
