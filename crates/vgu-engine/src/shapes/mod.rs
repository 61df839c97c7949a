//! Pure shape geometry: border placement and right-angle triangle corners.
//!
//! Nothing here talks to a backend; the canvas turns these into path calls.

mod border;
mod triangle;

pub use border::{Border, BorderPlacement};
pub use triangle::TriangleCorner;
