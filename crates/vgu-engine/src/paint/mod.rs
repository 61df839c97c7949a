//! Paint model.
//!
//! Scope:
//! - straight-alpha RGBA colors
//! - the solid / native-reference paint sum type and its fill/stroke dispatch
//! - gradient requests and their direction/alignment geometry

mod color;
mod gradient;
#[allow(clippy::module_inception)]
mod paint;

pub use color::Color;
pub use gradient::{LinearDirection, LinearGradient, RadialGradient};
pub use paint::{ApplyMode, Paint, PaintRef};
