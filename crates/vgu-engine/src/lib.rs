//! vgu engine crate.
//!
//! A stateful drawing façade over an immediate-mode 2D vector [`Backend`].
//! Callers describe shapes, text and paints (solid colors, linear/radial
//! gradients, image patterns); the [`Canvas`] drives the backend's path
//! protocol, owns every per-frame native allocation in a [`ResourceArena`],
//! and releases them in one sweep when the frame closes.
//!
//! ```no_run
//! use vgu_engine::backend::recording::RecordingBackend;
//! use vgu_engine::coords::Rect;
//! use vgu_engine::paint::{Color, LinearDirection, LinearGradient};
//! use vgu_engine::Canvas;
//!
//! # fn main() -> vgu_engine::Result<()> {
//! let mut canvas = Canvas::with_defaults(RecordingBackend::new())?;
//! canvas.frame(600.0, 300.0, |c| {
//!     let bounds = Rect::new(10.0, 10.0, 100.0, 50.0);
//!     let fade = c.linear_gradient(&LinearGradient::new(
//!         bounds,
//!         Color::RED,
//!         Color::GREEN,
//!         LinearDirection::LeftToRight,
//!     ))?;
//!     c.rect(bounds, fade)
//! })?;
//! # Ok(())
//! # }
//! ```
//!
//! [`Backend`]: backend::Backend
//! [`ResourceArena`]: resource::ResourceArena

pub mod backend;
pub mod canvas;
pub mod config;
pub mod coords;
pub mod error;
pub mod logging;
pub mod paint;
pub mod resource;
pub mod shapes;

pub use canvas::{Canvas, TextStyle, TransformScope};
pub use config::CanvasConfig;
pub use error::{Error, Result};
