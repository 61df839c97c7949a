//! Native resources owned by a canvas.
//!
//! - [`ResourceArena`]: per-frame colors and paints, released in one sweep.
//! - [`TextureRegistry`]: images keyed by caller identifier, released when
//!   the canvas is destroyed.

mod arena;
mod textures;

pub use arena::ResourceArena;
pub use textures::TextureRegistry;
