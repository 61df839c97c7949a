use crate::backend::{Backend, PaintHandle};
use crate::error::Result;
use crate::resource::ResourceArena;

use super::Color;

/// Whether a paint is applied to the interior or the outline of a path.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ApplyMode {
    Fill,
    Stroke,
}

/// Native gradient or image-pattern paint built during the current frame.
///
/// Carries the id of the arena that owns it and the generation it was built
/// in. It is only usable on the canvas that built it, and only until that
/// frame's resources are released.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PaintRef {
    handle: PaintHandle,
    arena: u64,
    generation: u64,
}

impl PaintRef {
    #[inline]
    pub(crate) fn new(handle: PaintHandle, arena: u64, generation: u64) -> Self {
        Self {
            handle,
            arena,
            generation,
        }
    }

    #[inline]
    pub fn handle(self) -> PaintHandle {
        self.handle
    }

    /// Id of the owning [`ResourceArena`].
    #[inline]
    pub fn arena(self) -> u64 {
        self.arena
    }

    #[inline]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// What a path is filled or stroked with.
///
/// A `Solid` is a plain color and costs one native color allocation each
/// time it is applied. A `Reference` points at a paint that was allocated
/// when it was built and allocates nothing when applied.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Reference(PaintRef),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    #[inline]
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Paint::Solid(c) => Some(*c),
            Paint::Reference(_) => None,
        }
    }

    #[inline]
    pub fn as_reference(&self) -> Option<PaintRef> {
        match self {
            Paint::Solid(_) => None,
            Paint::Reference(r) => Some(*r),
        }
    }

    /// Makes this paint the current fill or stroke paint without drawing.
    ///
    /// A solid allocates one native color; a reference is checked against
    /// `arena` and bound as is.
    pub fn bind<B: Backend>(
        &self,
        backend: &mut B,
        arena: &mut ResourceArena,
        mode: ApplyMode,
    ) -> Result<()> {
        match *self {
            Paint::Solid(color) => {
                let handle = arena.alloc_color(backend, color)?;
                match mode {
                    ApplyMode::Fill => backend.fill_color(handle),
                    ApplyMode::Stroke => backend.stroke_color(handle),
                }
            }
            Paint::Reference(paint) => {
                arena.check(paint)?;
                match mode {
                    ApplyMode::Fill => backend.fill_paint(paint.handle),
                    ApplyMode::Stroke => backend.stroke_paint(paint.handle),
                }
            }
        }
        Ok(())
    }

    /// Binds this paint for `mode` and issues the matching fill or stroke on
    /// the current path.
    pub fn apply<B: Backend>(
        &self,
        backend: &mut B,
        arena: &mut ResourceArena,
        mode: ApplyMode,
    ) -> Result<()> {
        self.bind(backend, arena, mode)?;
        match mode {
            ApplyMode::Fill => backend.fill(),
            ApplyMode::Stroke => backend.stroke(),
        }
        Ok(())
    }
}

impl From<Color> for Paint {
    #[inline]
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

impl From<PaintRef> for Paint {
    #[inline]
    fn from(r: PaintRef) -> Self {
        Paint::Reference(r)
    }
}

impl From<&Paint> for Paint {
    #[inline]
    fn from(p: &Paint) -> Self {
        *p
    }
}
