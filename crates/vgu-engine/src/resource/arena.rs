use std::sync::atomic::{AtomicU64, Ordering};

use crate::backend::{Backend, ColorHandle, PaintHandle, ResourceHandle};
use crate::error::{Error, Result};
use crate::paint::{Color, PaintRef};

/// Ordered set of native colors and paints allocated during one frame.
///
/// Every handle is owned by the arena from allocation until
/// [`free_all`](Self::free_all); nothing else releases it. The arena carries
/// a process-unique id and a generation counter that advances on every
/// sweep, so paints built by another arena or in an earlier frame can be
/// recognised and rejected.
#[derive(Debug)]
pub struct ResourceArena {
    id: u64,
    handles: Vec<ResourceHandle>,
    generation: u64,
}

static NEXT_ARENA_ID: AtomicU64 = AtomicU64::new(1);

impl Default for ResourceArena {
    fn default() -> Self {
        Self {
            id: NEXT_ARENA_ID.fetch_add(1, Ordering::Relaxed),
            handles: Vec::new(),
            generation: 0,
        }
    }
}

impl ResourceArena {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Records `handle` for release at the next sweep. No deduplication.
    #[inline]
    pub fn track(&mut self, handle: impl Into<ResourceHandle>) {
        self.handles.push(handle.into());
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Handles tracked since the last sweep, in allocation order.
    #[inline]
    pub fn handles(&self) -> &[ResourceHandle] {
        &self.handles
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Allocates a native color for `color` and tracks it.
    ///
    /// Each call is a fresh allocation, even for a color materialized
    /// earlier in the same frame.
    pub fn alloc_color<B: Backend>(
        &mut self,
        backend: &mut B,
        color: Color,
    ) -> Result<ColorHandle> {
        let handle = backend.alloc_color(color)?;
        self.track(handle);
        Ok(handle)
    }

    /// Tracks a freshly allocated native paint and stamps it with this
    /// arena's id and current generation.
    pub fn adopt_paint(&mut self, handle: PaintHandle) -> PaintRef {
        self.track(handle);
        PaintRef::new(handle, self.id, self.generation)
    }

    /// Fails with [`Error::ForeignPaint`] when `paint` belongs to another
    /// arena and with [`Error::StalePaint`] when it was built before the last
    /// sweep.
    #[inline]
    pub fn check(&self, paint: PaintRef) -> Result<()> {
        if paint.arena() != self.id {
            Err(Error::ForeignPaint)
        } else if paint.generation() != self.generation {
            Err(Error::StalePaint)
        } else {
            Ok(())
        }
    }

    /// Releases every tracked handle once and empties the arena.
    ///
    /// A failed release does not stop the sweep; the remaining handles are
    /// still attempted and [`Error::Release`] reports how many failed.
    /// Returns the number of handles released. Calling this on an empty
    /// arena is a no-op, apart from advancing the generation.
    pub fn free_all<B: Backend>(&mut self, backend: &mut B) -> Result<usize> {
        let total = self.handles.len();
        let mut failed = 0;

        for handle in self.handles.drain(..) {
            if let Err(err) = backend.release(handle) {
                log::warn!("failed to release {handle:?}: {err}");
                failed += 1;
            }
        }
        self.generation = self.generation.wrapping_add(1);

        if total > 0 {
            log::trace!("released {} of {total} frame resources", total - failed);
        }

        if failed > 0 {
            Err(Error::Release {
                failed,
                total,
            })
        } else {
            Ok(total)
        }
    }
}
