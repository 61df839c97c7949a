use std::collections::HashMap;

use crate::backend::{Backend, ImageFlags, ImageHandle};
use crate::error::{Error, Result};

/// Images registered under caller-chosen identifiers.
///
/// Registration is first-wins: a second registration under an existing
/// identifier does not touch the backend and keeps the first image.
#[derive(Debug, Default)]
pub struct TextureRegistry {
    images: HashMap<String, ImageHandle>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes `bytes` into a native image under `id` unless `id` is taken.
    ///
    /// Returns the image registered under `id` after the call.
    pub fn register<B: Backend>(
        &mut self,
        backend: &mut B,
        id: &str,
        bytes: &[u8],
        flags: ImageFlags,
    ) -> Result<ImageHandle> {
        if let Some(&image) = self.images.get(id) {
            log::debug!("texture `{id}` already registered; keeping {image:?}");
            return Ok(image);
        }

        let image = backend.create_image(flags, bytes)?;
        log::debug!("registered texture `{id}` as {image:?} ({flags:?})");
        self.images.insert(id.to_owned(), image);
        Ok(image)
    }

    pub fn get(&self, id: &str) -> Result<ImageHandle> {
        self.images
            .get(id)
            .copied()
            .ok_or_else(|| Error::UnknownTexture(id.to_owned()))
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.images.contains_key(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Deletes every registered image and forgets all identifiers.
    pub fn clear<B: Backend>(&mut self, backend: &mut B) {
        for (id, image) in self.images.drain() {
            log::trace!("deleting texture `{id}` ({image:?})");
            backend.delete_image(image);
        }
    }
}
