use crate::backend::{CreateFlags, ImageFlags};

/// Canvas construction options.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    /// Flags passed to [`Backend::create`](crate::backend::Backend::create).
    pub create_flags: CreateFlags,
    /// Device pixel ratio passed to every `begin_frame`.
    pub pixel_ratio: f32,
    /// Image flags used by `create_texture` when none are given.
    pub texture_flags: ImageFlags,
    /// Added to the y coordinate of every text draw.
    pub text_baseline_nudge: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            create_flags: CreateFlags::default(),
            pixel_ratio: 1.0,
            texture_flags: ImageFlags::default(),
            text_baseline_nudge: 1.0,
        }
    }
}

impl CanvasConfig {
    pub fn with_create_flags(mut self, flags: CreateFlags) -> Self {
        self.create_flags = flags;
        self
    }

    pub fn with_pixel_ratio(mut self, ratio: f32) -> Self {
        self.pixel_ratio = ratio;
        self
    }

    pub fn with_texture_flags(mut self, flags: ImageFlags) -> Self {
        self.texture_flags = flags;
        self
    }

    pub fn with_text_baseline_nudge(mut self, nudge: f32) -> Self {
        self.text_baseline_nudge = nudge;
        self
    }
}
