use bitflags::bitflags;

bitflags! {
    /// Options passed to [`Backend::create`](super::Backend::create).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CreateFlags: u32 {
        /// Geometry-based anti-aliasing.
        const ANTIALIAS = 1 << 0;
        /// Stencil-buffer strokes: overlapping stroke segments are drawn once.
        const STENCIL_STROKES = 1 << 1;
        /// Extra backend-side validation.
        const DEBUG = 1 << 2;
    }
}

impl Default for CreateFlags {
    fn default() -> Self {
        CreateFlags::ANTIALIAS | CreateFlags::STENCIL_STROKES
    }
}

bitflags! {
    /// Sampling and upload options for images created from bytes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ImageFlags: u32 {
        const GENERATE_MIPMAPS = 1 << 0;
        const REPEAT_X = 1 << 1;
        const REPEAT_Y = 1 << 2;
        const FLIP_Y = 1 << 3;
        const PREMULTIPLIED = 1 << 4;
        /// Nearest-neighbour sampling instead of linear.
        const NEAREST = 1 << 5;
    }
}

impl Default for ImageFlags {
    fn default() -> Self {
        ImageFlags::NEAREST
    }
}

bitflags! {
    /// Native text anchor. Combine one horizontal and one vertical flag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TextAlign: u32 {
        const LEFT = 1 << 0;
        const CENTER = 1 << 1;
        const RIGHT = 1 << 2;
        const TOP = 1 << 3;
        const MIDDLE = 1 << 4;
        const BOTTOM = 1 << 5;
        const BASELINE = 1 << 6;
    }
}
