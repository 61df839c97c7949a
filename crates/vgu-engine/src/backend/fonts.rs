use std::collections::HashMap;
use std::fmt;

use super::{BackendError, TextMetrics};

/// Parsed fonts keyed by the name they were registered under.
///
/// Backends without a native text engine use this for measurement: advance
/// widths come from a fontdue layout and vertical metrics from the font's
/// horizontal line metrics.
#[derive(Default)]
pub struct FontBook {
    fonts: HashMap<String, fontdue::Font>,
}

impl fmt::Debug for FontBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.fonts.keys()).finish()
    }
}

impl FontBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TrueType or OpenType font and stores it under `name`.
    ///
    /// A later load under the same name replaces the earlier font.
    pub fn load(&mut self, name: &str, bytes: &[u8]) -> Result<(), BackendError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| BackendError::Font(format!("`{name}`: {e}")))?;
        self.fonts.insert(name.to_owned(), font);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fonts.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Advance width of `text` laid out on one line at `size` pixels.
    ///
    /// `None` when `name` is not loaded.
    pub fn advance_width(&self, name: &str, text: &str, size: f32) -> Option<f32> {
        use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

        let font = self.fonts.get(name)?;
        if text.is_empty() || size <= 0.0 {
            return Some(0.0);
        }

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size, 0));

        // pen position after each glyph, not the bitmap edge
        let width = layout
            .glyphs()
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        Some(width)
    }

    /// Ascender, descender and line height at `size` pixels.
    ///
    /// `None` when `name` is not loaded or the font has no horizontal metrics.
    pub fn metrics(&self, name: &str, size: f32) -> Option<TextMetrics> {
        let lm = self.fonts.get(name)?.horizontal_line_metrics(size)?;
        Some(TextMetrics {
            ascender: lm.ascent,
            descender: lm.descent,
            line_height: lm.new_line_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_a_font_error() {
        let mut book = FontBook::new();
        let err = book.load("broken", b"definitely not a font").unwrap_err();
        assert!(matches!(err, BackendError::Font(msg) if msg.starts_with("`broken`")));
        assert!(book.is_empty());
    }

    #[test]
    fn unknown_font_measures_nothing() {
        let book = FontBook::new();
        assert!(!book.contains("arial"));
        assert_eq!(book.advance_width("arial", "abc", 12.0), None);
        assert_eq!(book.metrics("arial", 12.0), None);
    }
}
