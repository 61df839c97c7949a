use crate::backend::Backend;
use crate::coords::{Alignment, Vec2};
use crate::error::{Error, Result};
use crate::paint::{ApplyMode, Paint};

use super::Canvas;

/// Font face, size and anchor for one text draw or measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: String,
    pub size: f32,
    pub alignment: Alignment,
}

impl TextStyle {
    /// Left-top anchored style.
    pub fn new(font: impl Into<String>, size: f32) -> Self {
        Self {
            font: font.into(),
            size,
            alignment: Alignment::LeftTop,
        }
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// Defaults used by the style-less text calls.
#[derive(Debug, Clone, Default)]
pub(super) struct FontState {
    font: Option<String>,
    size: f32,
    alignment: Alignment,
}

impl<B: Backend> Canvas<B> {
    /// Sets the font defaults used by [`text`](Self::text),
    /// [`text_width`](Self::text_width) and [`text_height`](Self::text_height).
    pub fn set_font_data(&mut self, font: impl Into<String>, size: f32, alignment: Alignment) {
        self.font = FontState {
            font: Some(font.into()),
            size,
            alignment,
        };
    }

    pub fn current_font(&self) -> Option<&str> {
        self.font.font.as_deref()
    }

    pub fn current_font_size(&self) -> f32 {
        self.font.size
    }

    pub fn alignment(&self) -> Alignment {
        self.font.alignment
    }

    /// The current defaults as a style; fails when no font was selected.
    pub fn current_style(&self) -> Result<TextStyle> {
        let font = self.font.font.clone().ok_or(Error::NoFontSelected)?;
        Ok(TextStyle {
            font,
            size: self.font.size,
            alignment: self.font.alignment,
        })
    }

    /// Draws `text` at `pos` with the current font defaults.
    pub fn text(&mut self, text: &str, pos: Vec2, paint: impl Into<Paint>) -> Result<()> {
        let style = self.current_style()?;
        self.text_styled(text, pos, paint, &style)
    }

    /// Draws `text` filled with `paint`. A solid allocates one color; a
    /// gradient or texture paint is bound as is.
    pub fn text_styled(
        &mut self,
        text: &str,
        pos: Vec2,
        paint: impl Into<Paint>,
        style: &TextStyle,
    ) -> Result<()> {
        self.ensure_live()?;
        let paint = paint.into();
        if let Paint::Reference(r) = paint {
            self.arena.check(r)?;
        }
        let pos = pos.offset(0.0, self.config.text_baseline_nudge);

        self.backend.begin_path();
        paint.bind(&mut self.backend, &mut self.arena, ApplyMode::Fill)?;
        self.backend.font_face(&style.font);
        self.backend.font_size(style.size);
        self.backend.text_align(style.alignment.text_align());
        self.backend.text(pos, text);
        self.backend.close_path();
        Ok(())
    }

    // ── measurement ───────────────────────────────────────────────────────

    /// Advance width of `text` in the current font.
    pub fn text_width(&mut self, text: &str) -> Result<f32> {
        let style = self.current_style()?;
        self.text_width_with(text, &style)
    }

    /// Advance width of `text` in `style`. Font state changes are scoped to
    /// the measurement.
    pub fn text_width_with(&mut self, text: &str, style: &TextStyle) -> Result<f32> {
        let mut scope = self.transform_scope()?;
        scope.backend.font_face(&style.font);
        scope.backend.font_size(style.size);
        let [_, _, xmax, _] = scope.backend.text_bounds(Vec2::zero(), text);
        Ok(xmax)
    }

    /// Line height of the current font.
    pub fn text_height(&mut self) -> Result<f32> {
        let style = self.current_style()?;
        self.text_height_with(&style)
    }

    pub fn text_height_with(&mut self, style: &TextStyle) -> Result<f32> {
        let mut scope = self.transform_scope()?;
        scope.backend.font_face(&style.font);
        scope.backend.font_size(style.size);
        Ok(scope.backend.text_metrics().line_height)
    }
}
