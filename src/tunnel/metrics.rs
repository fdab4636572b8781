/// Natural (unscaled) bounding box of a laid-out string.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextBounds {
    /// Extent along the reading direction.
    pub width: f32,
    /// Extent across lines.
    pub height: f32,
}

/// Text-layout backend: measures a string in the scene's font.
///
/// Implementations must be pure; the wall layout is computed once and
/// assumes repeated measurements agree.
pub trait TextMetrics {
    /// Bounding box of `text` at the backend's font size.
    fn measure(&self, text: &str) -> TextBounds;
}

/// Monospace-style estimate: every glyph advances a fixed fraction of the
/// font size.
///
/// Good enough for uppercase display text when no font atlas is loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproxTextMetrics {
    /// Font size (cap height) in world units.
    pub font_size: f32,
    /// Glyph advance as a fraction of `font_size`.
    pub advance: f32,
}

impl ApproxTextMetrics {
    /// Estimator for the given font size and advance ratio.
    #[must_use]
    pub fn new(font_size: f32, advance: f32) -> Self {
        Self { font_size, advance }
    }
}

impl TextMetrics for ApproxTextMetrics {
    fn measure(&self, text: &str) -> TextBounds {
        let glyphs = text.chars().count() as f32;
        TextBounds {
            width: glyphs * self.font_size * self.advance,
            height: if text.is_empty() { 0.0 } else { self.font_size },
        }
    }
}

impl<M: TextMetrics + ?Sized> TextMetrics for &M {
    fn measure(&self, text: &str) -> TextBounds {
        (**self).measure(text)
    }
}
