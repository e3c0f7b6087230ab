//! Glyph measurement used by word wrapping.

/// A source of horizontal glyph advances, usually a font at a fixed size.
///
/// Widths are in whatever unit the provider works in (pixels for a
/// rasterizing font). Callers compare them against a maximum width in the
/// same unit.
pub trait GlyphMetrics {
    /// Advance width of a character, or `None` if the provider cannot
    /// measure it.
    fn advance(&self, ch: char) -> Option<f32>;

    /// Kerning adjustment applied between `prev` and `ch` when they are
    /// adjacent.
    fn kerning(&self, _prev: char, _ch: char) -> f32 {
        0.0
    }
}

impl<T: GlyphMetrics + ?Sized> GlyphMetrics for &T {
    fn advance(&self, ch: char) -> Option<f32> {
        (**self).advance(ch)
    }

    fn kerning(&self, prev: char, ch: char) -> f32 {
        (**self).kerning(prev, ch)
    }
}

/// Metrics that measure every glyph as zero width. Used when no provider is
/// attached, so that wrapping degrades to a single line per paragraph.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroMetrics;

impl GlyphMetrics for ZeroMetrics {
    fn advance(&self, _ch: char) -> Option<f32> {
        Some(0.0)
    }
}
