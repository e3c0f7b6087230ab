//! Helpers for exercising text layout without loading a font.

use std::collections::HashMap;

use crate::metrics::GlyphMetrics;

/// A monospace metrics provider: every character has the same advance,
/// unless overridden. Characters can also be marked as unmeasurable.
#[derive(Debug, Clone)]
pub struct FixedMetrics {
    /// Default advance for all characters.
    advance: f32,
    /// Per-character overrides. `None` marks a glyph as missing.
    overrides: HashMap<char, Option<f32>>,
    /// Kerning adjustments for specific pairs.
    kerning: HashMap<(char, char), f32>,
}

impl FixedMetrics {
    /// Every character advances by `advance`.
    pub fn new(advance: f32) -> Self {
        Self {
            advance,
            overrides: HashMap::new(),
            kerning: HashMap::new(),
        }
    }

    /// Override the advance for a single character.
    pub fn with_advance(mut self, ch: char, advance: f32) -> Self {
        self.overrides.insert(ch, Some(advance));
        self
    }

    /// Mark a character as unmeasurable.
    pub fn with_missing(mut self, ch: char) -> Self {
        self.overrides.insert(ch, None);
        self
    }

    /// Add a kerning adjustment for an adjacent pair.
    pub fn with_kerning(mut self, prev: char, ch: char, adjust: f32) -> Self {
        self.kerning.insert((prev, ch), adjust);
        self
    }
}

impl GlyphMetrics for FixedMetrics {
    fn advance(&self, ch: char) -> Option<f32> {
        match self.overrides.get(&ch) {
            Some(over) => *over,
            None => Some(self.advance),
        }
    }

    fn kerning(&self, prev: char, ch: char) -> f32 {
        self.kerning.get(&(prev, ch)).copied().unwrap_or(0.0)
    }
}
