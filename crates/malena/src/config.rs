//! Configuration values for text widgets and the font table.

use std::{env, path::PathBuf};

use serde::{Deserialize, Serialize};

/// Default pixel size used when rasterizing font metrics.
pub const DEFAULT_FONT_SIZE: f32 = 24.0;

/// Word-wrap settings for a text widget.
///
/// `max_width` is only consulted while `word_wrap` is on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapConfig {
    /// Wrap the displayed text at word boundaries.
    pub word_wrap: bool,
    /// Maximum line width, in glyph-advance units.
    pub max_width: f32,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            word_wrap: false,
            max_width: 0.0,
        }
    }
}

impl WrapConfig {
    /// Wrapping enabled at the given width.
    pub fn wrapped(max_width: f32) -> Self {
        Self {
            word_wrap: true,
            max_width: clamp_width(max_width),
        }
    }

    /// Read `MALENA_WORD_WRAP` and `MALENA_MAX_WIDTH`, falling back to the
    /// defaults for anything missing or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            word_wrap: env::var("MALENA_WORD_WRAP")
                .ok()
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.word_wrap),
            max_width: env::var("MALENA_MAX_WIDTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(clamp_width)
                .unwrap_or(defaults.max_width),
        }
    }

    /// Return a copy with `max_width` clamped to a finite, non-negative value.
    pub fn normalized(self) -> Self {
        Self {
            word_wrap: self.word_wrap,
            max_width: clamp_width(self.max_width),
        }
    }
}

/// Where fonts are loaded from, and at what size they are measured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Directory holding font files.
    pub font_dir: PathBuf,
    /// Pixel size fonts are measured at.
    pub size_px: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            font_dir: PathBuf::from("assets/fonts"),
            size_px: DEFAULT_FONT_SIZE,
        }
    }
}

impl FontConfig {
    /// Read `MALENA_FONT_DIR` and `MALENA_FONT_SIZE`, falling back to the
    /// defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            font_dir: env::var("MALENA_FONT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.font_dir),
            size_px: env::var("MALENA_FONT_SIZE")
                .ok()
                .and_then(|v| v.parse::<f32>().ok())
                .filter(|v| v.is_finite() && *v > 0.0)
                .unwrap_or(defaults.size_px),
        }
    }
}

/// Clamp a width to a finite, non-negative value.
pub(crate) fn clamp_width(width: f32) -> f32 {
    if width.is_finite() { width.max(0.0) } else { 0.0 }
}

/// Parse the usual spellings of a boolean flag.
fn parse_bool(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
