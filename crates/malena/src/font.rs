use std::{
    collections::HashMap,
    fmt,
    fs::File,
    io::Read,
    path::{Path, PathBuf},
    rc::Rc,
};

use fontdue::{Font as FontdueFont, FontSettings};

use crate::{
    config::{DEFAULT_FONT_SIZE, FontConfig},
    error::{Error, Result},
    metrics::GlyphMetrics,
};

/// A parsed font measured at a fixed pixel size.
#[derive(Clone)]
pub struct Font {
    /// Parsed font data.
    font: FontdueFont,
    /// Pixel size used for metrics.
    size_px: f32,
}

impl Font {
    /// Load a font from in-memory bytes.
    pub fn from_bytes(data: impl AsRef<[u8]>) -> Result<Self> {
        let font = FontdueFont::from_bytes(data.as_ref(), FontSettings::default())
            .map_err(Error::FontLoad)?;
        Ok(Self {
            font,
            size_px: DEFAULT_FONT_SIZE,
        })
    }

    /// Load a font from a reader.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Self::from_bytes(buf)
    }

    /// Load a font file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    /// Measure at a different pixel size.
    pub fn with_size(mut self, size_px: f32) -> Self {
        self.size_px = size_px;
        self
    }

    /// Pixel size used for metrics.
    pub fn size(&self) -> f32 {
        self.size_px
    }

    /// Return the font name, if provided in metadata.
    pub fn name(&self) -> Option<&str> {
        self.font.name()
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("name", &self.name())
            .field("size_px", &self.size_px)
            .finish()
    }
}

impl GlyphMetrics for Font {
    fn advance(&self, ch: char) -> Option<f32> {
        if !self.font.has_glyph(ch) {
            return None;
        }
        Some(self.font.metrics(ch, self.size_px).advance_width)
    }

    fn kerning(&self, prev: char, ch: char) -> f32 {
        self.font
            .horizontal_kern(prev, ch, self.size_px)
            .unwrap_or(0.0)
    }
}

/// Fonts known to the font table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontId {
    /// Arial, the default UI font.
    Arial,
}

impl FontId {
    /// File name of this font inside the font directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Arial => "arial.ttf",
        }
    }
}

/// A table of loaded fonts.
///
/// Fonts are loaded from `font_dir` the first time they are requested and
/// stay loaded until released. The table owns the fonts; widgets hold weak
/// references through [`crate::Text::set_metrics`], so releasing a font
/// while a widget still points at it degrades that widget to zero-width
/// measurement rather than keeping the font alive.
#[derive(Debug)]
pub struct FontManager {
    /// Directory fonts are loaded from.
    font_dir: PathBuf,
    /// Pixel size fonts are measured at.
    size_px: f32,
    /// Loaded fonts.
    fonts: HashMap<FontId, Rc<Font>>,
}

impl FontManager {
    /// An empty table loading from `config.font_dir`.
    pub fn new(config: &FontConfig) -> Self {
        Self {
            font_dir: config.font_dir.clone(),
            size_px: config.size_px,
            fonts: HashMap::new(),
        }
    }

    /// The default font id.
    pub fn default_font() -> FontId {
        FontId::Arial
    }

    /// Path a font would be loaded from.
    pub fn path(&self, id: FontId) -> PathBuf {
        self.font_dir.join(id.file_name())
    }

    /// Get a font, loading it on first use.
    pub fn get(&mut self, id: FontId) -> Result<Rc<Font>> {
        if let Some(font) = self.fonts.get(&id) {
            return Ok(Rc::clone(font));
        }
        let path = self.path(id);
        tracing::debug!(?id, path = %path.display(), "loading font");
        let font = Rc::new(Font::from_path(&path)?.with_size(self.size_px));
        self.fonts.insert(id, Rc::clone(&font));
        Ok(font)
    }

    /// Register an already loaded font, replacing any existing entry.
    pub fn insert(&mut self, id: FontId, font: Font) -> Rc<Font> {
        let font = Rc::new(font);
        self.fonts.insert(id, Rc::clone(&font));
        font
    }

    /// True if the font is loaded.
    pub fn is_loaded(&self, id: FontId) -> bool {
        self.fonts.contains_key(&id)
    }

    /// Drop the table's reference to a font. Returns true if it was loaded.
    pub fn release(&mut self, id: FontId) -> bool {
        self.fonts.remove(&id).is_some()
    }

    /// Drop every loaded font.
    pub fn clear(&mut self) {
        self.fonts.clear();
    }
}
