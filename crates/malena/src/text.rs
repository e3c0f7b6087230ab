use std::{
    fmt,
    rc::{Rc, Weak},
};

use crate::{
    config::{WrapConfig, clamp_width},
    metrics::{GlyphMetrics, ZeroMetrics},
    wrap,
};

/// The rendering layer's view of a text primitive: somewhere to put the
/// string that will be drawn.
pub trait RenderSink {
    /// Replace the text handed to the renderer.
    fn set_render_text(&mut self, text: &str);
    /// The text currently handed to the renderer.
    fn render_text(&self) -> &str;
}

/// A sink that just stores the render text. Useful headless, and as the
/// default when no graphics layer is attached.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StoredText {
    /// Stored render text.
    text: String,
}

impl RenderSink for StoredText {
    fn set_render_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }

    fn render_text(&self) -> &str {
        &self.text
    }
}

/// Display text with optional word wrapping.
///
/// `Text` owns a render sink and decides what string reaches it: the input
/// verbatim, or the input wrapped to `max_width` using the attached glyph
/// metrics. The last input is kept so the render text can be recomputed
/// whenever the configuration or the metrics change.
pub struct Text<S: RenderSink = StoredText> {
    /// Rendering primitive receiving the final string.
    sink: S,
    /// Last unwrapped string passed to `set_string`.
    source: String,
    /// Wrap settings.
    config: WrapConfig,
    /// Metrics provider. Held weakly; the font table owns fonts.
    metrics: Option<Weak<dyn GlyphMetrics>>,
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

impl Text {
    /// Empty text with an in-memory sink.
    pub fn new() -> Self {
        Self::with_sink(StoredText::default())
    }
}

impl<S: RenderSink> Text<S> {
    /// Empty text rendering into `sink`.
    pub fn with_sink(sink: S) -> Self {
        Self {
            sink,
            source: String::new(),
            config: WrapConfig::default(),
            metrics: None,
        }
    }

    /// Attach a glyph metrics provider. Only a weak reference is kept.
    pub fn with_metrics<M: GlyphMetrics + 'static>(mut self, metrics: &Rc<M>) -> Self {
        self.set_metrics(metrics);
        self
    }

    /// Start with the given wrap settings.
    pub fn with_config(mut self, config: WrapConfig) -> Self {
        self.set_config(config);
        self
    }

    /// Set the displayed text, wrapping it if word wrap is on.
    pub fn set_string(&mut self, text: &str) {
        text.clone_into(&mut self.source);
        self.refresh();
    }

    /// The text currently handed to the renderer.
    pub fn string(&self) -> &str {
        self.sink.render_text()
    }

    /// The last unwrapped string passed to [`Text::set_string`].
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of rendered lines.
    pub fn line_count(&self) -> usize {
        self.string().split('\n').count()
    }

    /// Turn word wrapping on or off. The render text is recomputed.
    pub fn set_word_wrap(&mut self, word_wrap: bool) {
        self.config.word_wrap = word_wrap;
        self.refresh();
    }

    /// Whether word wrapping is on.
    pub fn word_wrap(&self) -> bool {
        self.config.word_wrap
    }

    /// Set the maximum line width. Negative and non-finite values become 0.
    pub fn set_max_width(&mut self, max_width: f32) {
        self.config.max_width = clamp_width(max_width);
        self.refresh();
    }

    /// The maximum line width.
    pub fn max_width(&self) -> f32 {
        self.config.max_width
    }

    /// The current wrap settings.
    pub fn config(&self) -> WrapConfig {
        self.config
    }

    /// Replace the wrap settings.
    pub fn set_config(&mut self, config: WrapConfig) {
        self.config = config.normalized();
        self.refresh();
    }

    /// Attach a glyph metrics provider, keeping only a weak reference.
    pub fn set_metrics<M: GlyphMetrics + 'static>(&mut self, metrics: &Rc<M>) {
        let metrics: Rc<dyn GlyphMetrics> = metrics.clone();
        self.metrics = Some(Rc::downgrade(&metrics));
        self.refresh();
    }

    /// Detach the glyph metrics provider.
    pub fn clear_metrics(&mut self) {
        self.metrics = None;
        self.refresh();
    }

    /// The render sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the render sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Recompute the render text from the stored source.
    pub fn refresh(&mut self) {
        if !self.config.word_wrap {
            self.sink.set_render_text(&self.source);
            return;
        }
        let max_width = self.config.max_width;
        let wrapped = match self.metrics.as_ref().map(Weak::upgrade) {
            Some(Some(metrics)) => wrap::word_wrap(&self.source, max_width, &*metrics),
            Some(None) => {
                tracing::warn!("glyph metrics released, wrapping with zero widths");
                wrap::word_wrap(&self.source, max_width, &ZeroMetrics)
            }
            None => wrap::word_wrap(&self.source, max_width, &ZeroMetrics),
        };
        self.sink.set_render_text(&wrapped);
    }
}

impl<S: RenderSink + fmt::Debug> fmt::Debug for Text<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Text")
            .field("sink", &self.sink)
            .field("source", &self.source)
            .field("config", &self.config)
            .field("metrics", &self.metrics.is_some())
            .finish()
    }
}
