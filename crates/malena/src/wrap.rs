//! Greedy word wrapping against measured glyph widths.
//!
//! Wrapping works paragraph by paragraph: every `'\n'` in the input is a hard
//! break and survives untouched. Within a paragraph, text is split into words
//! (runs of non-whitespace) and separators (runs of whitespace). Words are
//! laid onto the current line while the measured width of the line stays
//! within the limit; when the next word would overflow, the separator before
//! it is replaced by a line break.
//!
//! Whitespace policy:
//!
//! - Separator runs between words on the same line are kept verbatim, so
//!   `"a  b"` stays `"a  b"` when it fits.
//! - The separator at a break point is dropped and replaced by `'\n'`.
//! - Leading and trailing whitespace of a paragraph is kept only as far as it
//!   fits: the run is cut down to the part the line has room for, so `"ab "`
//!   at the width of `"ab"` renders as `"ab"`. A whitespace-only paragraph
//!   keeps as much of itself as fits on one line.
//!
//! No line is wider than the limit, except one holding a single word that is
//! wider than the limit on its own. Words are never split.

use std::mem;

use crate::metrics::GlyphMetrics;

/// Running width of a line, carrying the last glyph for kerning.
struct Meter<'a, M: ?Sized> {
    /// Glyph metrics source.
    metrics: &'a M,
    /// Width accumulated so far.
    width: f32,
    /// Last character measured, used for kerning against the next.
    last: Option<char>,
}

impl<'a, M: GlyphMetrics + ?Sized> Meter<'a, M> {
    /// An empty line.
    fn new(metrics: &'a M) -> Self {
        Self {
            metrics,
            width: 0.0,
            last: None,
        }
    }

    /// Width and trailing glyph the line would have after appending `s`.
    fn extended(&self, s: &str) -> (f32, Option<char>) {
        let mut width = self.width;
        let mut last = self.last;
        for ch in s.chars() {
            if let Some(prev) = last {
                width += self.metrics.kerning(prev, ch);
            }
            width += advance_or_zero(self.metrics, ch);
            last = Some(ch);
        }
        (width, last)
    }

    /// Append `s` to the line.
    fn push(&mut self, s: &str) {
        (self.width, self.last) = self.extended(s);
    }
}

impl<M: ?Sized> Clone for Meter<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: ?Sized> Copy for Meter<'_, M> {}

/// Advance for `ch`, treating unmeasurable glyphs as zero width.
fn advance_or_zero<M: GlyphMetrics + ?Sized>(metrics: &M, ch: char) -> f32 {
    match metrics.advance(ch) {
        Some(w) => w,
        None => {
            tracing::trace!(?ch, "no glyph metrics, measuring as zero width");
            0.0
        }
    }
}

/// Measured width of `text` as a single line.
pub fn measure<M: GlyphMetrics + ?Sized>(text: &str, metrics: &M) -> f32 {
    let mut meter = Meter::new(metrics);
    meter.push(text);
    meter.width
}

/// Split a paragraph into `(separator, word)` pairs plus the trailing
/// whitespace run.
fn pieces(paragraph: &str) -> (Vec<(&str, &str)>, &str) {
    let mut out = Vec::new();
    let mut rest = paragraph;
    loop {
        let sep_end = rest
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(rest.len());
        let (sep, tail) = rest.split_at(sep_end);
        if tail.is_empty() {
            return (out, sep);
        }
        let word_end = tail.find(char::is_whitespace).unwrap_or(tail.len());
        let (word, tail) = tail.split_at(word_end);
        out.push((sep, word));
        rest = tail;
    }
}

/// The longest tail of `lead` that fits in front of `word` on an empty line.
fn fitting_lead<'s, M: GlyphMetrics + ?Sized>(
    lead: &'s str,
    word: &str,
    max_width: f32,
    metrics: &M,
) -> &'s str {
    for (idx, _) in lead.char_indices() {
        let mut meter = Meter::new(metrics);
        meter.push(&lead[idx..]);
        meter.push(word);
        if meter.width <= max_width {
            return &lead[idx..];
        }
    }
    ""
}

/// The longest head of `run` that `meter` can take without passing
/// `max_width`.
fn fitting_tail<'s, M: GlyphMetrics + ?Sized>(
    mut meter: Meter<'_, M>,
    run: &'s str,
    max_width: f32,
) -> &'s str {
    let mut end = 0;
    for (idx, ch) in run.char_indices() {
        let next = idx + ch.len_utf8();
        let (width, _) = meter.extended(&run[idx..next]);
        if width > max_width {
            break;
        }
        meter.push(&run[idx..next]);
        end = next;
    }
    &run[..end]
}

/// Wrap a single paragraph (no `'\n'`), appending its lines to `lines`.
fn wrap_paragraph<M: GlyphMetrics + ?Sized>(
    paragraph: &str,
    max_width: f32,
    metrics: &M,
    lines: &mut Vec<String>,
) {
    let (words, trailing) = pieces(paragraph);
    let mut line = String::new();
    let mut meter = Meter::new(metrics);

    for (idx, (sep, word)) in words.into_iter().enumerate() {
        if idx == 0 {
            let lead = fitting_lead(sep, word, max_width, metrics);
            line.push_str(lead);
            line.push_str(word);
            meter.push(lead);
            meter.push(word);
            continue;
        }
        let mut candidate = meter;
        candidate.push(sep);
        candidate.push(word);
        if candidate.width <= max_width {
            line.push_str(sep);
            line.push_str(word);
            meter = candidate;
        } else {
            lines.push(mem::take(&mut line));
            line.push_str(word);
            meter = Meter::new(metrics);
            meter.push(word);
        }
    }
    line.push_str(fitting_tail(meter, trailing, max_width));
    lines.push(line);
}

/// Wrap `text` to `max_width`, returning the resulting lines.
///
/// Always returns at least one line; the empty string wraps to `[""]`.
pub fn wrap_lines<M: GlyphMetrics + ?Sized>(
    text: &str,
    max_width: f32,
    metrics: &M,
) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, max_width, metrics, &mut lines);
    }
    lines
}

/// Wrap `text` to `max_width`, joining lines with `'\n'`.
pub fn word_wrap<M: GlyphMetrics + ?Sized>(text: &str, max_width: f32, metrics: &M) -> String {
    wrap_lines(text, max_width, metrics).join("\n")
}
