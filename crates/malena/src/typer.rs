use crate::{
    event::{BACKSPACE, CharacterInput, EventOutcome, TextInputHandler},
    state::FocusState,
    text::{RenderSink, StoredText, Text},
};

/// A text-entry widget.
///
/// `Typer` accumulates characters typed while it holds focus and pushes the
/// result through its [`Text`], which wraps it for display if configured to.
/// The raw value is kept separately from the render text, so wrapping never
/// feeds back into what the user typed.
#[derive(Debug)]
pub struct Typer<S: RenderSink = StoredText> {
    /// Raw typed value.
    value: String,
    /// Display text.
    text: Text<S>,
    /// Focus state, set by whoever manages focus.
    focus: FocusState,
}

impl Default for Typer {
    fn default() -> Self {
        Self::new()
    }
}

impl Typer {
    /// An empty, unfocused typer with an in-memory sink.
    pub fn new() -> Self {
        Self::with_text(Text::new())
    }
}

impl<S: RenderSink> Typer<S> {
    /// An empty, unfocused typer displaying through `text`.
    pub fn with_text(text: Text<S>) -> Self {
        let mut typer = Self {
            value: String::new(),
            text,
            focus: FocusState::Unfocused,
        };
        typer.render();
        typer
    }

    /// Apply a single character event.
    ///
    /// Events are dropped unless the typer is focused. Backspace removes the
    /// last character; printable characters, newline and tab are appended;
    /// everything else is ignored.
    pub fn on_character_event(&mut self, event: CharacterInput) -> EventOutcome {
        if !self.check_state(FocusState::Focused) {
            tracing::debug!(unicode = event.unicode, "typer unfocused, dropping input");
            return EventOutcome::Ignore;
        }
        let Some(c) = event.char() else {
            tracing::debug!(unicode = event.unicode, "invalid code point, dropping input");
            return EventOutcome::Ignore;
        };
        match c {
            BACKSPACE => {
                self.value.pop();
            }
            c if c >= ' ' || c == '\n' || c == '\t' => self.value.push(c),
            _ => return EventOutcome::Ignore,
        }
        self.render();
        EventOutcome::Handle
    }

    /// The raw typed value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The text handed to the renderer.
    pub fn render_text(&self) -> &str {
        self.text.string()
    }

    /// Replace the value, regardless of focus.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.render();
    }

    /// Empty the value.
    pub fn clear(&mut self) {
        self.value.clear();
        self.render();
    }

    /// Set the focus state.
    pub fn set_focus(&mut self, focus: FocusState) {
        self.focus = focus;
    }

    /// The current focus state.
    pub fn focus(&self) -> FocusState {
        self.focus
    }

    /// True if the typer is in `state`.
    pub fn check_state(&self, state: FocusState) -> bool {
        self.focus == state
    }

    /// The display text.
    pub fn text(&self) -> &Text<S> {
        &self.text
    }

    /// Mutable access to the display text, for wrap configuration. Changes
    /// made through it re-render from the current value.
    pub fn text_mut(&mut self) -> &mut Text<S> {
        &mut self.text
    }

    /// Push the current value to the display text.
    fn render(&mut self) {
        self.text.set_string(&self.value);
    }
}

impl<S: RenderSink> TextInputHandler for Typer<S> {
    fn on_text_entered(&mut self, event: CharacterInput) -> EventOutcome {
        self.on_character_event(event)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::{config::WrapConfig, testing::FixedMetrics};

    fn focused() -> Typer {
        let mut t = Typer::new();
        t.set_focus(FocusState::Focused);
        t
    }

    fn type_str(t: &mut Typer, s: &str) {
        for c in s.chars() {
            t.on_character_event(c.into());
        }
    }

    #[test]
    fn typing_hello() {
        let mut t = focused();
        type_str(&mut t, "HELLO");
        assert_eq!(t.value(), "HELLO");
        assert_eq!(t.render_text(), "HELLO");
    }

    #[test]
    fn backspace_removes_last() {
        let mut t = focused();
        type_str(&mut t, "HE\u{8}");
        assert_eq!(t.value(), "H");
        assert_eq!(t.render_text(), "H");
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let mut t = focused();
        assert_eq!(t.on_character_event(BACKSPACE.into()), EventOutcome::Handle);
        assert_eq!(t.value(), "");
    }

    #[test]
    fn backspace_removes_whole_char() {
        let mut t = focused();
        type_str(&mut t, "a界\u{8}");
        assert_eq!(t.value(), "a");
    }

    #[test]
    fn unfocused_is_ignored() {
        let mut t = Typer::new();
        t.set_value("abc");
        assert_eq!(t.on_character_event('X'.into()), EventOutcome::Ignore);
        assert_eq!(t.on_character_event(BACKSPACE.into()), EventOutcome::Ignore);
        assert_eq!(t.value(), "abc");
    }

    #[test]
    fn newline_and_tab_insert_literally() {
        let mut t = focused();
        type_str(&mut t, "a\tb\nc");
        assert_eq!(t.value(), "a\tb\nc");
        assert_eq!(t.render_text(), "a\tb\nc");
    }

    #[test]
    fn other_controls_are_ignored() {
        let mut t = focused();
        type_str(&mut t, "a");
        for c in ['\u{0}', '\r', '\u{1b}', '\u{7}'] {
            assert_eq!(t.on_character_event(c.into()), EventOutcome::Ignore);
        }
        assert_eq!(
            t.on_character_event(CharacterInput::new(0xDFFF)),
            EventOutcome::Ignore
        );
        assert_eq!(t.value(), "a");
    }

    #[test]
    fn delete_is_printable() {
        // U+007F is above space, so it is appended like any other character.
        let mut t = focused();
        t.on_character_event('\u{7f}'.into());
        assert_eq!(t.value(), "\u{7f}");
    }

    #[test]
    fn wraps_every_keystroke() {
        let metrics = Rc::new(FixedMetrics::new(1.0));
        let text = Text::new()
            .with_metrics(&metrics)
            .with_config(WrapConfig::wrapped(7.0));
        let mut t = Typer::with_text(text);
        t.set_focus(FocusState::Focused);

        type_str(&mut t, "cat dog");
        assert_eq!(t.render_text(), "cat dog");
        type_str(&mut t, " f");
        assert_eq!(t.render_text(), "cat dog\nf");
        type_str(&mut t, "ox");
        assert_eq!(t.render_text(), "cat dog\nfox");
        assert_eq!(t.value(), "cat dog fox");

        type_str(&mut t, "\u{8}\u{8}\u{8}\u{8}");
        assert_eq!(t.render_text(), "cat dog");
        assert_eq!(t.value(), "cat dog");
    }

    #[test]
    fn trailing_space_never_widens_a_line() {
        let metrics = Rc::new(FixedMetrics::new(1.0));
        let text = Text::new()
            .with_metrics(&metrics)
            .with_config(WrapConfig::wrapped(7.0));
        let mut t = Typer::with_text(text);
        t.set_focus(FocusState::Focused);

        type_str(&mut t, "cat dog ");
        assert_eq!(t.value(), "cat dog ");
        assert_eq!(t.render_text(), "cat dog");
        type_str(&mut t, "  ");
        assert_eq!(t.render_text(), "cat dog");
        type_str(&mut t, "f");
        assert_eq!(t.render_text(), "cat dog\nf");
        assert_eq!(t.value(), "cat dog   f");
    }

    #[test]
    fn reconfiguring_rerenders_value() {
        let metrics = Rc::new(FixedMetrics::new(1.0));
        let mut t = Typer::with_text(Text::new().with_metrics(&metrics));
        t.set_value("cat dog fox");
        t.text_mut().set_config(WrapConfig::wrapped(3.0));
        assert_eq!(t.render_text(), "cat\ndog\nfox");
        t.text_mut().set_word_wrap(false);
        assert_eq!(t.render_text(), "cat dog fox");
    }

    #[test]
    fn clear_and_set_value() {
        let mut t = Typer::new();
        t.set_value("abc");
        assert_eq!(t.render_text(), "abc");
        t.clear();
        assert_eq!(t.value(), "");
        assert_eq!(t.render_text(), "");
    }

    #[test]
    fn focus_state() {
        let mut t = Typer::new();
        assert!(t.check_state(FocusState::Unfocused));
        t.set_focus(true.into());
        assert_eq!(t.focus(), FocusState::Focused);
        assert!(t.check_state(FocusState::Focused));
    }

    /// Reference model of focused editing.
    fn apply(model: &mut String, c: char) {
        if c == BACKSPACE {
            model.pop();
        } else if c >= ' ' || c == '\n' || c == '\t' {
            model.push(c);
        }
    }

    fn input_strategy() -> impl Strategy<Value = Vec<char>> {
        let chars = prop_oneof![
            4 => proptest::char::range('a', 'z'),
            2 => Just(BACKSPACE),
            1 => Just(' '),
            1 => Just('\n'),
            1 => Just('\t'),
            1 => Just('\r'),
            1 => Just('\u{0}'),
            1 => Just('é'),
        ];
        prop::collection::vec(chars, 0..60)
    }

    proptest! {
        #[test]
        fn focused_replay_matches_model(input in input_strategy()) {
            let mut t = focused();
            let mut model = String::new();
            for c in &input {
                t.on_character_event((*c).into());
                apply(&mut model, *c);
            }
            prop_assert_eq!(t.value(), model.as_str());

            // Replaying the same events onto a fresh typer gives the same
            // buffer.
            let mut again = focused();
            for c in &input {
                again.on_character_event((*c).into());
            }
            prop_assert_eq!(again.value(), t.value());
        }

        #[test]
        fn unfocused_never_mutates(start in "[a-z ]{0,20}", input in input_strategy()) {
            let mut t = Typer::new();
            t.set_value(start.clone());
            for c in input {
                prop_assert_eq!(t.on_character_event(c.into()), EventOutcome::Ignore);
            }
            prop_assert_eq!(t.value(), start.as_str());
            prop_assert_eq!(t.render_text(), start.as_str());
        }
    }
}
