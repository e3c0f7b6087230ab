//! Character input events and the router that delivers them to widgets.

/// Non-owning handler registry.
mod router;

pub use router::{InputRouter, TextInputHandler};

/// Backspace as delivered by the windowing layer's text-entry events.
pub const BACKSPACE: char = '\u{8}';

/// The result of an event handler.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EventOutcome {
    /// The event was processed and propagation stops.
    Handle,
    /// The event was not handled and may be offered to another handler.
    Ignore,
}

/// A text-entry event carrying a single Unicode code point.
///
/// Windowing layers report text entry as a raw scalar value, which is not
/// guaranteed to be a valid `char`. Consumers should go through
/// [`CharacterInput::char`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct CharacterInput {
    /// Raw Unicode code point.
    pub unicode: u32,
}

impl CharacterInput {
    /// Construct an event from a raw code point.
    pub fn new(unicode: u32) -> Self {
        Self { unicode }
    }

    /// The character carried by this event, if the code point is valid.
    pub fn char(&self) -> Option<char> {
        char::from_u32(self.unicode)
    }

    /// True if this event is a backspace.
    pub fn is_backspace(&self) -> bool {
        self.char() == Some(BACKSPACE)
    }
}

impl From<char> for CharacterInput {
    fn from(c: char) -> Self {
        Self { unicode: c as u32 }
    }
}
