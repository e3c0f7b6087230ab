//! Interaction state owned by widgets.

use std::fmt;

/// Whether a widget is the current target of keyboard input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusState {
    /// The widget receives keyboard input.
    Focused,
    /// The widget ignores keyboard input.
    #[default]
    Unfocused,
}

impl FocusState {
    /// True if this is [`FocusState::Focused`].
    pub fn is_focused(self) -> bool {
        self == Self::Focused
    }
}

impl From<bool> for FocusState {
    fn from(focused: bool) -> Self {
        if focused {
            Self::Focused
        } else {
            Self::Unfocused
        }
    }
}

impl fmt::Display for FocusState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Focused => write!(f, "focused"),
            Self::Unfocused => write!(f, "unfocused"),
        }
    }
}
