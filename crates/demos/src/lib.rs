//! Drivers that exercise malena widgets from a terminal.

/// Line-oriented typing session.
pub mod typergym;
