//! Malena: text-entry primitives for 2D interfaces.
//!
//! The crate provides a focus-gated text input widget ([`Typer`]) and a
//! display text ([`Text`]) that can word-wrap its content against real glyph
//! advances. Rendering, windows and event loops belong to the host graphics
//! layer; malena talks to it through a handful of small traits:
//!
//! - [`RenderSink`] receives the final string to draw.
//! - [`GlyphMetrics`] measures characters, usually a [`Font`].
//! - [`TextInputHandler`] receives text-entry events, typically through an
//!   [`InputRouter`].
//!
//! # Module Organization
//!
//! - [`wrap`] - Greedy word wrapping against measured widths
//! - [`event`] - Character input events and routing
//! - [`config`] - Wrap and font configuration

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod event;
/// Fonts and the font table.
mod font;
pub mod metrics;
/// Focus state.
mod state;
/// Display text.
mod text;
/// Text-entry widget.
mod typer;
pub mod wrap;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::{FontConfig, WrapConfig};
pub use error::{Error, Result};
pub use event::{CharacterInput, EventOutcome, InputRouter, TextInputHandler};
pub use font::{Font, FontId, FontManager};
pub use metrics::GlyphMetrics;
pub use state::FocusState;
pub use text::{RenderSink, StoredText, Text};
pub use typer::Typer;
