//! Errors raised while loading fonts into the font table.

use std::{io::Error as IoError, result::Result as StdResult};

use thiserror::Error;

/// Errors raised by the font table.
#[derive(Debug, Error)]
pub enum Error {
    /// The font bytes could not be parsed.
    #[error("font loading failed: {0}")]
    FontLoad(&'static str),
    /// The font file could not be read.
    #[error("font I/O failed: {0}")]
    Io(#[from] IoError),
}

/// Result type for font table operations.
pub type Result<T> = StdResult<T, Error>;
