//! Error types for lexing and translation.
//!
//! All errors from this crate are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//! - **Line-scoped**: Each one describes exactly one offending input line

use serde::{Deserialize, Serialize};

/// Lexing and translation errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Lexing | `UnterminatedQuote` | Malformed quoting in a command line |
/// | Structure | `EmptyCommand`, `MissingValue` | Line has no usable command shape |
/// | Decoding | `InvalidEncoding` | Malformed percent-escape on the decode side |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    /// A single or double quote was opened but never closed.
    #[error("unterminated quote starting at byte {offset}")]
    UnterminatedQuote {
        /// Byte offset of the opening quote within the line.
        offset: usize,
    },

    /// The line contained no tokens at all.
    #[error("empty command line")]
    EmptyCommand,

    /// A `--name` flag was the last token on the line.
    #[error("missing value for flag: {flag}")]
    MissingValue {
        /// The flag token that had no following value.
        flag: String,
    },

    /// A percent-escape could not be decoded.
    #[error("invalid percent encoding: {reason}")]
    InvalidEncoding {
        /// What was wrong with the escape sequence.
        reason: String,
    },
}
