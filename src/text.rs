//! Bounds-checked character access.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextError {
    #[error("attempted to access index {index} out of range (length {len})")]
    OutOfRange { index: usize, len: usize },
}

/// Return the character at character position `index`.
///
/// Positions count Unicode scalar values, not bytes, so multi-byte input is
/// never split mid code point.
pub fn char_at(text: &str, index: usize) -> Result<char, TextError> {
    text.chars().nth(index).ok_or_else(|| TextError::OutOfRange {
        index,
        len: text.chars().count(),
    })
}
