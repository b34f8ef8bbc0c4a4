//! Error types for markup operations.

use thiserror::Error;

/// Why a marker could not be escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerDefect {
    /// Fewer than three characters (`<x>` is the shortest marker).
    TooShort,
    /// Does not start with `<`.
    MissingOpenBracket,
    /// Does not end with `>`.
    MissingCloseBracket,
}

impl std::fmt::Display for MarkerDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            MarkerDefect::TooShort => "must be at least 3 characters long",
            MarkerDefect::MissingOpenBracket => "must start with <",
            MarkerDefect::MissingCloseBracket => "must end with >",
        };
        f.write_str(reason)
    }
}

/// Errors that can occur when working with parsed markup.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MarkupError {
    /// A tag marker that is not shaped like `<...>`.
    #[error("invalid marker {marker:?}: {reason}")]
    InvalidMarker { marker: String, reason: MarkerDefect },

    /// A substring request past the end of the plain text.
    #[error("range {start}..{end} out of bounds for plain text of length {len}")]
    Range { start: usize, end: usize, len: usize },
}
