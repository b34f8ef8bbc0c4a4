//! Angle-bracket inline markup parser.
//!
//! This crate parses text like `hi <b>there</b> friend` into plain text plus
//! a list of tags, each a matched marker pair over a half-open range of
//! plain-text character indices.
//!
//! # Overview
//!
//! - `<name ...>` opens a tag; any non-empty text between the brackets is
//!   kept verbatim as the opening marker.
//! - `</name>` closes the most recently opened tag, whatever its name.
//! - Malformed markers (`<>`, `</>`, a `<` interrupted by another `<`, an
//!   unterminated `<...` at the end) are kept as literal text.
//! - Opening markers that are never closed are dropped.
//!
//! Parsed markup can be sliced with [`ParsedMarkup::substring`], which
//! reopens any tag crossing a cut point, and rendered inert with
//! [`ParsedMarkup::escape`].
//!
//! # Usage
//!
//! ```
//! use markup::ParsedMarkup;
//!
//! let parsed = ParsedMarkup::parse("a<b>c<i>d</i>e</b>f");
//! assert_eq!(parsed.plain_text(), "acdef");
//! assert_eq!(parsed.tags().len(), 2);
//!
//! let tail = parsed.substring(2, None).unwrap();
//! assert_eq!(tail.raw(), "<b><i>d</i>e</b>f");
//! ```

pub mod error;
pub mod markup;
pub mod parser;
mod render;
pub mod tag;

// Re-export main types at crate root
pub use error::{MarkerDefect, MarkupError};
pub use markup::ParsedMarkup;
pub use tag::Tag;
