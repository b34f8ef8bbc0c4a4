//! Rich-text markup slicing and typewriter reveal.
//!
//! Re-exports the [`markup`] parser and the [`typewriter`] reveal so hosts
//! can depend on a single crate.

pub use markup;
pub use typewriter;

pub use markup::{MarkupError, ParsedMarkup, Tag};
pub use typewriter::{InterruptToken, RevealMode, RevealOptions, Typewriter};

// Re-export the log crate so users can use typewriter_text::log::info!, etc.
pub use log;
