//! Incremental "typewriter" reveal of angle-bracket markup.
//!
//! A reveal parses its input once, then produces one markup string per host
//! frame. Characters that are not revealed yet stay in the string, wrapped
//! in a concealing tag, so the text keeps its final layout while it appears.
//!
//! The core holds no timers: the host drives it by calling
//! [`Typewriter::tick`] with the time elapsed since the previous frame, and
//! can stop it early through a shared [`InterruptToken`].
//!
//! # Usage
//!
//! ```
//! use std::time::Duration;
//! use typewriter::{reveal, InterruptToken, RevealOptions};
//!
//! let token = InterruptToken::new();
//! let frames = reveal(
//!     "<b>ok</b>",
//!     RevealOptions::new(10.0),
//!     std::iter::repeat(Duration::from_millis(100)),
//!     |_| {},
//!     &token,
//! )
//! .unwrap();
//!
//! assert_eq!(frames.last().map(String::as_str), Some("<b>ok</b>"));
//! ```

pub mod error;
pub mod log_init;
pub mod options;
pub mod remap;
pub mod token;
pub mod typewriter;

// Re-export main types at crate root
pub use error::TokenError;
pub use options::{RevealMode, RevealOptions};
pub use remap::{ClampPrefix, TagRemap};
pub use token::{InterruptToken, TokenState};
pub use typewriter::{reveal, Frame, Typewriter};
