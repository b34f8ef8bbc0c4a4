//! Parser for angle-bracket markup.
//!
//! This module contains the lexer and the tag-matching parser.

mod lexer;
mod markup;

pub use lexer::{Lexer, Token};
pub use markup::parse;
