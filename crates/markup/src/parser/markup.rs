//! Tag-matching parser.
//!
//! Consumes lexer tokens and produces a [`ParsedMarkup`].

use crate::markup::ParsedMarkup;
use crate::tag::Tag;

use super::lexer::{Lexer, Token};

/// Parses angle-bracket markup into a ParsedMarkup result.
///
/// Parsing never fails. Rejected marker candidates stay in the plain text
/// as literal characters; an opening marker that is never closed is dropped
/// from the output entirely.
///
/// # Examples
///
/// ```
/// use markup::parser::parse;
///
/// let parsed = parse("hi <b>there</b> friend");
/// assert_eq!(parsed.plain_text(), "hi there friend");
/// assert_eq!(parsed.tags()[0].range(), 3..8);
/// ```
pub fn parse(input: &str) -> ParsedMarkup {
    let mut parser = Parser::new();
    for token in Lexer::new(input) {
        parser.process_token(token);
    }
    parser.discard_unclosed();

    ParsedMarkup::new(input.to_string(), parser.output, parser.tags)
}

/// The main parser state.
struct Parser<'a> {
    /// Pending opening markers, innermost last.
    open_stack: Vec<StackEntry<'a>>,
    /// Output plain text (markup stripped).
    output: String,
    /// Length of `output` in characters.
    plain_len: usize,
    /// Matched tags, in the order they were closed.
    tags: Vec<Tag>,
}

/// An entry on the open-tag stack.
#[derive(Clone, Debug)]
struct StackEntry<'a> {
    /// Plain character index where the tag opened.
    start: usize,
    /// The opening marker text.
    open: &'a str,
}

impl<'a> Parser<'a> {
    fn new() -> Self {
        Self {
            open_stack: Vec::new(),
            output: String::new(),
            plain_len: 0,
            tags: Vec::new(),
        }
    }

    fn process_token(&mut self, token: Token<'a>) {
        match token {
            Token::Text(text) => self.push_text(text),
            Token::OpenTag(open) => {
                log::trace!("open {open:?} at {}", self.plain_len);
                self.open_stack.push(StackEntry {
                    start: self.plain_len,
                    open,
                });
            }
            Token::CloseTag(close) => self.close_tag(close),
        }
    }

    fn push_text(&mut self, text: &str) {
        self.output.push_str(text);
        self.plain_len += text.chars().count();
    }

    /// Match a closing marker against the most recent open marker.
    fn close_tag(&mut self, close: &str) {
        match self.open_stack.pop() {
            Some(entry) => {
                log::trace!(
                    "matched {:?}..{close:?} over [{}, {})",
                    entry.open,
                    entry.start,
                    self.plain_len
                );
                self.tags
                    .push(Tag::new(entry.open, close, entry.start, self.plain_len));
            }
            None => {
                log::trace!("unmatched close {close:?} kept as text");
                self.push_text(close);
            }
        }
    }

    fn discard_unclosed(&mut self) {
        for entry in self.open_stack.drain(..) {
            log::debug!(
                "discarding unclosed {:?} opened at {}",
                entry.open,
                entry.start
            );
        }
    }
}
