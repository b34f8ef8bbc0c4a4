//! Lexer for angle-bracket markup.
//!
//! Converts input text into a stream of tokens. The lexer never fails:
//! anything that does not form a marker comes out as [`Token::Text`].

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq)]
pub enum Token<'a> {
    /// Literal text, including rejected marker candidates such as `<>` or a
    /// `<` followed by another `<`.
    Text(&'a str),
    /// Opening marker with brackets: `<b>`, `<color=red>`.
    OpenTag(&'a str),
    /// Closing marker with brackets: `</b>`.
    CloseTag(&'a str),
}

/// Lexer for angle-bracket markup.
///
/// # Examples
///
/// ```
/// use markup::parser::{Lexer, Token};
///
/// let tokens: Vec<_> = Lexer::new("<b>Hi</b>").collect();
/// assert_eq!(
///     tokens,
///     vec![Token::OpenTag("<b>"), Token::Text("Hi"), Token::CloseTag("</b>")]
/// );
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Get the remaining input.
    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Peek at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Advance by one character.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume text until the next `<` or end of input.
    fn consume_text(&mut self) -> Option<&'a str> {
        let start = self.pos;
        let len = self.remaining().find('<').unwrap_or(self.remaining().len());
        self.pos += len;

        if self.pos > start {
            Some(&self.input[start..self.pos])
        } else {
            None
        }
    }

    /// Consume a marker candidate starting at `<`.
    ///
    /// A second `<` before the closing `>` aborts the candidate; it is left
    /// unconsumed so the next call starts a fresh candidate there.
    fn consume_marker(&mut self) -> Token<'a> {
        let start = self.pos;
        self.advance(); // consume '<'

        let closing = self.peek() == Some('/');
        if closing {
            self.advance();
        }
        let body_start = self.pos;

        loop {
            match self.peek() {
                Some('>') => {
                    let body_empty = self.pos == body_start;
                    self.advance();
                    let marker = &self.input[start..self.pos];
                    return if body_empty {
                        log::trace!("rejected empty marker {marker:?} at byte {start}");
                        Token::Text(marker)
                    } else if closing {
                        Token::CloseTag(marker)
                    } else {
                        Token::OpenTag(marker)
                    };
                }
                Some('<') | None => {
                    let candidate = &self.input[start..self.pos];
                    log::trace!("unterminated marker {candidate:?} at byte {start}");
                    return Token::Text(candidate);
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.peek()? {
            '<' => Some(self.consume_marker()),
            _ => self.consume_text().map(Token::Text),
        }
    }
}
