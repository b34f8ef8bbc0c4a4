//! ParsedMarkup result type.
//!
//! This is the result of parsing angle-bracket markup, plus the operations
//! that serialize it back out: substring extraction, escaping, and
//! materialization with a substituted tag list.

use crate::error::MarkupError;
use crate::render::{self, Event};
use crate::tag::Tag;

/// The result of parsing markup.
///
/// Contains the original input, the plain text (with markup stripped), and
/// the matched tags. Tags are listed in the order they were closed, so an
/// inner tag comes before the tag enclosing it.
///
/// # Examples
///
/// ```
/// use markup::ParsedMarkup;
///
/// let parsed = ParsedMarkup::parse("a<b>bcd</b>e");
/// assert_eq!(parsed.plain_text(), "abcde");
///
/// let slice = parsed.substring(2, Some(1)).unwrap();
/// assert_eq!(slice.raw(), "<b>c</b>");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedMarkup {
    /// The input this was parsed from.
    raw: String,
    /// Plain text with all markup stripped.
    plain_text: String,
    /// Length of `plain_text` in characters.
    plain_len: usize,
    /// Matched tags referencing character positions in `plain_text`.
    tags: Vec<Tag>,
}

impl ParsedMarkup {
    /// Create a ParsedMarkup from its parts.
    ///
    /// `raw` is kept for diagnostics only; nothing is derived from it.
    pub fn new(raw: String, plain_text: String, tags: Vec<Tag>) -> Self {
        let plain_len = plain_text.chars().count();
        Self {
            raw,
            plain_text,
            plain_len,
            tags,
        }
    }

    /// Parse markup text. Never fails; see [`crate::parser::parse`].
    pub fn parse(input: &str) -> Self {
        crate::parser::parse(input)
    }

    /// The original input.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Get the plain text.
    pub fn plain_text(&self) -> &str {
        &self.plain_text
    }

    /// Get all tags, in closing order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns true if there are no tags (plain text only).
    pub fn is_plain(&self) -> bool {
        self.tags.is_empty()
    }

    /// Length of the plain text in characters.
    pub fn len(&self) -> usize {
        self.plain_len
    }

    /// Returns true if the plain text is empty.
    pub fn is_empty(&self) -> bool {
        self.plain_len == 0
    }

    /// Get all tags that contain a specific character index.
    pub fn tags_at(&self, index: usize) -> Vec<&Tag> {
        self.tags.iter().filter(|t| t.contains(index)).collect()
    }

    /// Extract `length` plain characters starting at `start` as standalone
    /// markup.
    ///
    /// `None` takes the rest of the text. Tags crossing either cut point are
    /// reopened or closed at the boundary, and the result is parsed again so
    /// its tag list describes the new text.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::Range`] if the range runs past the plain text.
    pub fn substring(&self, start: usize, length: Option<usize>) -> Result<Self, MarkupError> {
        let end = match length {
            Some(length) => start.saturating_add(length),
            None => self.plain_len.max(start),
        };
        if end > self.plain_len {
            return Err(MarkupError::Range {
                start,
                end,
                len: self.plain_len,
            });
        }

        let out = render::materialize(&self.plain_text, &self.tags, start..end);
        Ok(Self::parse(&out))
    }

    /// Render the markup so its markers show up as visible text.
    ///
    /// Every marker emitted along the way goes through [`Tag::escape`].
    /// Tags still open after the last character are closed with their raw
    /// closing marker.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::InvalidMarker`] if a tag's marker is not
    /// shaped like `<...>`. Parsed tags always are.
    pub fn escape(&self) -> Result<String, MarkupError> {
        let mut out = String::with_capacity(self.raw.len() * 2);
        render::walk(&self.plain_text, &self.tags, 0..self.plain_len, |event| {
            match event {
                Event::Open(tag) => out.push_str(&Tag::escape(tag.open_text())?),
                Event::Close(tag) => out.push_str(&Tag::escape(tag.close_text())?),
                // Trailing closers stay live, unlike the escaped openers.
                Event::Unclosed(tag) => out.push_str(tag.close_text()),
                Event::Char(c) => out.push(c),
            }
            Ok::<(), MarkupError>(())
        })?;
        Ok(out)
    }

    /// Serialize the plain text with `tags` in place of the parsed ones.
    ///
    /// The result is not parsed again, so overlapping tags come out exactly
    /// as the walk emits them.
    pub fn materialize(&self, tags: &[Tag]) -> String {
        render::materialize(&self.plain_text, tags, 0..self.plain_len)
    }

    /// Serialize with every parsed tag passed through `remap`, followed by
    /// `extra`.
    ///
    /// # Examples
    ///
    /// ```
    /// use markup::{ParsedMarkup, Tag};
    ///
    /// let parsed = ParsedMarkup::parse("<b>abc</b>");
    /// let hidden = Tag::new("<u>", "</u>", 2, 3);
    /// let out = parsed.materialize_with(&[hidden], |tag| tag.with_range(0, 1));
    /// assert_eq!(out, "<b>a</b>b<u>c</u>");
    /// ```
    pub fn materialize_with(&self, extra: &[Tag], remap: impl Fn(&Tag) -> Tag) -> String {
        let tags: Vec<Tag> = self
            .tags
            .iter()
            .map(remap)
            .chain(extra.iter().cloned())
            .collect();
        self.materialize(&tags)
    }
}
