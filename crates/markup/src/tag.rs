//! Tag type for matched marker pairs in parsed markup.

use std::fmt;
use std::ops::Range;

use crate::error::{MarkerDefect, MarkupError};

/// Empty bold pair spliced into escaped markers so they render as text.
const INERT_MARKER: &str = "<b></b>";

/// A matched open/close marker pair over a region of plain text.
///
/// Tags reference character positions in the plain text (with markup
/// stripped) as a half-open `[start, end)` interval. They are values: every
/// transformation produces a new `Tag`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tag {
    open: String,
    close: String,
    start: usize,
    end: usize,
}

impl Tag {
    /// Create a tag from its marker texts and range.
    ///
    /// An `end` smaller than `start` is raised to `start`.
    pub fn new(open: impl Into<String>, close: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
            start,
            end: end.max(start),
        }
    }

    /// The opening marker, brackets included: `<b>`.
    pub fn open_text(&self) -> &str {
        &self.open
    }

    /// The closing marker, brackets included: `</b>`.
    pub fn close_text(&self) -> &str {
        &self.close
    }

    /// Start character index (inclusive).
    pub fn start(&self) -> usize {
        self.start
    }

    /// End character index (exclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of plain characters covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this tag covers a zero-length range.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if this tag contains a given character index.
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    /// Check if this tag is open on both sides of `index`.
    pub fn straddles(&self, index: usize) -> bool {
        self.start < index && index < self.end
    }

    /// Check if this tag overlaps with another tag.
    pub fn overlaps(&self, other: &Tag) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The same markers over a different range.
    pub fn with_range(&self, start: usize, end: usize) -> Self {
        Self::new(self.open.clone(), self.close.clone(), start, end)
    }

    /// Make a marker render as literal text.
    ///
    /// Splices an empty bold pair right after the leading `<`, so a
    /// markup-aware display no longer recognizes the marker.
    ///
    /// # Examples
    ///
    /// ```
    /// use markup::Tag;
    ///
    /// assert_eq!(Tag::escape("<i>").unwrap(), "<<b></b>i>");
    /// assert!(Tag::escape("<>").is_err());
    /// ```
    pub fn escape(marker: &str) -> Result<String, MarkupError> {
        let defect = if marker.chars().count() < 3 {
            Some(MarkerDefect::TooShort)
        } else if !marker.starts_with('<') {
            Some(MarkerDefect::MissingOpenBracket)
        } else if !marker.ends_with('>') {
            Some(MarkerDefect::MissingCloseBracket)
        } else {
            None
        };

        if let Some(reason) = defect {
            return Err(MarkupError::InvalidMarker {
                marker: marker.to_string(),
                reason,
            });
        }

        let mut escaped = String::with_capacity(marker.len() + INERT_MARKER.len());
        escaped.push('<');
        escaped.push_str(INERT_MARKER);
        escaped.push_str(&marker[1..]);
        Ok(escaped)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = Tag::escape(&self.open).unwrap_or_else(|_| self.open.clone());
        let close = Tag::escape(&self.close).unwrap_or_else(|_| self.close.clone());
        write!(f, "{open}...{close} [{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_new() {
        let tag = Tag::new("<b>", "</b>", 1, 4);
        assert_eq!(tag.open_text(), "<b>");
        assert_eq!(tag.close_text(), "</b>");
        assert_eq!(tag.range(), 1..4);
        assert_eq!(tag.len(), 3);
    }

    #[test]
    fn tag_end_never_before_start() {
        let tag = Tag::new("<b>", "</b>", 5, 2);
        assert_eq!(tag.range(), 5..5);
        assert!(tag.is_empty());
    }

    #[test]
    fn tag_contains() {
        let tag = Tag::new("<b>", "</b>", 5, 10);
        assert!(!tag.contains(4));
        assert!(tag.contains(5));
        assert!(tag.contains(9));
        assert!(!tag.contains(10));
    }

    #[test]
    fn tag_straddles() {
        let tag = Tag::new("<b>", "</b>", 1, 4);
        assert!(!tag.straddles(1));
        assert!(tag.straddles(2));
        assert!(tag.straddles(3));
        assert!(!tag.straddles(4));
    }

    #[test]
    fn tag_overlaps() {
        let a = Tag::new("<b>", "</b>", 0, 10);
        let b = Tag::new("<i>", "</i>", 5, 15);
        let c = Tag::new("<u>", "</u>", 10, 20);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn with_range_keeps_markers() {
        let tag = Tag::new("<color=red>", "</color>", 2, 8).with_range(2, 3);
        assert_eq!(tag.open_text(), "<color=red>");
        assert_eq!(tag.range(), 2..3);
    }

    #[test]
    fn escape_open_and_close_markers() {
        assert_eq!(Tag::escape("<b>").unwrap(), "<<b></b>b>");
        assert_eq!(Tag::escape("</b>").unwrap(), "<<b></b>/b>");
    }

    #[test]
    fn escape_rejects_malformed_markers() {
        let err = Tag::escape("<>").unwrap_err();
        assert!(matches!(
            err,
            MarkupError::InvalidMarker { reason: MarkerDefect::TooShort, .. }
        ));

        let err = Tag::escape("b>>").unwrap_err();
        assert!(matches!(
            err,
            MarkupError::InvalidMarker { reason: MarkerDefect::MissingOpenBracket, .. }
        ));

        let err = Tag::escape("<b").unwrap_err();
        assert!(matches!(
            err,
            MarkupError::InvalidMarker { reason: MarkerDefect::TooShort, .. }
        ));

        let err = Tag::escape("<bb").unwrap_err();
        assert!(matches!(
            err,
            MarkupError::InvalidMarker { reason: MarkerDefect::MissingCloseBracket, .. }
        ));
    }

    #[test]
    fn display_escapes_markers() {
        let tag = Tag::new("<b>", "</b>", 1, 4);
        assert_eq!(tag.to_string(), "<<b></b>b>...<<b></b>/b> [1, 4)");
    }

    #[test]
    fn display_falls_back_to_raw_markers() {
        let tag = Tag::new("x", "y", 0, 1);
        assert_eq!(tag.to_string(), "x...y [0, 1)");
    }
}
