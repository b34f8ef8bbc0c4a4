//! Tests for substring extraction and escaping.

use insta::assert_snapshot;
use markup::{MarkupError, ParsedMarkup, Tag};

// ============================================================================
// Substring
// ============================================================================

#[test]
fn substring_wraps_contained_tag() {
    let parsed = ParsedMarkup::parse("a<b>bcd</b>e");
    let slice = parsed.substring(1, Some(2)).unwrap();
    assert_eq!(slice.plain_text(), "bc");
    assert_eq!(slice.raw(), "<b>bc</b>");
}

#[test]
fn substring_reopens_straddling_tag() {
    let parsed = ParsedMarkup::parse("a<b>bcd</b>e");
    let slice = parsed.substring(2, Some(1)).unwrap();
    assert_eq!(slice.plain_text(), "c");
    assert_eq!(slice.tags(), &[Tag::new("<b>", "</b>", 0, 1)]);
}

#[test]
fn substring_reopens_nested_tags_in_order() {
    let parsed = ParsedMarkup::parse("<b>ab<i>cd</i>ef</b>");
    let slice = parsed.substring(3, Some(2)).unwrap();
    assert_snapshot!(slice.raw(), @"<b><i>d</i>e</b>");
}

#[test]
fn substring_keeps_sibling_tags_apart() {
    let parsed = ParsedMarkup::parse("a<b>x</b><i>y</i>z");
    let slice = parsed.substring(1, Some(2)).unwrap();
    assert_eq!(slice.raw(), "<b>x</b><i>y</i>");
}

#[test]
fn substring_outside_tags_is_plain() {
    let parsed = ParsedMarkup::parse("ab<b>cd</b>ef");
    let slice = parsed.substring(4, None).unwrap();
    assert_eq!(slice.raw(), "ef");
    assert!(slice.is_plain());
}

#[test]
fn substring_prefix() {
    let parsed = ParsedMarkup::parse("<color=red>Hello</color> <b>World</b>");
    let slice = parsed.substring(0, Some(8)).unwrap();
    assert_snapshot!(slice.raw(), @"<color=red>Hello</color> <b>Wo</b>");
}

#[test]
fn substring_of_unicode_text() {
    let parsed = ParsedMarkup::parse("日<b>本語</b>です");
    let slice = parsed.substring(2, Some(2)).unwrap();
    assert_eq!(slice.raw(), "<b>語</b>で");
}

#[test]
fn substring_is_itself_valid_markup() {
    let parsed = ParsedMarkup::parse("x<b>a<i>bc</i>d</b>y<u>z</u>");
    for start in 0..parsed.len() {
        for length in 0..=parsed.len() - start {
            let slice = parsed.substring(start, Some(length)).unwrap();
            assert_eq!(slice.len(), length);
            let expected: String = parsed.plain_text().chars().skip(start).take(length).collect();
            assert_eq!(slice.plain_text(), expected);
            let again = ParsedMarkup::parse(slice.raw());
            assert_eq!(again, slice);
        }
    }
}

#[test]
fn substring_out_of_range() {
    let parsed = ParsedMarkup::parse("abcde");
    let err = parsed.substring(3, Some(10)).unwrap_err();
    assert_eq!(err, MarkupError::Range { start: 3, end: 13, len: 5 });
    assert_eq!(
        err.to_string(),
        "range 3..13 out of bounds for plain text of length 5"
    );
}

// ============================================================================
// Escape
// ============================================================================

#[test]
fn escape_shows_markers_as_text() {
    let parsed = ParsedMarkup::parse("<b>x</b>");
    let escaped = parsed.escape().unwrap();
    assert!(escaped.contains("<<b></b>b>"));
    assert_snapshot!(escaped, @"<<b></b>b>x</b>");
}

#[test]
fn escape_inner_markers() {
    let parsed = ParsedMarkup::parse("a<b>c<i>d</i>e</b>f");
    assert_snapshot!(
        parsed.escape().unwrap(),
        @"a<<b></b>b>c<<b></b>i>d<<b></b>/i>e<<b></b>/b>f"
    );
}

#[test]
fn escape_plain_text_is_unchanged() {
    let parsed = ParsedMarkup::parse("nothing to see");
    assert_eq!(parsed.escape().unwrap(), "nothing to see");
}

// ============================================================================
// Materialize
// ============================================================================

#[test]
fn materialize_with_clamped_tags() {
    let parsed = ParsedMarkup::parse("<color=red>abcd</color>");
    let hidden = Tag::new("<alpha=#00>", "</alpha>", 2, 4);
    let out = parsed.materialize_with(&[hidden], |tag| tag.with_range(tag.start(), 2));
    assert_snapshot!(out, @"<color=red>ab</color><alpha=#00>cd</alpha>");
}
