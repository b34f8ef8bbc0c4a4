//! Tag-consistent serialization walk.
//!
//! Shared by substring extraction, escaping, and materialization: visits a
//! range of plain characters and reports where each tag opens and closes so
//! the emitted markup nests correctly on its own.

use std::ops::Range;

use crate::tag::Tag;

/// A step of the serialization walk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Event<'t> {
    /// Emit the opening marker of a tag.
    Open(&'t Tag),
    /// Emit the closing marker of a tag whose end was reached.
    Close(&'t Tag),
    /// Emit one plain character.
    Char(char),
    /// Emit the closing marker of a tag still open after the last character.
    Unclosed(&'t Tag),
}

/// Walk `range` of `plain`, reporting marker and character events in order.
///
/// Tags that straddle `range.start` are reopened first, outermost first.
/// At each index the open stack is popped while its top has ended, then tags
/// starting there open longest-lived first. Whatever is left open after the
/// range is reported most recently opened first.
///
/// `tags` is never modified; the walk keeps its own stack of borrowed tags.
pub(crate) fn walk<'t, E>(
    plain: &str,
    tags: &'t [Tag],
    range: Range<usize>,
    mut emit: impl FnMut(Event<'t>) -> Result<(), E>,
) -> Result<(), E> {
    let mut ordered: Vec<&'t Tag> = tags.iter().collect();
    ordered.sort_by(|a, b| a.start().cmp(&b.start()).then(b.end().cmp(&a.end())));

    let mut started: Vec<&'t Tag> = Vec::new();
    for tag in ordered.iter().copied().filter(|t| t.straddles(range.start)) {
        emit(Event::Open(tag))?;
        started.push(tag);
    }

    let mut pending = ordered
        .into_iter()
        .skip_while(|t| t.start() < range.start)
        .peekable();

    for (index, c) in plain.chars().enumerate().skip(range.start).take(range.len()) {
        close_ended(&mut started, index, &mut emit)?;
        while let Some(tag) = pending.next_if(|t| t.start() == index) {
            emit(Event::Open(tag))?;
            started.push(tag);
        }
        // Again, for zero-length tags opened just now.
        close_ended(&mut started, index, &mut emit)?;
        emit(Event::Char(c))?;
    }

    for tag in started.into_iter().rev() {
        emit(Event::Unclosed(tag))?;
    }
    Ok(())
}

/// Pop the open stack while its top has ended at or before `index`.
///
/// Runs before tags starting at `index` open, so a tag that starts where a
/// sibling ends follows it instead of nesting inside it. `<=` rather than
/// `==` closes remapped tags that ended while covered by an outer one.
fn close_ended<'t, E>(
    started: &mut Vec<&'t Tag>,
    index: usize,
    emit: &mut impl FnMut(Event<'t>) -> Result<(), E>,
) -> Result<(), E> {
    while started.last().is_some_and(|t| t.end() <= index) {
        if let Some(tag) = started.pop() {
            emit(Event::Close(tag))?;
        }
    }
    Ok(())
}

/// Serialize `range` of `plain` with live markers.
pub(crate) fn materialize(plain: &str, tags: &[Tag], range: Range<usize>) -> String {
    let mut out = String::with_capacity(plain.len());
    walk(plain, tags, range, |event| {
        match event {
            Event::Open(tag) => out.push_str(tag.open_text()),
            Event::Close(tag) | Event::Unclosed(tag) => out.push_str(tag.close_text()),
            Event::Char(c) => out.push(c),
        }
        Ok::<(), std::convert::Infallible>(())
    })
    .unwrap_or_else(|never| match never {});
    out
}
