//! Tag remapping policies applied on every reveal tick.

use markup::Tag;

/// Rewrites a parsed tag for a frame with `visible` characters shown.
///
/// Implemented for closures, so a one-off policy can be written inline:
///
/// ```
/// use markup::Tag;
/// use typewriter::TagRemap;
///
/// let keep = |tag: &Tag, _visible: usize| tag.clone();
/// let tag = Tag::new("<b>", "</b>", 0, 3);
/// assert_eq!(keep.remap(&tag, 1), tag);
/// ```
pub trait TagRemap {
    fn remap(&self, tag: &Tag, visible: usize) -> Tag;
}

impl<F> TagRemap for F
where
    F: Fn(&Tag, usize) -> Tag,
{
    fn remap(&self, tag: &Tag, visible: usize) -> Tag {
        self(tag, visible)
    }
}

/// Cuts tags whose opening marker starts with a prefix at the reveal cursor.
///
/// A tag like `<color=red>` would otherwise override the concealing colour
/// on characters that are not revealed yet. Matching tags end at `visible`,
/// clamped to their own range. Other tags pass through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClampPrefix {
    prefix: String,
}

impl ClampPrefix {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn matches(&self, tag: &Tag) -> bool {
        tag.open_text().starts_with(&self.prefix)
    }
}

impl Default for ClampPrefix {
    fn default() -> Self {
        Self::new("<color")
    }
}

impl TagRemap for ClampPrefix {
    fn remap(&self, tag: &Tag, visible: usize) -> Tag {
        if self.matches(tag) {
            tag.with_range(tag.start(), visible.clamp(tag.start(), tag.end()))
        } else {
            tag.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_prefix_cuts_matching_tags() {
        let policy = ClampPrefix::default();
        let tag = Tag::new("<color=red>", "</color>", 2, 6);

        assert_eq!(policy.remap(&tag, 0).range(), 2..2);
        assert_eq!(policy.remap(&tag, 4).range(), 2..4);
        assert_eq!(policy.remap(&tag, 9).range(), 2..6);
    }

    #[test]
    fn clamp_prefix_passes_other_tags() {
        let policy = ClampPrefix::default();
        let tag = Tag::new("<b>", "</b>", 2, 6);
        assert_eq!(policy.remap(&tag, 3), tag);
    }

    #[test]
    fn custom_prefix() {
        let policy = ClampPrefix::new("<mark");
        assert!(policy.matches(&Tag::new("<mark=#ff0>", "</mark>", 0, 1)));
        assert!(!policy.matches(&Tag::new("<color=red>", "</color>", 0, 1)));
    }

    #[test]
    fn closure_policy() {
        let collapse = |tag: &Tag, _: usize| tag.with_range(0, 0);
        let tag = Tag::new("<b>", "</b>", 2, 6);
        assert!(collapse.remap(&tag, 3).is_empty());
    }
}
