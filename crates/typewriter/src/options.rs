//! Reveal configuration.

/// Zero-alpha colour used to hide characters that are not revealed yet.
pub const DEFAULT_CONCEAL_OPEN: &str = "<color=#00000000>";
pub const DEFAULT_CONCEAL_CLOSE: &str = "</color>";
/// Tags starting with this prefix are cut at the reveal cursor by default.
pub const DEFAULT_CLAMP_PREFIX: &str = "<color";

/// How hidden characters are produced in each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealMode {
    /// Keep the full text and wrap the unrevealed tail in a concealing tag,
    /// so line breaks do not shift while characters appear.
    #[default]
    Conceal,
    /// Emit only the revealed prefix.
    Truncate,
}

/// Options for a [`Typewriter`](crate::Typewriter).
///
/// # Examples
///
/// ```
/// use typewriter::{RevealMode, RevealOptions};
///
/// let options = RevealOptions::new(30.0).with_mode(RevealMode::Truncate);
/// assert_eq!(options.chars_per_second, 30.0);
/// assert!(!options.is_instant());
/// assert!(RevealOptions::default().is_instant());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    /// Reveal speed. Zero or negative shows everything at once.
    pub chars_per_second: f64,
    pub mode: RevealMode,
    /// Opening marker of the synthetic concealing tag.
    pub conceal_open: String,
    /// Closing marker of the synthetic concealing tag.
    pub conceal_close: String,
    /// Prefix of tags cut at the reveal cursor by the default policy.
    pub clamp_prefix: String,
}

impl RevealOptions {
    pub fn new(chars_per_second: f64) -> Self {
        Self {
            chars_per_second,
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: RevealMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_conceal_tag(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.conceal_open = open.into();
        self.conceal_close = close.into();
        self
    }

    pub fn with_clamp_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.clamp_prefix = prefix.into();
        self
    }

    /// True when the speed disables the effect.
    pub fn is_instant(&self) -> bool {
        self.chars_per_second <= 0.0 || self.chars_per_second.is_nan()
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            chars_per_second: 0.0,
            mode: RevealMode::default(),
            conceal_open: DEFAULT_CONCEAL_OPEN.to_string(),
            conceal_close: DEFAULT_CONCEAL_CLOSE.to_string(),
            clamp_prefix: DEFAULT_CLAMP_PREFIX.to_string(),
        }
    }
}
