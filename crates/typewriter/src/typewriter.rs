//! Frame-driven typewriter reveal.
//!
//! A [`Typewriter`] holds the cursor and time accumulator of one reveal. The
//! host calls [`Typewriter::tick`] once per frame with the elapsed time and
//! displays the markup it returns.

use std::time::Duration;

use markup::{MarkupError, ParsedMarkup, Tag};

use crate::error::TokenError;
use crate::options::{RevealMode, RevealOptions};
use crate::remap::{ClampPrefix, TagRemap};
use crate::token::InterruptToken;

/// Markup to display for one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    /// Set on the last frame, whose text is the original input verbatim.
    ///
    /// The tick that reveals the last character returns this frame directly;
    /// no concealed frame with every character visible precedes it.
    pub finished: bool,
}

/// Incrementally reveals a markup string over time.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use typewriter::{InterruptToken, RevealOptions, Typewriter};
///
/// let token = InterruptToken::new();
/// let mut typewriter = Typewriter::new("<b>hi</b>", RevealOptions::new(4.0), token).unwrap();
///
/// let quarter = Duration::from_millis(250);
/// typewriter.tick(quarter, |_| {});
/// let frame = typewriter.tick(quarter, |c| assert_eq!(c, 'h')).unwrap();
/// assert_eq!(frame.text, "<b>h<color=#00000000>i</color></b>");
/// ```
pub struct Typewriter<R = ClampPrefix> {
    raw: String,
    markup: ParsedMarkup,
    chars: Vec<char>,
    options: RevealOptions,
    remap: R,
    token: InterruptToken,
    run: u64,
    seconds_per_char: f64,
    accumulator: f64,
    visible: usize,
    instant: bool,
    done: bool,
}

impl Typewriter<ClampPrefix> {
    /// Start a reveal of `raw`, clamping tags that match
    /// [`RevealOptions::clamp_prefix`].
    ///
    /// # Errors
    ///
    /// Fails if `token` is already running another reveal.
    pub fn new(
        raw: impl Into<String>,
        options: RevealOptions,
        token: InterruptToken,
    ) -> Result<Self, TokenError> {
        let remap = ClampPrefix::new(options.clamp_prefix.clone());
        Self::with_remap(raw, options, token, remap)
    }
}

impl<R: TagRemap> Typewriter<R> {
    /// Start a reveal with a custom tag policy.
    ///
    /// # Errors
    ///
    /// Fails if `token` is already running another reveal.
    pub fn with_remap(
        raw: impl Into<String>,
        options: RevealOptions,
        token: InterruptToken,
        remap: R,
    ) -> Result<Self, TokenError> {
        let run = token.start()?;

        let raw = raw.into();
        let markup = ParsedMarkup::parse(&raw);
        let chars: Vec<char> = markup.plain_text().chars().collect();
        let instant = options.is_instant() || chars.is_empty();
        log::debug!(
            "reveal of {} chars at {}/s{}",
            chars.len(),
            options.chars_per_second,
            if instant { " (instant)" } else { "" }
        );

        Ok(Self {
            visible: if instant { chars.len() } else { 0 },
            seconds_per_char: if instant { 0.0 } else { options.chars_per_second.recip() },
            raw,
            markup,
            chars,
            options,
            remap,
            token,
            run,
            accumulator: 0.0,
            instant,
            done: false,
        })
    }

    /// Number of plain characters revealed so far.
    pub fn visible_count(&self) -> usize {
        self.visible
    }

    /// Number of plain characters to reveal.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// True once the reveal finished or noticed an interruption.
    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn token(&self) -> &InterruptToken {
        &self.token
    }

    /// True when the reveal skips straight to the full text.
    pub fn is_instant(&self) -> bool {
        self.instant
    }

    /// The frame to show before the first tick: every character laid out
    /// but hidden. Instant reveals show the original input.
    pub fn initial_frame(&self) -> String {
        if self.is_instant() {
            self.raw.clone()
        } else {
            self.render(0)
        }
    }

    /// Advance the reveal by one frame.
    ///
    /// Reveals as many characters as the accumulated time pays for, calling
    /// `on_character` for each in order, then banks `elapsed` for the next
    /// tick. Returns `None` once the reveal is over, or if the token was
    /// interrupted; no characters are revealed in that case.
    pub fn tick(&mut self, elapsed: Duration, mut on_character: impl FnMut(char)) -> Option<Frame> {
        if self.done {
            return None;
        }
        if self.token.is_stopped(self.run) {
            log::debug!("reveal stopped at {}/{}", self.visible, self.len());
            self.done = true;
            return None;
        }

        while self.visible < self.len() && self.accumulator >= self.seconds_per_char {
            on_character(self.chars[self.visible]);
            self.visible += 1;
            self.accumulator -= self.seconds_per_char;
        }
        self.accumulator += elapsed.as_secs_f64();
        log::trace!("reveal tick: {}/{}", self.visible, self.len());

        if self.visible == self.len() {
            log::debug!("reveal complete");
            self.done = true;
            self.token.finish(self.run);
            return Some(Frame {
                text: self.raw.clone(),
                finished: true,
            });
        }

        Some(Frame {
            text: self.render(self.visible),
            finished: false,
        })
    }

    /// The revealed prefix as standalone markup.
    ///
    /// Useful after an interruption, to show exactly what was revealed.
    pub fn visible_markup(&self) -> Result<ParsedMarkup, MarkupError> {
        self.markup.substring(0, Some(self.visible))
    }

    fn render(&self, visible: usize) -> String {
        match self.options.mode {
            RevealMode::Conceal => {
                let conceal = Tag::new(
                    self.options.conceal_open.as_str(),
                    self.options.conceal_close.as_str(),
                    visible,
                    self.len(),
                );
                self.markup
                    .materialize_with(&[conceal], |tag| self.remap.remap(tag, visible))
            }
            RevealMode::Truncate => match self.markup.substring(0, Some(visible)) {
                Ok(prefix) => prefix.raw().to_string(),
                Err(err) => {
                    log::warn!("cannot truncate reveal: {err}");
                    self.raw.clone()
                }
            },
        }
    }
}

impl<R> Drop for Typewriter<R> {
    /// An abandoned reveal hands the token back so the next one can start.
    fn drop(&mut self) {
        if !self.done && self.token.finish(self.run) {
            log::debug!("reveal dropped at {}/{}", self.visible, self.chars.len());
        }
    }
}

/// Run a reveal over a sequence of frame times and collect every frame.
///
/// The first entry is the initial hidden frame, except for instant reveals,
/// which produce only the original input. Collection stops when the reveal
/// finishes, is interrupted, or `deltas` runs out. Running out of `deltas`
/// releases the token as if the reveal had finished.
///
/// # Errors
///
/// Fails if `token` is already running another reveal.
pub fn reveal<I>(
    raw: &str,
    options: RevealOptions,
    deltas: I,
    mut on_character: impl FnMut(char),
    token: &InterruptToken,
) -> Result<Vec<String>, TokenError>
where
    I: IntoIterator<Item = Duration>,
{
    let mut typewriter = Typewriter::new(raw, options, token.clone())?;
    let mut frames = Vec::new();
    if typewriter.is_instant() {
        frames.extend(typewriter.tick(Duration::ZERO, &mut on_character).map(|f| f.text));
        return Ok(frames);
    }

    frames.push(typewriter.initial_frame());
    for delta in deltas {
        let Some(frame) = typewriter.tick(delta, &mut on_character) else {
            break;
        };
        frames.push(frame.text);
        if frame.finished {
            break;
        }
    }
    Ok(frames)
}
