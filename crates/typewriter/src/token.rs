//! Shared cancellation token for an in-flight reveal.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::TokenError;

/// Where a reveal using the token currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TokenState {
    /// No reveal is using the token.
    #[default]
    Idle,
    /// A reveal is in flight and may be interrupted.
    Running,
    /// The reveal was asked to stop and will do so at its next tick.
    Interrupted,
}

/// A handle that lets a caller stop a reveal from outside.
///
/// Clones share the same state. The reveal marks the token running when it
/// starts and idle when it finishes on its own; the caller interrupts it.
/// Interruption is cooperative: it takes effect at the next tick.
///
/// # Examples
///
/// ```
/// use typewriter::{InterruptToken, TokenState};
///
/// let token = InterruptToken::new();
/// assert!(token.interrupt().is_err());
///
/// token.start().unwrap();
/// assert!(token.can_interrupt());
/// token.interrupt().unwrap();
/// assert_eq!(token.state(), TokenState::Interrupted);
/// ```
#[derive(Clone, Debug, Default)]
pub struct InterruptToken {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    state: TokenState,
    /// Bumped by every [`InterruptToken::start`]; identifies the current run.
    run: u64,
}

impl InterruptToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TokenState {
        self.inner.lock().state
    }

    /// True while a reveal is running, i.e. when [`interrupt`](Self::interrupt)
    /// would succeed.
    pub fn can_interrupt(&self) -> bool {
        self.state() == TokenState::Running
    }

    pub fn was_interrupted(&self) -> bool {
        self.state() == TokenState::Interrupted
    }

    /// Mark a reveal as running and return its run number.
    ///
    /// Starting again after an interruption begins a new run; the
    /// interrupted one stays stopped (see [`is_stopped`](Self::is_stopped)).
    ///
    /// # Errors
    ///
    /// Fails if another reveal is already running on this token.
    pub fn start(&self) -> Result<u64, TokenError> {
        let mut inner = self.inner.lock();
        if inner.state == TokenState::Running {
            return Err(TokenError::InvalidState {
                operation: "start",
                state: inner.state,
            });
        }
        inner.state = TokenState::Running;
        inner.run += 1;
        Ok(inner.run)
    }

    /// Ask the running reveal to stop.
    ///
    /// # Errors
    ///
    /// Fails unless the token is [`TokenState::Running`].
    pub fn interrupt(&self) -> Result<(), TokenError> {
        let mut inner = self.inner.lock();
        if inner.state != TokenState::Running {
            return Err(TokenError::InvalidState {
                operation: "interrupt",
                state: inner.state,
            });
        }
        inner.state = TokenState::Interrupted;
        log::debug!("reveal {} interrupted", inner.run);
        Ok(())
    }

    /// True if `run` was interrupted or a later run has replaced it.
    pub fn is_stopped(&self, run: u64) -> bool {
        let inner = self.inner.lock();
        inner.run != run || inner.state == TokenState::Interrupted
    }

    /// Mark the reveal as finished.
    pub fn complete(&self) {
        self.inner.lock().state = TokenState::Idle;
    }

    /// Return to idle if `run` is still the one running.
    ///
    /// Leaves the token alone when `run` was interrupted or replaced, so a
    /// stale reveal never releases a newer one.
    pub fn finish(&self, run: u64) -> bool {
        let mut inner = self.inner.lock();
        if inner.run != run || inner.state != TokenState::Running {
            return false;
        }
        inner.state = TokenState::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_starts_idle() {
        let token = InterruptToken::new();
        assert_eq!(token.state(), TokenState::Idle);
        assert!(!token.can_interrupt());
        assert!(!token.was_interrupted());
    }

    #[test]
    fn interrupt_requires_running() {
        let token = InterruptToken::new();
        assert_eq!(
            token.interrupt(),
            Err(TokenError::InvalidState {
                operation: "interrupt",
                state: TokenState::Idle,
            })
        );

        token.start().unwrap();
        token.interrupt().unwrap();
        assert!(token.was_interrupted());
        assert!(token.interrupt().is_err());
    }

    #[test]
    fn start_rejects_second_reveal() {
        let token = InterruptToken::new();
        token.start().unwrap();
        assert!(token.start().is_err());
    }

    #[test]
    fn start_after_interruption() {
        let token = InterruptToken::new();
        token.start().unwrap();
        token.interrupt().unwrap();
        token.start().unwrap();
        assert!(token.can_interrupt());
    }

    #[test]
    fn complete_from_any_state() {
        let token = InterruptToken::new();
        token.complete();
        assert_eq!(token.state(), TokenState::Idle);

        token.start().unwrap();
        token.interrupt().unwrap();
        token.complete();
        assert_eq!(token.state(), TokenState::Idle);
    }

    #[test]
    fn each_start_begins_a_new_run() {
        let token = InterruptToken::new();
        let first = token.start().unwrap();
        token.interrupt().unwrap();
        let second = token.start().unwrap();
        assert_ne!(first, second);
        assert!(token.is_stopped(first));
        assert!(!token.is_stopped(second));
    }

    #[test]
    fn finish_only_releases_current_run() {
        let token = InterruptToken::new();
        let first = token.start().unwrap();
        token.interrupt().unwrap();
        let second = token.start().unwrap();

        assert!(!token.finish(first));
        assert_eq!(token.state(), TokenState::Running);
        assert!(token.finish(second));
        assert_eq!(token.state(), TokenState::Idle);
    }

    #[test]
    fn finish_keeps_interrupted_state() {
        let token = InterruptToken::new();
        let run = token.start().unwrap();
        token.interrupt().unwrap();
        assert!(!token.finish(run));
        assert!(token.was_interrupted());
    }

    #[test]
    fn clones_share_state() {
        let token = InterruptToken::new();
        let handle = token.clone();
        token.start().unwrap();
        handle.interrupt().unwrap();
        assert!(token.was_interrupted());
    }

    #[test]
    fn error_message() {
        let err = InterruptToken::new().interrupt().unwrap_err();
        assert_eq!(err.to_string(), "cannot interrupt token in state Idle");
    }
}
