//! Error types for reveal control.

use thiserror::Error;

use crate::token::TokenState;

/// Errors raised by misuse of an [`InterruptToken`](crate::InterruptToken).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// The requested transition is not allowed from the current state.
    #[error("cannot {operation} token in state {state:?}")]
    InvalidState {
        operation: &'static str,
        state: TokenState,
    },
}
