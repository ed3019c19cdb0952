//! Error types for twofold-core.

use thiserror::Error;

/// Attempts to build a container state that must not exist.
///
/// These are contract violations in the calling code, never domain failures.
/// The panicking constructors on [`Maybe`](crate::Maybe) report them by
/// panicking; the `try_*` constructors return them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// A failure needs a non-empty message, either given or taken from its cause.
    #[error("failure message must not be empty")]
    EmptyMessage,

    /// `failure_from` was handed a success.
    #[error("only a failure can be re-wrapped, got a success of `{payload}`")]
    NotAFailure { payload: &'static str },
}
