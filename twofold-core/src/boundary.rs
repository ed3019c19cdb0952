//! Fault-to-value boundary.
//!
//! This is the only module in the crate that catches anything. `Err` values
//! returned by a factory and panics raised inside one are turned into
//! [`Failure`] records here, exactly once, and flow as data afterwards.
//! Construction, dispatch and extraction elsewhere never catch or convert.

use std::any::Any;
use std::error::Error as StdError;
use std::panic::{self, UnwindSafe};
use std::sync::Arc;

use thiserror::Error;

use crate::maybe::{Failure, Maybe};

/// Cause recorded by [`Maybe::catch_unwind`] for a panicking factory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Panicked {
    message: String,
}

impl Panicked {
    fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "panic with a non-string payload".to_string()
        };
        Self { message }
    }

    /// The panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<T> Maybe<T> {
    /// Runs `factory` and captures its outcome.
    ///
    /// `Ok` becomes `Success`. `Err(e)` becomes a `Failure` whose message is
    /// `e.to_string()` and whose cause is `e` itself.
    pub fn try_evaluate<F, E>(factory: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: StdError + Send + Sync + 'static,
    {
        match factory() {
            Ok(value) => Maybe::Success(value),
            Err(err) => Maybe::Failure(convert(Arc::new(err))),
        }
    }

    /// Runs `factory`, turning a panic into a `Failure` with a [`Panicked`] cause.
    ///
    /// The installed panic hook still runs. Wrap closures that capture
    /// `&mut` state in [`std::panic::AssertUnwindSafe`].
    pub fn catch_unwind<F>(factory: F) -> Self
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match panic::catch_unwind(factory) {
            Ok(value) => Maybe::Success(value),
            Err(payload) => Maybe::Failure(convert(Arc::new(Panicked::from_payload(payload)))),
        }
    }
}

fn convert(cause: Arc<dyn StdError + Send + Sync + 'static>) -> Failure {
    let failure = Failure::from_fault(cause);
    tracing::debug!(error = %failure, "fault converted into failure");
    failure
}
