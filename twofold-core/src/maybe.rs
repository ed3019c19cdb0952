//! Success value or failure record.
//!
//! [`Maybe`] is closed over exactly two variants. A [`Failure`] always carries
//! a non-empty message and optionally the error that caused it, so callers
//! never see a half-populated result.
//!
//! ```
//! use twofold_core::Maybe;
//!
//! fn parse_port(raw: &str) -> Maybe<u16> {
//!     match raw.parse() {
//!         Ok(port) => Maybe::success(port),
//!         Err(_) => Maybe::failure("not a port number"),
//!     }
//! }
//!
//! let rendered = parse_port("80x").case(
//!     |port| format!("port {port}"),
//!     |failure| format!("error: {}", failure.message()),
//! );
//! assert_eq!(rendered, "error: not a port number");
//! ```

use std::error::Error;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::Either as EitherFuture;

use crate::error::ConstructionError;

/// Shared, type-erased error attached to a [`Failure`].
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

// ---------------------------------------------------------------------------
// Failure record
// ---------------------------------------------------------------------------

/// The failure branch of a [`Maybe`]: a non-empty message and an optional cause.
///
/// Not generic over the success type, so one failure can be re-wrapped under
/// any payload with [`Failure::into_maybe`].
#[derive(Debug, Clone)]
pub struct Failure {
    message: String,
    cause: Option<Cause>,
}

impl Failure {
    /// A failure described only by `message`.
    ///
    /// Returns [`ConstructionError::EmptyMessage`] if `message` is empty.
    pub fn new(message: impl Into<String>) -> Result<Self, ConstructionError> {
        Self::build(message.into(), None)
    }

    /// A failure with a cause. An empty `message` is replaced by the cause's
    /// own description, which must not be empty either.
    pub fn with_cause<E>(message: impl Into<String>, cause: E) -> Result<Self, ConstructionError>
    where
        E: Error + Send + Sync + 'static,
    {
        Self::build(message.into(), Some(Arc::new(cause)))
    }

    /// Same as [`with_cause`](Self::with_cause) for a cause that is already shared.
    pub fn with_shared_cause(
        message: impl Into<String>,
        cause: Cause,
    ) -> Result<Self, ConstructionError> {
        Self::build(message.into(), Some(cause))
    }

    /// A failure whose message is the cause's description.
    pub fn from_cause<E>(cause: E) -> Result<Self, ConstructionError>
    where
        E: Error + Send + Sync + 'static,
    {
        Self::with_cause(String::new(), cause)
    }

    fn build(message: String, cause: Option<Cause>) -> Result<Self, ConstructionError> {
        let message = match (message.is_empty(), &cause) {
            (false, _) => message,
            (true, Some(cause)) => cause.to_string(),
            (true, None) => return Err(ConstructionError::EmptyMessage),
        };
        if message.is_empty() {
            return Err(ConstructionError::EmptyMessage);
        }
        Ok(Self { message, cause })
    }

    /// Boundary-only constructor: never fails, falls back to a fixed message
    /// when the fault describes itself as an empty string.
    pub(crate) fn from_fault(cause: Cause) -> Self {
        let mut message = cause.to_string();
        if message.is_empty() {
            message = UNDESCRIBED_FAULT.to_string();
        }
        Self { message, cause: Some(cause) }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// The shared cause handle; clones of it point at the same error object.
    pub fn cause_arc(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Wraps this failure as a `Maybe<T>` for any `T`.
    pub fn into_maybe<T>(self) -> Maybe<T> {
        Maybe::Failure(self)
    }
}

/// Message used when a caught fault has an empty description.
pub(crate) const UNDESCRIBED_FAULT: &str = "operation failed without a description";

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}

// ---------------------------------------------------------------------------
// Maybe
// ---------------------------------------------------------------------------

/// Either a success value of type `T` or a [`Failure`].
///
/// A bare `T` converts into `Success` through `From`. Nothing converts into
/// `Failure` implicitly; failures are always built by name.
#[derive(Debug, Clone)]
pub enum Maybe<T> {
    Success(T),
    Failure(Failure),
}

impl<T> From<T> for Maybe<T> {
    fn from(value: T) -> Self {
        Maybe::Success(value)
    }
}

/// Unwraps a checked construction, panicking on a contract violation.
#[track_caller]
fn contract<T>(built: Result<T, ConstructionError>) -> T {
    match built {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

impl<T> Maybe<T> {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    pub fn success(value: T) -> Self {
        Maybe::Success(value)
    }

    pub fn from_failure(failure: Failure) -> Self {
        Maybe::Failure(failure)
    }

    /// A failure described by `message`.
    ///
    /// # Panics
    ///
    /// If `message` is empty. Use [`try_failure`](Self::try_failure) to get a
    /// [`ConstructionError`] instead.
    #[track_caller]
    pub fn failure(message: impl Into<String>) -> Self {
        contract(Self::try_failure(message))
    }

    pub fn try_failure(message: impl Into<String>) -> Result<Self, ConstructionError> {
        Failure::new(message).map(Maybe::Failure)
    }

    /// A failure with a cause; an empty `message` is taken from the cause.
    ///
    /// # Panics
    ///
    /// If both `message` and the cause's description are empty.
    #[track_caller]
    pub fn failure_with<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        contract(Self::try_failure_with(message, cause))
    }

    pub fn try_failure_with<E>(
        message: impl Into<String>,
        cause: E,
    ) -> Result<Self, ConstructionError>
    where
        E: Error + Send + Sync + 'static,
    {
        Failure::with_cause(message, cause).map(Maybe::Failure)
    }

    /// # Panics
    ///
    /// If the cause describes itself as an empty string.
    #[track_caller]
    pub fn failure_from_cause<E>(cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        contract(Self::try_failure_from_cause(cause))
    }

    pub fn try_failure_from_cause<E>(cause: E) -> Result<Self, ConstructionError>
    where
        E: Error + Send + Sync + 'static,
    {
        Failure::from_cause(cause).map(Maybe::Failure)
    }

    /// Re-wraps the failure held by `other` under this payload type, keeping
    /// its message and cause.
    ///
    /// # Panics
    ///
    /// If `other` is a success. When the caller already holds a [`Failure`],
    /// [`Failure::into_maybe`] expresses the same thing without the check.
    #[track_caller]
    pub fn failure_from<U>(other: Maybe<U>) -> Self {
        contract(Self::try_failure_from(other))
    }

    pub fn try_failure_from<U>(other: Maybe<U>) -> Result<Self, ConstructionError> {
        match other {
            Maybe::Failure(failure) => Ok(Maybe::Failure(failure)),
            Maybe::Success(_) => Err(ConstructionError::NotAFailure {
                payload: std::any::type_name::<U>(),
            }),
        }
    }

    // -----------------------------------------------------------------------
    // Probing
    // -----------------------------------------------------------------------

    pub fn is_success(&self) -> bool {
        matches!(self, Maybe::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Maybe::Failure(_))
    }

    pub fn try_get_value(&self) -> Option<&T> {
        match self {
            Maybe::Success(value) => Some(value),
            Maybe::Failure(_) => None,
        }
    }

    pub fn try_get_failure(&self) -> Option<&Failure> {
        match self {
            Maybe::Success(_) => None,
            Maybe::Failure(failure) => Some(failure),
        }
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Success(value) => Maybe::Success(value),
            Maybe::Failure(failure) => Maybe::Failure(failure.clone()),
        }
    }

    // -----------------------------------------------------------------------
    // Dispatch
    // -----------------------------------------------------------------------

    /// Runs exactly one handler, once. The failure handler gets the whole record.
    pub fn case<U, FS, FF>(self, on_success: FS, on_failure: FF) -> U
    where
        FS: FnOnce(T) -> U,
        FF: FnOnce(Failure) -> U,
    {
        match self {
            Maybe::Success(value) => on_success(value),
            Maybe::Failure(failure) => on_failure(failure),
        }
    }

    /// Async form of [`case`](Self::case). The handler is chosen and called
    /// before this returns; only its future is left to await.
    pub fn case_async<U, FS, FF, AS, AF>(
        self,
        on_success: FS,
        on_failure: FF,
    ) -> impl Future<Output = U>
    where
        FS: FnOnce(T) -> AS,
        FF: FnOnce(Failure) -> AF,
        AS: Future<Output = U>,
        AF: Future<Output = U>,
    {
        match self {
            Maybe::Success(value) => EitherFuture::Left(on_success(value)),
            Maybe::Failure(failure) => EitherFuture::Right(on_failure(failure)),
        }
    }

    // -----------------------------------------------------------------------
    // Extraction and transformation
    // -----------------------------------------------------------------------

    pub fn value_or(self, default: T) -> T {
        match self {
            Maybe::Success(value) => value,
            Maybe::Failure(_) => default,
        }
    }

    /// Success value, or `default()`. The factory only runs on a failure.
    pub fn value_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Success(value) => value,
            Maybe::Failure(_) => default(),
        }
    }

    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Success(value) => Maybe::Success(f(value)),
            Maybe::Failure(failure) => Maybe::Failure(failure),
        }
    }

    /// Leaves the container for `?`-based code.
    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            Maybe::Success(value) => Ok(value),
            Maybe::Failure(failure) => Err(failure),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
