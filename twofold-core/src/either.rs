//! A disjoint union of two unrelated payload types.
//!
//! Neither side means success or failure; use [`Maybe`](crate::Maybe) for
//! that. An [`Either`] holds exactly one payload from construction until it is
//! consumed, and no method mutates it in place.
//!
//! # Construction by type
//!
//! [`Either::of`] and [`IntoEither::into_either`] pick the side from the static
//! type of the argument. When both sides share a type the side cannot be
//! inferred and the call does not compile:
//!
//! ```compile_fail
//! use twofold_core::Either;
//!
//! let _ = Either::<u8, u8>::of(7u8);
//! ```
//!
//! Use [`Either::left`] / [`Either::right`] in that case.
//!
//! ```
//! use twofold_core::{Either, IntoEither};
//!
//! let count: Either<usize, String> = Either::of(3usize);
//! let reason: Either<usize, String> = String::from("empty input").into_either();
//!
//! assert_eq!(count.try_get_left(), Some(&3));
//! assert_eq!(reason.try_get_right().map(String::as_str), Some("empty input"));
//! ```

use std::fmt;
use std::future::Future;

use futures::future::Either as EitherFuture;

// ---------------------------------------------------------------------------
// Type
// ---------------------------------------------------------------------------

/// A value that is either an `L` or an `R`, never both and never neither.
///
/// Two instances are equal iff they inhabit the same side with equal payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    /// Left slot.
    Left(L),
    /// Right slot.
    Right(R),
}

// ---------------------------------------------------------------------------
// Side selection by type
// ---------------------------------------------------------------------------

/// Marker for the left slot in [`Inject`]. Uninhabited.
#[derive(Debug)]
pub enum AtLeft {}

/// Marker for the right slot in [`Inject`]. Uninhabited.
#[derive(Debug)]
pub enum AtRight {}

/// Places a `T` into the slot named by `Side`.
///
/// `Either<L, R>` implements `Inject<L, AtLeft>` and `Inject<R, AtRight>`.
/// The two impls only overlap for a given `T` when `L == R`, which turns an
/// ambiguous conversion into a type error.
pub trait Inject<T, Side> {
    /// Wraps `value` in the slot selected by `Side`.
    fn inject(value: T) -> Self;
}

impl<L, R> Inject<L, AtLeft> for Either<L, R> {
    fn inject(value: L) -> Self {
        Either::Left(value)
    }
}

impl<L, R> Inject<R, AtRight> for Either<L, R> {
    fn inject(value: R) -> Self {
        Either::Right(value)
    }
}

/// Converts a bare payload into the `Either` that has a slot of its type.
pub trait IntoEither<L, R, Side> {
    /// Wraps `self` in the matching slot.
    fn into_either(self) -> Either<L, R>;
}

impl<T, L, R, Side> IntoEither<L, R, Side> for T
where
    Either<L, R>: Inject<T, Side>,
{
    fn into_either(self) -> Either<L, R> {
        <Either<L, R> as Inject<T, Side>>::inject(self)
    }
}

// ---------------------------------------------------------------------------
// Construction and probing
// ---------------------------------------------------------------------------

impl<L, R> Either<L, R> {
    /// Builds the left variant.
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Builds the right variant.
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    /// Builds whichever variant has the type of `value`.
    pub fn of<T, Side>(value: T) -> Self
    where
        Self: Inject<T, Side>,
    {
        <Self as Inject<T, Side>>::inject(value)
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Borrows the left payload, or `None` when the right side is inhabited.
    pub fn try_get_left(&self) -> Option<&L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Borrows the right payload, or `None` when the left side is inhabited.
    pub fn try_get_right(&self) -> Option<&R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    pub fn into_left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    pub fn into_right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Borrowing view, so [`case`](Self::case) can run without consuming `self`.
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    // -----------------------------------------------------------------------
    // Dispatch
    // -----------------------------------------------------------------------

    /// Runs exactly one handler, once, and returns its result.
    ///
    /// Handlers returning `()` cover the side-effect-only form.
    pub fn case<U, FL, FR>(self, on_left: FL, on_right: FR) -> U
    where
        FL: FnOnce(L) -> U,
        FR: FnOnce(R) -> U,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// Async form of [`case`](Self::case).
    ///
    /// The handler is chosen and called before this returns; only the future
    /// it produced is left to await.
    pub fn case_async<U, FL, FR, AL, AR>(self, on_left: FL, on_right: FR) -> impl Future<Output = U>
    where
        FL: FnOnce(L) -> AL,
        FR: FnOnce(R) -> AR,
        AL: Future<Output = U>,
        AR: Future<Output = U>,
    {
        match self {
            Either::Left(l) => EitherFuture::Left(on_left(l)),
            Either::Right(r) => EitherFuture::Right(on_right(r)),
        }
    }

    // -----------------------------------------------------------------------
    // Extraction with defaults
    // -----------------------------------------------------------------------

    pub fn left_or(self, default: L) -> L {
        match self {
            Either::Left(l) => l,
            Either::Right(_) => default,
        }
    }

    /// Left payload, or `default()`. The factory only runs on the right side.
    pub fn left_or_else<F>(self, default: F) -> L
    where
        F: FnOnce() -> L,
    {
        match self {
            Either::Left(l) => l,
            Either::Right(_) => default(),
        }
    }

    pub fn right_or(self, default: R) -> R {
        match self {
            Either::Left(_) => default,
            Either::Right(r) => r,
        }
    }

    /// Right payload, or `default()`. The factory only runs on the left side.
    pub fn right_or_else<F>(self, default: F) -> R
    where
        F: FnOnce() -> R,
    {
        match self {
            Either::Left(_) => default(),
            Either::Right(r) => r,
        }
    }

    // -----------------------------------------------------------------------
    // Transformations
    // -----------------------------------------------------------------------

    pub fn map_left<F, U>(self, f: F) -> Either<U, R>
    where
        F: FnOnce(L) -> U,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    pub fn map_right<F, U>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Swaps the slots.
    pub fn flip(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(l) => l.fmt(f),
            Either::Right(r) => r.fmt(f),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
